use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Connectivity,
    Rejected,
    MissingCredential,
}

///
/// Transient message shown to the agent when a ticket could not be opened.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl From<&Error> for Notification {
    fn from(err: &Error) -> Self {
        let (kind, message) = match err {
            Error::MissingCredential => (
                NotificationKind::MissingCredential,
                "You are not signed in, sign in and open the ticket again",
            ),
            err if err.is_connectivity() => (
                NotificationKind::Connectivity,
                "Ticket service is unreachable, check your connection",
            ),
            Error::NotFound => (NotificationKind::Rejected, "Ticket was not found"),
            _ => (NotificationKind::Rejected, "Ticket could not be loaded"),
        };

        Self {
            kind,
            message: message.to_string(),
        }
    }
}
