use reqwest::StatusCode;

///
/// Failure of a call to the floating tickets service.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing was sent
    #[error("no credential available")]
    MissingCredential,

    /// Base url can not carry path segments, nothing was sent
    #[error("invalid base url")]
    InvalidBaseUrl,

    /// Request was sent but no response arrived
    #[error("connectivity error: {0}")]
    Connectivity(reqwest::Error),

    #[error("ticket not found")]
    NotFound,

    #[error("credential rejected")]
    Unauthorized,

    #[error("missing role")]
    Forbidden,

    #[error("validation failed")]
    Validation,

    #[error("document generator failed")]
    Upstream,

    #[error("request rejected with status {0}")]
    Rejected(StatusCode),

    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}

impl Error {
    ///
    /// Server never answered, as opposed to answering with a rejection.
    ///
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Error::Connectivity(_))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StagingError {
    #[error("nothing staged for ticket")]
    NotStaged,

    #[error("staged ticket is older than allowed")]
    Stale,
}
