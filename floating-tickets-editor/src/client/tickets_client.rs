use super::{FloatingTicket, TicketFilters, TicketGenerate, TicketUpdate, TicketsPage};
use crate::error::Error;
use async_trait::async_trait;

///
/// Every call fails with [Error::MissingCredential] without sending
/// anything when no credential is available.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsClient: Send + Sync {
    async fn generate_ticket(&self, ticket: &TicketGenerate) -> Result<FloatingTicket, Error>;

    async fn find_tickets(&self, filters: &TicketFilters) -> Result<TicketsPage, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when id does not resolve to a ticket
    ///
    async fn find_ticket(&self, id: &str) -> Result<FloatingTicket, Error>;

    async fn update_ticket(&self, id: &str, update: &TicketUpdate)
        -> Result<FloatingTicket, Error>;

    ///
    /// ### Errors
    /// - [Error::Upstream] when document generator failed
    ///
    async fn regenerate_ticket(&self, id: &str) -> Result<FloatingTicket, Error>;

    async fn delete_ticket(&self, id: &str) -> Result<(), Error>;
}
