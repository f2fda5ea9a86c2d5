use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Stores new ticket and generates its document.
    ///
    /// Failing generator does not fail the call, ticket is returned
    /// without pdf_path and can be regenerated later.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - there are no passengers
    ///     - passenger names or document number are blank
    ///     - document number repeats within the ticket
    ///     - origin, destination or date is blank
    ///     - date does not have format YYYY/MM/DD
    ///     - any reference is not a valid ObjectId
    ///
    async fn generate_ticket(
        &self,
        created_by: Uuid,
        ticket: input::TicketGenerate,
    ) -> Result<output::FloatingTicket, Error>;

    ///
    /// Find page of tickets matching all provided filters
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - page is 0 or limit is outside of 1..=max_page_size
    ///     - sort is unknown
    ///     - any date filter does not have format YYYY/MM/DD
    ///     - dateFrom is after dateTo
    ///     - any filter is blank
    ///
    async fn find_tickets(&self, filters: input::TicketFilters)
        -> Result<output::TicketsPage, Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn find_ticket(&self, id: ObjectId) -> Result<output::FloatingTicket, Error>;

    ///
    /// Replaces passengers and flight info of the ticket.
    /// Document is not regenerated.
    ///
    /// ### Errors
    /// - [Error::Validation] on the same rules as [TicketsService::generate_ticket]
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn update_ticket(
        &self,
        id: ObjectId,
        update: input::TicketUpdate,
    ) -> Result<output::FloatingTicket, Error>;

    ///
    /// Generates document again from the current ticket data.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    /// - [Error::DocumentGenerator] when generator failed
    ///
    async fn regenerate_ticket(&self, id: ObjectId) -> Result<output::FloatingTicket, Error>;

    ///
    /// Deletes ticket and asks generator to remove its document.
    /// Failure of the removal is only logged.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn delete_ticket(&self, id: ObjectId) -> Result<(), Error>;
}
