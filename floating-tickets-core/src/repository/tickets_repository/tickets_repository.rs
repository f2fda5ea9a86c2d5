use super::{AirlineSnapshot, FlightInfo, FloatingTicket, Passenger, SourceType, TicketQuery};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket without pdf. `updated_at` is set to `created_at`.
    ///
    async fn insert(
        &self,
        passengers: Vec<Passenger>,
        flight_info: FlightInfo,
        airline: AirlineSnapshot,
        source_type: SourceType,
        created_by: Uuid,
        created_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<FloatingTicket>, Error>;

    ///
    /// Finds one page of tickets matching the query.
    ///
    /// ### Returns
    /// tickets on requested page and number of all matching tickets
    ///
    async fn find_many(&self, query: TicketQuery) -> Result<(Vec<FloatingTicket>, u64), Error>;

    ///
    /// Replaces passengers and flight info of the ticket.
    /// Source type is replaced only when it is provided.
    ///
    /// ### Returns
    /// ticket after the update
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn update_content(
        &self,
        id: ObjectId,
        passengers: Vec<Passenger>,
        flight_info: FlightInfo,
        source_type: Option<SourceType>,
        updated_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error>;

    ///
    /// ### Returns
    /// ticket after the update
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn update_pdf_path(
        &self,
        id: ObjectId,
        pdf_path: String,
        updated_at: OffsetDateTime,
    ) -> Result<FloatingTicket, Error>;

    ///
    /// ### Returns
    /// deleted ticket
    ///
    /// ### Errors
    /// - [Error::NoDocumentDeleted] when ticket does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<FloatingTicket, Error>;
}
