use super::{AirlineSnapshot, FlightInfo, Passenger};
use crate::repository::tickets_repository::entity::TicketFindEntity;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Which selection path of the ticket builder produced the ticket.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    #[default]
    Route,
    City,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTicket {
    pub id: ObjectId,

    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    pub airline: AirlineSnapshot,
    pub source_type: SourceType,

    /// Can describe older content than the ticket has now,
    /// it is refreshed by regeneration only
    pub pdf_path: Option<String>,

    pub created_by: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketFindEntity> for FloatingTicket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            passengers: value.passengers,
            flight_info: value.flight_info,
            airline: value.airline,
            source_type: value.source_type,
            pdf_path: value.pdf_path,
            created_by: value.created_by.into(),
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
