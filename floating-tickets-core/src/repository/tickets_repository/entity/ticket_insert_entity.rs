use crate::repository::{AirlineSnapshot, FlightInfo, Passenger, SourceType};
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInsertEntity<'a> {
    pub passengers: &'a [Passenger],
    pub flight_info: &'a FlightInfo,
    pub airline: &'a AirlineSnapshot,
    pub source_type: SourceType,
    pub pdf_path: Option<&'a str>,

    pub created_by: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
