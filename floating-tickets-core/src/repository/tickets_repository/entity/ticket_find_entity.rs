use crate::repository::{AirlineSnapshot, FlightInfo, Passenger, SourceType};
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFindEntity {
    #[serde(rename = "_id")]
    pub _id: ObjectId,

    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    #[serde(default)]
    pub airline: AirlineSnapshot,
    #[serde(default)]
    pub source_type: SourceType,
    pub pdf_path: Option<String>,

    pub created_by: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
