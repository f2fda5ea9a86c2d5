use super::{AirlineSnapshot, FlightInfo, Passenger};
use crate::repository::SourceType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketGenerate {
    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    #[serde(default)]
    pub airline: AirlineSnapshot,
    pub source_type: Option<SourceType>,
}
