use super::{AirlineSnapshot, FlightInfo, Passenger, SourceType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketGenerate {
    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    pub airline: AirlineSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}
