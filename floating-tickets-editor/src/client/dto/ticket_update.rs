use super::{FlightInfo, Passenger, SourceType};
use serde::Serialize;

///
/// Replaces passengers and flight info of the ticket as a whole.
///
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}
