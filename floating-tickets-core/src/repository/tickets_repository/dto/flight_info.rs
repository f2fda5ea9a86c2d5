use super::{CityRef, RouteRef};
use serde::{Deserialize, Serialize};

///
/// Flight data printed on the ticket.
///
/// Prices are kept as entered (strings), callers parse them before arithmetic.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub origin: String,
    pub destination: String,

    /// `YYYY/MM/DD`
    pub date: String,
    pub time: Option<String>,
    pub flight_number: Option<String>,
    pub airline: Option<String>,

    pub origin_city_id: Option<CityRef>,
    pub destination_city_id: Option<CityRef>,

    pub fromair: Option<String>,
    pub toair: Option<String>,
    pub from_airport_code: Option<String>,
    pub to_airport_code: Option<String>,

    pub price: Option<String>,
    pub tax: Option<String>,
    pub total: Option<String>,

    pub aircraft: Option<String>,
    pub route_id: Option<RouteRef>,
}
