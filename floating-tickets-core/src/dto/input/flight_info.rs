use serde::Deserialize;

///
/// City and route ids are hex encoded ObjectIds.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: Option<String>,
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub origin_city_id: Option<String>,
    pub destination_city_id: Option<String>,
    pub fromair: Option<String>,
    pub toair: Option<String>,
    pub from_airport_code: Option<String>,
    pub to_airport_code: Option<String>,
    pub price: Option<String>,
    pub tax: Option<String>,
    pub total: Option<String>,
    pub aircraft: Option<String>,
    pub route_id: Option<String>,
}
