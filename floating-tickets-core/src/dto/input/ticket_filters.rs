use serde::Deserialize;

///
/// Raw history query parameters, validated by the service.
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub passenger_name: Option<String>,
    pub document_number: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
