use crate::repository::{FlightInfo, Passenger, SourceType};
use bson::DateTime;
use serde::Serialize;

///
/// Body of `$set` used when ticket content is edited.
///
/// Fields that are not listed here (pdfPath, createdBy, createdAt, airline)
/// are never touched by an edit.
///
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketContentUpdateEntity<'a> {
    pub passengers: &'a [Passenger],
    pub flight_info: &'a FlightInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    pub updated_at: DateTime,
}
