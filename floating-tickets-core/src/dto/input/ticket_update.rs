use super::{FlightInfo, Passenger};
use crate::repository::SourceType;
use serde::Deserialize;

///
/// Full replacement of ticket content. Nothing is merged
/// with the stored passengers or flight info.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    pub source_type: Option<SourceType>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_update_json_deserialize_source_type() {
        let json = r#"{
            "passengers": [],
            "flightInfo": {
                "origin": "THR",
                "destination": "KIH",
                "date": "1403/05/12"
            },
            "sourceType": "city"
        }"#;

        let update = serde_json::from_str::<TicketUpdate>(json).unwrap();

        assert_eq!(update.source_type, Some(SourceType::City));
        assert_eq!(update.flight_info.destination, "KIH");
    }

    #[test]
    fn ticket_update_json_deserialize_missing_flight_info() {
        let json = r#"{ "passengers": [] }"#;

        assert!(serde_json::from_str::<TicketUpdate>(json).is_err());
    }
}
