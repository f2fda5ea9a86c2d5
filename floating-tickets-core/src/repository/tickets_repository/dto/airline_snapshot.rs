use super::AirlineRef;
use serde::{Deserialize, Serialize};

///
/// Copy of airline identity taken when the ticket was generated.
///
/// Later changes of the airline record must not change issued tickets,
/// so nothing here is ever refreshed from the airline collection.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineSnapshot {
    pub id: Option<AirlineRef>,
    pub name: Option<String>,
    pub english_name: Option<String>,
    pub logo: Option<String>,
    pub aircraft_model: Option<String>,
}
