use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineSnapshot {
    pub id: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
    pub logo: Option<String>,
    pub aircraft_model: Option<String>,
}
