use serde::Deserialize;

#[derive(Deserialize)]
pub struct GeneratedDocument {
    pub path: String,
}
