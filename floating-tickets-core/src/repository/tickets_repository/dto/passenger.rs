use serde::{Deserialize, Serialize};

pub const DEFAULT_NATIONALITY: &str = "Iranian";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    NationalId,
    Passport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub english_first_name: String,
    pub english_last_name: String,
    pub document_type: DocumentType,
    pub document_number: String,

    /// Only kept when [DocumentType::Passport]
    pub passport_expiry: Option<String>,
    pub nationality: String,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<String>,
}
