use crate::repository::{DocumentType, Gender};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub english_first_name: String,
    pub english_last_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub passport_expiry: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn passenger_json_deserialize_minimal() {
        let json = r#"{
            "englishFirstName": "Reza",
            "englishLastName": "Ahmadi",
            "documentType": "nationalId",
            "documentNumber": "0012345678"
        }"#;

        let passenger = serde_json::from_str::<Passenger>(json).unwrap();

        assert_eq!(passenger.document_type, DocumentType::NationalId);
        assert!(passenger.nationality.is_none());
        assert!(passenger.gender.is_none());
    }

    #[test]
    fn passenger_json_deserialize_unknown_document_type() {
        let json = r#"{
            "englishFirstName": "Reza",
            "englishLastName": "Ahmadi",
            "documentType": "drivingLicense",
            "documentNumber": "0012345678"
        }"#;

        assert!(serde_json::from_str::<Passenger>(json).is_err());
    }

    #[test]
    fn passenger_json_deserialize_unknown_gender() {
        let json = r#"{
            "englishFirstName": "Reza",
            "englishLastName": "Ahmadi",
            "documentType": "passport",
            "documentNumber": "K12345678",
            "gender": "unknown"
        }"#;

        assert!(serde_json::from_str::<Passenger>(json).is_err());
    }

    #[test]
    fn passenger_json_deserialize_missing_last_name() {
        let json = r#"{
            "englishFirstName": "Reza",
            "documentType": "passport",
            "documentNumber": "K12345678"
        }"#;

        assert!(serde_json::from_str::<Passenger>(json).is_err());
    }
}
