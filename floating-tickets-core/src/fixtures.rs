//!
//! Ticket values shared by unit tests.
//!

use crate::{
    dto::input,
    repository::{
        AirlineSnapshot, DocumentType, FlightInfo, FloatingTicket, Gender, Passenger, SourceType,
        DEFAULT_NATIONALITY,
    },
};
use bson::oid::ObjectId;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

pub fn passenger(document_number: &str) -> Passenger {
    Passenger {
        english_first_name: "Ali".to_string(),
        english_last_name: "Moradi".to_string(),
        document_type: DocumentType::Passport,
        document_number: document_number.to_string(),
        passport_expiry: Some("2029/11/30".to_string()),
        nationality: DEFAULT_NATIONALITY.to_string(),
        birth_date: Some("1990/04/12".to_string()),
        gender: Some(Gender::Male),
        age: Some("34".to_string()),
    }
}

pub fn flight_info() -> FlightInfo {
    FlightInfo {
        origin: "THR".to_string(),
        destination: "IST".to_string(),
        date: "2024/01/15".to_string(),
        time: Some("08:45".to_string()),
        flight_number: Some("IR 717".to_string()),
        airline: Some("Iran Air".to_string()),
        origin_city_id: None,
        destination_city_id: None,
        fromair: Some("Imam Khomeini".to_string()),
        toair: Some("Istanbul Airport".to_string()),
        from_airport_code: Some("IKA".to_string()),
        to_airport_code: Some("IST".to_string()),
        price: Some("250".to_string()),
        tax: Some("25".to_string()),
        total: Some("275".to_string()),
        aircraft: Some("A320".to_string()),
        route_id: None,
    }
}

pub fn floating_ticket() -> FloatingTicket {
    let created_at = OffsetDateTime::now_utc() - Duration::days(2);

    FloatingTicket {
        id: ObjectId::new(),
        passengers: vec![passenger("K10000001")],
        flight_info: flight_info(),
        airline: AirlineSnapshot {
            id: None,
            name: Some("هما".to_string()),
            english_name: Some("Iran Air".to_string()),
            logo: Some("airlines/iran-air.png".to_string()),
            aircraft_model: Some("A320".to_string()),
        },
        source_type: SourceType::Route,
        pdf_path: Some("tickets/old.pdf".to_string()),
        created_by: Uuid::from_u128(1001),
        created_at,
        updated_at: created_at,
    }
}

pub fn passenger_input(document_number: &str) -> input::Passenger {
    input::Passenger {
        english_first_name: "Ali".to_string(),
        english_last_name: "Moradi".to_string(),
        document_type: DocumentType::Passport,
        document_number: document_number.to_string(),
        passport_expiry: Some("2029/11/30".to_string()),
        nationality: None,
        birth_date: None,
        gender: Some(Gender::Male),
        age: None,
    }
}

pub fn flight_info_input() -> input::FlightInfo {
    input::FlightInfo {
        origin: "THR".to_string(),
        destination: "IST".to_string(),
        date: "2024/01/15".to_string(),
        time: None,
        flight_number: Some("IR 717".to_string()),
        airline: Some("Iran Air".to_string()),
        origin_city_id: None,
        destination_city_id: None,
        fromair: None,
        toair: None,
        from_airport_code: None,
        to_airport_code: None,
        price: Some("250".to_string()),
        tax: None,
        total: None,
        aircraft: None,
        route_id: None,
    }
}
