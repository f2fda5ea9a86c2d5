//!
//! Ticket values shared by unit tests.
//!

use crate::client::{DocumentType, FloatingTicket, FlightInfo, Passenger, SourceType};
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

pub fn floating_ticket(id: &str) -> FloatingTicket {
    let created_at = OffsetDateTime::now_utc() - Duration::from_secs(3600);

    FloatingTicket {
        id: id.to_string(),
        passengers: vec![Passenger {
            english_first_name: "Ali".to_string(),
            english_last_name: "Moradi".to_string(),
            document_type: DocumentType::Passport,
            document_number: "K10000001".to_string(),
            passport_expiry: Some("2029/11/30".to_string()),
            nationality: Some("Iranian".to_string()),
            birth_date: None,
            gender: None,
            age: None,
        }],
        flight_info: FlightInfo {
            origin: "THR".to_string(),
            destination: "IST".to_string(),
            date: "2024/01/15".to_string(),
            ..Default::default()
        },
        airline: Default::default(),
        source_type: SourceType::Route,
        pdf_path: Some("tickets/old.pdf".to_string()),
        created_by: Uuid::from_u128(1001),
        created_at,
        updated_at: created_at,
    }
}
