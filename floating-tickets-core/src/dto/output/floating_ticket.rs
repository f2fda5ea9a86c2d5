use crate::repository::{self, DocumentType, Gender, SourceType};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingTicket {
    pub id: String,
    pub passengers: Vec<Passenger>,
    pub flight_info: FlightInfo,
    pub airline: AirlineSnapshot,
    pub source_type: SourceType,
    pub pdf_path: Option<String>,
    pub created_by: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub english_first_name: String,
    pub english_last_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub passport_expiry: Option<String>,
    pub nationality: String,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInfo {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: Option<String>,
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub origin_city_id: Option<String>,
    pub destination_city_id: Option<String>,
    pub fromair: Option<String>,
    pub toair: Option<String>,
    pub from_airport_code: Option<String>,
    pub to_airport_code: Option<String>,
    pub price: Option<String>,
    pub tax: Option<String>,
    pub total: Option<String>,
    pub aircraft: Option<String>,
    pub route_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineSnapshot {
    pub id: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
    pub logo: Option<String>,
    pub aircraft_model: Option<String>,
}

impl From<repository::FloatingTicket> for FloatingTicket {
    fn from(value: repository::FloatingTicket) -> Self {
        Self {
            id: value.id.to_hex(),
            passengers: value.passengers.into_iter().map(Passenger::from).collect(),
            flight_info: value.flight_info.into(),
            airline: value.airline.into(),
            source_type: value.source_type,
            pdf_path: value.pdf_path,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<repository::Passenger> for Passenger {
    fn from(value: repository::Passenger) -> Self {
        Self {
            english_first_name: value.english_first_name,
            english_last_name: value.english_last_name,
            document_type: value.document_type,
            document_number: value.document_number,
            passport_expiry: value.passport_expiry,
            nationality: value.nationality,
            birth_date: value.birth_date,
            gender: value.gender,
            age: value.age,
        }
    }
}

impl From<repository::FlightInfo> for FlightInfo {
    fn from(value: repository::FlightInfo) -> Self {
        Self {
            origin: value.origin,
            destination: value.destination,
            date: value.date,
            time: value.time,
            flight_number: value.flight_number,
            airline: value.airline,
            origin_city_id: value.origin_city_id.map(|city| city.0.to_hex()),
            destination_city_id: value.destination_city_id.map(|city| city.0.to_hex()),
            fromair: value.fromair,
            toair: value.toair,
            from_airport_code: value.from_airport_code,
            to_airport_code: value.to_airport_code,
            price: value.price,
            tax: value.tax,
            total: value.total,
            aircraft: value.aircraft,
            route_id: value.route_id.map(|route| route.0.to_hex()),
        }
    }
}

impl From<repository::AirlineSnapshot> for AirlineSnapshot {
    fn from(value: repository::AirlineSnapshot) -> Self {
        Self {
            id: value.id.map(|airline| airline.0.to_hex()),
            name: value.name,
            english_name: value.english_name,
            logo: value.logo,
            aircraft_model: value.aircraft_model,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{CityRef, DEFAULT_NATIONALITY};
    use bson::oid::ObjectId;
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn floating_ticket_json_serialize_camel_case_and_hex_ids() {
        let id = ObjectId::new();
        let city = ObjectId::new();
        let ticket = repository::FloatingTicket {
            id,
            passengers: vec![repository::Passenger {
                english_first_name: "Mina".to_string(),
                english_last_name: "Rahimi".to_string(),
                document_type: DocumentType::NationalId,
                document_number: "0076543210".to_string(),
                passport_expiry: None,
                nationality: DEFAULT_NATIONALITY.to_string(),
                birth_date: None,
                gender: Some(Gender::Female),
                age: None,
            }],
            flight_info: repository::FlightInfo {
                origin: "THR".to_string(),
                destination: "AWZ".to_string(),
                date: "2024/01/05".to_string(),
                time: None,
                flight_number: None,
                airline: None,
                origin_city_id: Some(CityRef(city)),
                destination_city_id: None,
                fromair: None,
                toair: None,
                from_airport_code: None,
                to_airport_code: None,
                price: None,
                tax: None,
                total: None,
                aircraft: None,
                route_id: None,
            },
            airline: repository::AirlineSnapshot::default(),
            source_type: SourceType::City,
            pdf_path: None,
            created_by: Uuid::from_u128(42),
            created_at: datetime!(2024-01-01 10:00:00 UTC),
            updated_at: datetime!(2024-01-02 10:00:00 UTC),
        };

        let json = serde_json::to_value(FloatingTicket::from(ticket)).unwrap();

        assert_eq!(json["id"], Value::String(id.to_hex()));
        assert_eq!(json["sourceType"], "city");
        assert_eq!(json["passengers"][0]["documentType"], "nationalId");
        assert_eq!(json["passengers"][0]["englishFirstName"], "Mina");
        assert_eq!(json["flightInfo"]["originCityId"], Value::String(city.to_hex()));
        assert_eq!(json["pdfPath"], Value::Null);
        assert_eq!(json["createdAt"], "2024-01-01T10:00:00Z");
    }
}
