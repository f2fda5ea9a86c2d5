//!
//! Turns client input into ticket data that satisfies stored ticket invariants:
//! at least one passenger, unique document numbers within the ticket and
//! fully populated origin, destination and date.
//!

use super::TicketsServiceConfig;
use crate::{
    dto::input,
    error::Error,
    repository::{
        AirlineRef, AirlineSnapshot, CityRef, DocumentType, FlightInfo, Passenger, RouteRef,
        TicketQuery, TicketSort, DEFAULT_NATIONALITY,
    },
};
use bson::oid::ObjectId;
use std::{collections::HashSet, str::FromStr};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub fn validate_passengers(passengers: Vec<input::Passenger>) -> Result<Vec<Passenger>, Error> {
    if passengers.is_empty() {
        return Err(Error::Validation(
            "ticket needs at least one passenger".to_string(),
        ));
    }

    let mut document_numbers = HashSet::with_capacity(passengers.len());
    let mut validated = Vec::with_capacity(passengers.len());

    for (idx, passenger) in passengers.into_iter().enumerate() {
        let english_first_name = required(passenger.english_first_name, || {
            format!("passengers[{idx}].englishFirstName")
        })?;
        let english_last_name = required(passenger.english_last_name, || {
            format!("passengers[{idx}].englishLastName")
        })?;
        let document_number = required(passenger.document_number, || {
            format!("passengers[{idx}].documentNumber")
        })?;

        if !document_numbers.insert(document_number.clone()) {
            return Err(Error::Validation(format!(
                "passengers[{idx}].documentNumber is duplicated within the ticket"
            )));
        }

        let passport_expiry = match passenger.document_type {
            DocumentType::Passport => optional(passenger.passport_expiry),
            DocumentType::NationalId => None,
        };
        let nationality = optional(passenger.nationality)
            .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string());

        validated.push(Passenger {
            english_first_name,
            english_last_name,
            document_type: passenger.document_type,
            document_number,
            passport_expiry,
            nationality,
            birth_date: optional(passenger.birth_date),
            gender: passenger.gender,
            age: optional(passenger.age),
        });
    }

    Ok(validated)
}

pub fn validate_flight_info(flight_info: input::FlightInfo) -> Result<FlightInfo, Error> {
    let origin = required(flight_info.origin, || "flightInfo.origin".to_string())?;
    let destination = required(flight_info.destination, || {
        "flightInfo.destination".to_string()
    })?;
    let date = required(flight_info.date, || "flightInfo.date".to_string())?;
    if !is_flight_date(&date) {
        return Err(Error::Validation(
            "flightInfo.date must have format YYYY/MM/DD".to_string(),
        ));
    }

    Ok(FlightInfo {
        origin,
        destination,
        date,
        time: optional(flight_info.time),
        flight_number: optional(flight_info.flight_number),
        airline: optional(flight_info.airline),
        origin_city_id: reference(flight_info.origin_city_id, "flightInfo.originCityId")?
            .map(CityRef),
        destination_city_id: reference(
            flight_info.destination_city_id,
            "flightInfo.destinationCityId",
        )?
        .map(CityRef),
        fromair: optional(flight_info.fromair),
        toair: optional(flight_info.toair),
        from_airport_code: optional(flight_info.from_airport_code),
        to_airport_code: optional(flight_info.to_airport_code),
        price: optional(flight_info.price),
        tax: optional(flight_info.tax),
        total: optional(flight_info.total),
        aircraft: optional(flight_info.aircraft),
        route_id: reference(flight_info.route_id, "flightInfo.routeId")?.map(RouteRef),
    })
}

pub fn validate_airline(airline: input::AirlineSnapshot) -> Result<AirlineSnapshot, Error> {
    Ok(AirlineSnapshot {
        id: reference(airline.id, "airline.id")?.map(AirlineRef),
        name: optional(airline.name),
        english_name: optional(airline.english_name),
        logo: optional(airline.logo),
        aircraft_model: optional(airline.aircraft_model),
    })
}

pub fn validate_filters(
    config: &TicketsServiceConfig,
    filters: input::TicketFilters,
) -> Result<TicketQuery, Error> {
    let page = filters.page.unwrap_or(1);
    if page == 0 {
        return Err(Error::Validation("page indexing starts at 1".to_string()));
    }

    let limit = filters
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE.min(config.max_page_size));
    if limit == 0 || limit > config.max_page_size {
        return Err(Error::Validation(format!(
            "limit must be between 1 and {}",
            config.max_page_size
        )));
    }

    let sort = match filters.sort {
        Some(sort) => TicketSort::from_str(&sort)
            .map_err(|_| Error::Validation(format!("unsupported sort '{sort}'")))?,
        None => TicketSort::default(),
    };

    let date = filter_date(filters.date, "date")?;
    let date_from = filter_date(filters.date_from, "dateFrom")?;
    let date_to = filter_date(filters.date_to, "dateTo")?;
    if let (Some(date_from), Some(date_to)) = (&date_from, &date_to) {
        if date_from > date_to {
            return Err(Error::Validation(
                "dateFrom must not be after dateTo".to_string(),
            ));
        }
    }

    Ok(TicketQuery {
        page,
        limit,
        sort,
        origin: filter_text(filters.origin, "origin")?,
        destination: filter_text(filters.destination, "destination")?,
        date,
        flight_number: filter_text(filters.flight_number, "flightNumber")?,
        airline: filter_text(filters.airline, "airline")?,
        passenger_name: filter_text(filters.passenger_name, "passengerName")?,
        document_number: filter_text(filters.document_number, "documentNumber")?,
        date_from,
        date_to,
    })
}

///
/// Calendar agnostic `YYYY/MM/DD`, so both gregorian and jalali dates pass.
/// Fixed width keeps lexical order equal to chronological order.
///
pub fn is_flight_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'/' || bytes[7] != b'/' {
        return false;
    }

    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        bytes[range.clone()]
            .iter()
            .all(u8::is_ascii_digit)
            .then(|| value[range].parse().ok())
            .flatten()
    };

    match (digits(0..4), digits(5..7), digits(8..10)) {
        (Some(_), Some(month), Some(day)) => (1..=12).contains(&month) && (1..=31).contains(&day),
        _ => false,
    }
}

fn required(value: String, field: impl FnOnce() -> String) -> Result<String, Error> {
    let trimmed = value.trim();
    match trimmed.is_empty() {
        true => Err(Error::Validation(format!("{} is required", field()))),
        false => Ok(trimmed.to_string()),
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn reference(value: Option<String>, field: &str) -> Result<Option<ObjectId>, Error> {
    match optional(value) {
        Some(hex) => ObjectId::parse_str(&hex)
            .map(Some)
            .map_err(|_| Error::Validation(format!("{field} is not a valid id"))),
        None => Ok(None),
    }
}

fn filter_text(value: Option<String>, name: &str) -> Result<Option<String>, Error> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(Error::Validation(format!("filter {name} is empty")))
        }
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

fn filter_date(value: Option<String>, name: &str) -> Result<Option<String>, Error> {
    match filter_text(value, name)? {
        Some(date) if !is_flight_date(&date) => Err(Error::Validation(format!(
            "filter {name} must have format YYYY/MM/DD"
        ))),
        date => Ok(date),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;

    fn config() -> TicketsServiceConfig {
        TicketsServiceConfig { max_page_size: 50 }
    }

    #[test]
    fn validate_passengers_empty() {
        let result = validate_passengers(vec![]);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_passengers_blank_first_name() {
        let mut passenger = fixtures::passenger_input("K1");
        passenger.english_first_name = "   ".to_string();

        let result = validate_passengers(vec![passenger]);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_passengers_duplicated_document_number() {
        let result = validate_passengers(vec![
            fixtures::passenger_input("K1"),
            fixtures::passenger_input("K2"),
            fixtures::passenger_input(" K1 "),
        ]);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_passengers_default_nationality() {
        let passengers = validate_passengers(vec![fixtures::passenger_input("K1")]).unwrap();

        assert_eq!(passengers[0].nationality, DEFAULT_NATIONALITY);
    }

    #[test]
    fn validate_passengers_national_id_drops_passport_expiry() {
        let mut passenger = fixtures::passenger_input("0012345678");
        passenger.document_type = DocumentType::NationalId;
        passenger.passport_expiry = Some("2030/01/01".to_string());

        let passengers = validate_passengers(vec![passenger]).unwrap();

        assert_eq!(passengers[0].passport_expiry, None);
    }

    #[test]
    fn validate_passengers_keeps_order() {
        let passengers = validate_passengers(vec![
            fixtures::passenger_input("B"),
            fixtures::passenger_input("A"),
        ])
        .unwrap();

        let document_numbers = passengers
            .iter()
            .map(|passenger| passenger.document_number.as_str())
            .collect::<Vec<_>>();
        assert_eq!(document_numbers, vec!["B", "A"]);
    }

    #[test]
    fn validate_flight_info_missing_destination() {
        let mut flight_info = fixtures::flight_info_input();
        flight_info.destination = String::new();

        let result = validate_flight_info(flight_info);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_flight_info_invalid_date() {
        let mut flight_info = fixtures::flight_info_input();
        flight_info.date = "15.01.2024".to_string();

        let result = validate_flight_info(flight_info);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_flight_info_invalid_route_id() {
        let mut flight_info = fixtures::flight_info_input();
        flight_info.route_id = Some("not-an-object-id".to_string());

        let result = validate_flight_info(flight_info);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn validate_flight_info_references_parsed() {
        let city = ObjectId::new();
        let route = ObjectId::new();
        let mut flight_info = fixtures::flight_info_input();
        flight_info.origin_city_id = Some(city.to_hex());
        flight_info.route_id = Some(route.to_hex());
        flight_info.destination_city_id = Some(String::new());

        let flight_info = validate_flight_info(flight_info).unwrap();

        assert_eq!(flight_info.origin_city_id, Some(CityRef(city)));
        assert_eq!(flight_info.route_id, Some(RouteRef(route)));
        assert_eq!(flight_info.destination_city_id, None);
    }

    #[test]
    fn is_flight_date_shapes() {
        assert!(is_flight_date("2024/01/31"));
        assert!(is_flight_date("1403/12/30"));
        assert!(!is_flight_date("2024/1/31"));
        assert!(!is_flight_date("2024-01-31"));
        assert!(!is_flight_date("2024/13/01"));
        assert!(!is_flight_date("2024/00/10"));
        assert!(!is_flight_date("2024/01/32"));
        assert!(!is_flight_date("20a4/01/01"));
        assert!(!is_flight_date("۱۴۰۳/۰۱/۰۱"));
    }

    #[test]
    fn validate_filters_defaults() {
        let query = validate_filters(&config(), input::TicketFilters::default()).unwrap();

        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort, TicketSort::CreatedAtDesc);
    }

    #[test]
    fn validate_filters_default_limit_capped_by_max_page_size() {
        let config = TicketsServiceConfig { max_page_size: 5 };

        let query = validate_filters(&config, input::TicketFilters::default()).unwrap();

        assert_eq!(query.limit, 5);
    }

    #[test]
    fn validate_filters_page_zero() {
        let filters = input::TicketFilters {
            page: Some(0),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_limit_too_large() {
        let filters = input::TicketFilters {
            limit: Some(51),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_unknown_sort() {
        let filters = input::TicketFilters {
            sort: Some("price".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_sort_flight_date_ascending() {
        let filters = input::TicketFilters {
            sort: Some("flightDate".to_string()),
            ..Default::default()
        };

        let query = validate_filters(&config(), filters).unwrap();

        assert_eq!(query.sort, TicketSort::FlightDateAsc);
    }

    #[test]
    fn validate_filters_malformed_date_from() {
        let filters = input::TicketFilters {
            date_from: Some("2024-01-01".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_reversed_range() {
        let filters = input::TicketFilters {
            date_from: Some("2024/02/01".to_string()),
            date_to: Some("2024/01/01".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_blank_origin() {
        let filters = input::TicketFilters {
            origin: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            validate_filters(&config(), filters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn validate_filters_range_with_origin() {
        let filters = input::TicketFilters {
            origin: Some("THR".to_string()),
            date_from: Some("2024/01/01".to_string()),
            date_to: Some("2024/01/31".to_string()),
            ..Default::default()
        };

        let query = validate_filters(&config(), filters).unwrap();

        assert_eq!(query.origin.as_deref(), Some("THR"));
        assert_eq!(query.date_from.as_deref(), Some("2024/01/01"));
        assert_eq!(query.date_to.as_deref(), Some("2024/01/31"));
    }
}
