use strum::EnumString;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
pub enum TicketSort {
    #[strum(serialize = "createdAt")]
    CreatedAtAsc,
    #[default]
    #[strum(serialize = "-createdAt")]
    CreatedAtDesc,
    #[strum(serialize = "flightDate")]
    FlightDateAsc,
    #[strum(serialize = "-flightDate")]
    FlightDateDesc,
}

///
/// Validated history query. Every filter that is set must match.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    /// indexing starts at 1
    pub page: u32,
    pub limit: u32,
    pub sort: TicketSort,

    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub passenger_name: Option<String>,
    pub document_number: Option<String>,

    /// inclusive
    pub date_from: Option<String>,
    /// inclusive
    pub date_to: Option<String>,
}
