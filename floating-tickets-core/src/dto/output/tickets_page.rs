use super::FloatingTicket;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsPage {
    pub tickets: Vec<FloatingTicket>,
    pub page: u32,
    pub limit: u32,

    /// number of all tickets matching filters
    pub total: u64,
}
