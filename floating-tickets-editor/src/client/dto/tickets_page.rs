use super::FloatingTicket;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TicketsPage {
    pub tickets: Vec<FloatingTicket>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}
