use crate::client::FloatingTicket;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// Ticket loaded for editing, waiting for the builder to pick it up.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedTicket {
    pub id: String,
    pub data: FloatingTicket,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
