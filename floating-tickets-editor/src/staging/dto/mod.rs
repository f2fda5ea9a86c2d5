mod staged_ticket;
mod staging_store_config;

pub use staged_ticket::*;
pub use staging_store_config::*;
