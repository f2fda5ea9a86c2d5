mod dto;
mod http_tickets_client;
mod tickets_client;

pub use dto::*;
pub use http_tickets_client::*;
pub use tickets_client::*;
