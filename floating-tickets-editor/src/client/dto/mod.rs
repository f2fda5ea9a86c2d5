mod floating_ticket;
mod ticket_filters;
mod ticket_generate;
mod ticket_update;
mod tickets_client_config;
mod tickets_page;

pub use floating_ticket::*;
pub use ticket_filters::*;
pub use ticket_generate::*;
pub use ticket_update::*;
pub use tickets_client_config::*;
pub use tickets_page::*;
