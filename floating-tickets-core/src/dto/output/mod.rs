mod floating_ticket;
mod tickets_page;

pub use floating_ticket::*;
pub use tickets_page::*;
