mod airline_snapshot;
mod flight_info;
mod floating_ticket;
mod passenger;
mod references;
mod ticket_query;

pub use airline_snapshot::*;
pub use flight_info::*;
pub use floating_ticket::*;
pub use passenger::*;
pub use references::*;
pub use ticket_query::*;
