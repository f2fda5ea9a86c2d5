mod airline_snapshot;
mod flight_info;
mod passenger;
mod ticket_filters;
mod ticket_generate;
mod ticket_update;

pub use airline_snapshot::*;
pub use flight_info::*;
pub use passenger::*;
pub use ticket_filters::*;
pub use ticket_generate::*;
pub use ticket_update::*;
