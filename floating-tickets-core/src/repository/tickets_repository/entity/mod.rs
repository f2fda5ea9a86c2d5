mod ticket_content_update_entity;
mod ticket_find_entity;
mod ticket_insert_entity;

pub use ticket_content_update_entity::*;
pub use ticket_find_entity::*;
pub use ticket_insert_entity::*;
