mod dto;
mod staging_store;
mod staging_store_garbage_collector;

pub use dto::*;
pub use staging_store::*;
pub use staging_store_garbage_collector::*;
