mod dto;
mod tickets_service;
mod tickets_service_impl;
mod tickets_validation;

pub use dto::*;
pub use tickets_service::*;
pub use tickets_service_impl::*;
