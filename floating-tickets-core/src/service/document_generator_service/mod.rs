mod document_generator_service;
mod dto;
mod error;
mod http_document_generator_service;

pub use document_generator_service::*;
pub use dto::*;
pub use error::*;
pub use http_document_generator_service::*;
