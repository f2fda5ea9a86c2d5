mod document_generator_service_config;
mod generated_document;

pub use document_generator_service_config::*;
pub use generated_document::*;
