pub mod document_generator_service;
pub mod tickets_service;
