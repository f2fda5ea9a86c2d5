use super::DocumentGeneratorError;
use crate::repository::FloatingTicket;
use axum::async_trait;

///
/// Client of the external service rendering ticket PDFs.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentGeneratorService: Send + Sync {
    ///
    /// Renders document from the current ticket data.
    ///
    /// ### Returns
    /// path of the generated document
    ///
    async fn generate(&self, ticket: &FloatingTicket) -> Result<String, DocumentGeneratorError>;

    ///
    /// Removes previously generated document.
    ///
    async fn remove(&self, pdf_path: &str) -> Result<(), DocumentGeneratorError>;
}
