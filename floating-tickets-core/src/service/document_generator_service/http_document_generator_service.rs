use super::{
    DocumentGeneratorError, DocumentGeneratorService, DocumentGeneratorServiceConfig,
    GeneratedDocument,
};
use crate::{dto::output, repository::FloatingTicket};
use axum::async_trait;
use reqwest::{Client, Response};

pub struct HttpDocumentGeneratorService {
    documents_url: String,
    client: Client,
}

impl HttpDocumentGeneratorService {
    pub fn new(config: DocumentGeneratorServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let documents_url = format!("{}/documents", config.base_url.trim_end_matches('/'));

        Ok(Self {
            documents_url,
            client,
        })
    }

    fn ensure_success(response: Response) -> Result<Response, DocumentGeneratorError> {
        let status = response.status();
        match status.is_success() {
            true => Ok(response),
            false => Err(DocumentGeneratorError::Status(status)),
        }
    }
}

#[async_trait]
impl DocumentGeneratorService for HttpDocumentGeneratorService {
    #[tracing::instrument(name = "Generate document", skip_all, fields(id = %ticket.id))]
    async fn generate(&self, ticket: &FloatingTicket) -> Result<String, DocumentGeneratorError> {
        let body = output::FloatingTicket::from(ticket.clone());

        tracing::debug!("requesting document");
        let response = self
            .client
            .post(&self.documents_url)
            .json(&body)
            .send()
            .await?;
        let GeneratedDocument { path } = Self::ensure_success(response)?.json().await?;
        tracing::debug!(path, "document generated");

        Ok(path)
    }

    #[tracing::instrument(name = "Remove document", skip(self))]
    async fn remove(&self, pdf_path: &str) -> Result<(), DocumentGeneratorError> {
        let response = self
            .client
            .delete(&self.documents_url)
            .query(&[("path", pdf_path)])
            .send()
            .await?;
        Self::ensure_success(response)?;
        tracing::debug!("document removed");

        Ok(())
    }
}
