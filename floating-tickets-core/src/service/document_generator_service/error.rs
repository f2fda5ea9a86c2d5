use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DocumentGeneratorError {
    #[error("document generator request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("document generator responded with status {0}")]
    Status(StatusCode),
}
