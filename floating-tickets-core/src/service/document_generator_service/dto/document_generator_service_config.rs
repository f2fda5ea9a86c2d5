use std::time::Duration;

pub struct DocumentGeneratorServiceConfig {
    /// e.g. `http://ticket-pdf:8080`
    pub base_url: String,
    pub timeout: Duration,
}
