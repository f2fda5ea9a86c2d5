use reqwest::Url;
use std::time::Duration;

pub struct TicketsClientConfig {
    /// e.g. `https://agency.example/api`
    pub base_url: Url,
    pub timeout: Duration,
}
