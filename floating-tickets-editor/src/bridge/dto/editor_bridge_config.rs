use std::time::Duration;

pub struct EditorBridgeConfig {
    /// Time the failure notification stays visible before redirect
    pub redirect_delay: Duration,
    /// Ticket builder entry point, same for success and failure
    pub builder_path: String,
}

impl Default for EditorBridgeConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_secs(2),
            builder_path: "/floating-ticket/builder".to_string(),
        }
    }
}
