use std::time::Duration;

pub struct StagingStoreConfig {
    /// Staged tickets older than this are never resumed
    pub max_age: Duration,
    pub garbage_collector_interval: Duration,
}
