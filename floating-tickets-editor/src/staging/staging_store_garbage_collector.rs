use super::StagedTicket;
use std::{collections::HashMap, sync::Arc, time::Duration};
use time::OffsetDateTime;
use tokio::{
    sync::{Mutex, Notify},
    time::{interval, Interval, MissedTickBehavior},
};

pub struct StagingStoreGarbageCollector {
    staged: Arc<Mutex<HashMap<String, StagedTicket>>>,

    interval: Interval,
    max_age: Duration,
}

impl StagingStoreGarbageCollector {
    pub(super) fn new(
        staged: Arc<Mutex<HashMap<String, StagedTicket>>>,
        garbage_collector_interval: Duration,
        max_age: Duration,
    ) -> Self {
        let mut interval = interval(garbage_collector_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            staged,
            interval,
            max_age,
        }
    }

    #[tracing::instrument(name = "Staging Garbage Collector", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            _ = close_notify.notified() => {},

            _ = async { loop {
                self.interval.tick().await;
                let now = OffsetDateTime::now_utc();

                tracing::debug!("garbage collection started");

                let removed_entries = {
                    let mut staged = self.staged.lock().await;
                    let len_before = staged.len();

                    staged.retain(|_, staged_ticket| now - staged_ticket.timestamp <= self.max_age);

                    if staged.len() < staged.capacity() / 4 {
                        let new_capacity = staged.capacity() / 2;
                        staged.shrink_to(new_capacity);
                    }

                    len_before - staged.len()
                };

                tracing::debug!(removed_entries, "garbage collection finished");
            }} => {}
        }
    }
}
