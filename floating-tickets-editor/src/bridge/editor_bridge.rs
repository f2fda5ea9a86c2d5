use super::{BridgeState, EditorBridgeConfig, Navigator, Notification, Notifier};
use crate::{
    client::TicketsClient,
    error::Error,
    staging::{StagedTicket, StagingStore},
};
use std::sync::Arc;
use tokio::sync::watch;

///
/// Opens an existing ticket in the ticket builder.
///
/// Loaded ticket is staged under its id and the agent is sent to the builder
/// right away. When loading fails the agent is notified, nothing is staged
/// and the redirect to the same builder entry point happens after
/// `redirect_delay`. Failed loads are never retried.
///
pub struct EditorBridge {
    config: EditorBridgeConfig,
    client: Arc<dyn TicketsClient>,
    staging_store: Arc<StagingStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<BridgeState>,
}

impl EditorBridge {
    pub fn new(
        config: EditorBridgeConfig,
        client: Arc<dyn TicketsClient>,
        staging_store: Arc<StagingStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(BridgeState::Idle);

        Self {
            config,
            client,
            staging_store,
            notifier,
            navigator,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BridgeState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> BridgeState {
        *self.state.borrow()
    }

    ///
    /// ### Returns
    /// ticket staged for the builder
    ///
    /// ### Errors
    /// - any [Error] of [TicketsClient::find_ticket], returned after the redirect
    ///
    #[tracing::instrument(name = "Open ticket in builder", skip(self))]
    pub async fn open(&self, id: &str) -> Result<StagedTicket, Error> {
        self.set_state(BridgeState::Fetching);

        match self.client.find_ticket(id).await {
            Ok(ticket) => {
                let staged_ticket = self.staging_store.stage(ticket).await;
                self.set_state(BridgeState::Staged);
                self.redirect();

                Ok(staged_ticket)
            }
            Err(err) => {
                tracing::warn!(%err, "ticket not loaded");
                self.notifier.notify(Notification::from(&err));
                self.set_state(BridgeState::Failed);

                tokio::time::sleep(self.config.redirect_delay).await;
                self.redirect();

                Err(err)
            }
        }
    }

    fn redirect(&self) {
        self.navigator.navigate(&self.config.builder_path);
        self.set_state(BridgeState::Redirected);
    }

    fn set_state(&self, state: BridgeState) {
        tracing::debug!(?state, "bridge state changed");
        self.state.send_replace(state);
    }
}
