//! Shared types for side effect handlers.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use zayavki_client::{ChannelClusterChooser, ProvisioningClient};

use crate::action::Action;

/// Shared client for spawned tasks.
///
/// Every client call takes `&self`, so tasks share it without a lock.
pub type SharedClient = Arc<ProvisioningClient>;

/// What a spawned handler needs to talk to the backend and back to the UI.
#[derive(Clone)]
pub struct SideEffectContext {
    pub client: SharedClient,
    /// Forwards cluster choices to the UI loop.
    pub chooser: ChannelClusterChooser,
    pub tx: Sender<Action>,
}

impl SideEffectContext {
    pub fn new(client: SharedClient, chooser: ChannelClusterChooser, tx: Sender<Action>) -> Self {
        Self {
            client,
            chooser,
            tx,
        }
    }

    /// Send an action back to the UI loop; a closed channel means shutdown.
    pub async fn send(&self, action: Action) {
        if self.tx.send(action).await.is_err() {
            tracing::debug!("action channel closed, dropping result");
        }
    }
}
