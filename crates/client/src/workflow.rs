//! Submission state machine with cluster disambiguation.
//!
//! A submission moves through [`WorkflowPhase`]s:
//! `Collecting -> Submitting -> [AwaitingClusterChoice] -> [Resubmitting] -> Done`.
//!
//! When the backend asks for a cluster, an empty candidate list is a
//! terminal [`ClientError::NoMatchingCluster`], a single candidate is chosen
//! without asking, and several candidates suspend the workflow on a
//! [`ClusterChooser`] until the user picks one or cancels.
//!
//! # Invariants
//! - The chooser is consulted at most once per submission
//! - Cancelling the choice sends nothing further and surfaces no error
//! - Every path, including errors, ends in `Done`

use std::future::Future;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::client::ProvisioningClient;
use crate::error::{ClientError, Result};
use crate::form::{FormData, SubmitFlags};
use crate::models::{Cluster, ProvisioningOutcome, SearchCriteria, SearchReply, SubmitReply};

/// Asks the user to pick one of several clusters.
pub trait ClusterChooser {
    /// Resolve with the chosen cluster, or `None` when the user cancels.
    fn choose(&self, clusters: Vec<Cluster>) -> impl Future<Output = Option<Cluster>> + Send;
}

/// A pending choice delivered to the UI loop.
#[derive(Debug)]
pub struct ClusterChoiceRequest {
    pub clusters: Vec<Cluster>,
    pub respond_to: oneshot::Sender<Option<Cluster>>,
}

/// Chooser that forwards the candidates to the UI over a channel.
///
/// A dropped responder or a closed channel counts as a cancellation.
#[derive(Debug, Clone)]
pub struct ChannelClusterChooser {
    tx: mpsc::Sender<ClusterChoiceRequest>,
}

impl ChannelClusterChooser {
    pub fn new(tx: mpsc::Sender<ClusterChoiceRequest>) -> Self {
        Self { tx }
    }
}

impl ClusterChooser for ChannelClusterChooser {
    fn choose(&self, clusters: Vec<Cluster>) -> impl Future<Output = Option<Cluster>> + Send {
        let tx = self.tx.clone();
        async move {
            let (respond_to, response) = oneshot::channel();
            let request = ClusterChoiceRequest {
                clusters,
                respond_to,
            };
            if tx.send(request).await.is_err() {
                debug!("cluster choice channel closed");
                return None;
            }
            response.await.ok().flatten()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    Collecting,
    Submitting,
    AwaitingClusterChoice,
    Resubmitting,
    Done,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Completed {
        outcome: ProvisioningOutcome,
        /// The cluster the backend was told to use, if one was needed.
        selected_cluster: Option<Cluster>,
    },
    /// The user closed the cluster picker.
    Abandoned,
}

/// One submission attempt.
pub struct Submission<'a, C> {
    client: &'a ProvisioningClient,
    chooser: &'a C,
    phase: WorkflowPhase,
    history: Vec<WorkflowPhase>,
}

impl<'a, C: ClusterChooser + Sync> Submission<'a, C> {
    pub fn new(client: &'a ProvisioningClient, chooser: &'a C) -> Self {
        Self {
            client,
            chooser,
            phase: WorkflowPhase::Collecting,
            history: vec![WorkflowPhase::Collecting],
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// Every phase entered so far, in order.
    pub fn history(&self) -> &[WorkflowPhase] {
        &self.history
    }

    fn enter(&mut self, phase: WorkflowPhase) {
        debug!(from = ?self.phase, to = ?phase, "workflow transition");
        self.phase = phase;
        self.history.push(phase);
    }

    /// Post the form and resolve a cluster request if the backend sends one.
    pub async fn submit(&mut self, form: &FormData, flags: SubmitFlags) -> Result<WorkflowOutcome> {
        let result = self.run_submit(form, flags).await;
        self.enter(WorkflowPhase::Done);
        result
    }

    async fn run_submit(&mut self, form: &FormData, flags: SubmitFlags) -> Result<WorkflowOutcome> {
        self.enter(WorkflowPhase::Submitting);
        let clusters = match self.client.submit(form, flags).await? {
            SubmitReply::Final(text) => {
                return Ok(WorkflowOutcome::Completed {
                    outcome: ProvisioningOutcome::Text(text),
                    selected_cluster: None,
                });
            }
            SubmitReply::ClusterSelectionRequired(clusters) => clusters,
        };

        let Some(cluster) = self.resolve_cluster(clusters).await? else {
            return Ok(WorkflowOutcome::Abandoned);
        };

        self.enter(WorkflowPhase::Resubmitting);
        let text = self.client.submit_with_cluster(form, flags, &cluster).await?;
        Ok(WorkflowOutcome::Completed {
            outcome: ProvisioningOutcome::Text(text),
            selected_cluster: Some(cluster),
        })
    }

    /// Run a search; a cluster request is answered by repeating the search
    /// with the chosen cluster name.
    pub async fn search(&mut self, criteria: &SearchCriteria) -> Result<WorkflowOutcome> {
        let result = self.run_search(criteria).await;
        self.enter(WorkflowPhase::Done);
        result
    }

    async fn run_search(&mut self, criteria: &SearchCriteria) -> Result<WorkflowOutcome> {
        self.enter(WorkflowPhase::Submitting);
        let clusters = match self.client.check(criteria).await? {
            SearchReply::ClusterSelectionRequired(clusters) => clusters,
            other => {
                return Ok(WorkflowOutcome::Completed {
                    outcome: search_outcome(other)?,
                    selected_cluster: None,
                });
            }
        };

        let Some(cluster) = self.resolve_cluster(clusters).await? else {
            return Ok(WorkflowOutcome::Abandoned);
        };

        self.enter(WorkflowPhase::Resubmitting);
        let narrowed = SearchCriteria {
            cluster: Some(cluster.name.clone()),
            ..criteria.clone()
        };
        let reply = self.client.check(&narrowed).await?;
        Ok(WorkflowOutcome::Completed {
            outcome: search_outcome(reply)?,
            selected_cluster: Some(cluster),
        })
    }

    async fn resolve_cluster(&mut self, mut clusters: Vec<Cluster>) -> Result<Option<Cluster>> {
        match clusters.len() {
            0 => Err(ClientError::NoMatchingCluster(
                "no matching clusters found".to_string(),
            )),
            1 => {
                let cluster = clusters.remove(0);
                info!(cluster = %cluster.name, "single cluster candidate selected");
                Ok(Some(cluster))
            }
            n => {
                self.enter(WorkflowPhase::AwaitingClusterChoice);
                debug!(candidates = n, "waiting for cluster choice");
                let choice = self.chooser.choose(clusters).await;
                if choice.is_none() {
                    info!("cluster choice cancelled");
                }
                Ok(choice)
            }
        }
    }
}

fn search_outcome(reply: SearchReply) -> Result<ProvisioningOutcome> {
    match reply {
        SearchReply::Results(rows) => Ok(ProvisioningOutcome::Search(rows)),
        SearchReply::Text(text) => Ok(ProvisioningOutcome::Text(text)),
        SearchReply::ClusterSelectionRequired(_) => Err(ClientError::InvalidResponse(
            "cluster selection requested again after a cluster was chosen".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(name: &str) -> Cluster {
        Cluster {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_channel_chooser_forwards_choice() {
        let (tx, mut rx) = mpsc::channel(1);
        let chooser = ChannelClusterChooser::new(tx);

        let ui = tokio::spawn(async move {
            let request = rx.recv().await.unwrap();
            assert_eq!(request.clusters.len(), 2);
            let picked = request.clusters[1].clone();
            request.respond_to.send(Some(picked)).unwrap();
        });

        let choice = chooser.choose(vec![cluster("a"), cluster("b")]).await;
        ui.await.unwrap();
        assert_eq!(choice.map(|c| c.name), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_channel_chooser_dropped_responder_is_cancel() {
        let (tx, mut rx) = mpsc::channel(1);
        let chooser = ChannelClusterChooser::new(tx);

        let ui = tokio::spawn(async move {
            drop(rx.recv().await.unwrap());
        });

        assert!(chooser.choose(vec![cluster("a"), cluster("b")]).await.is_none());
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn test_channel_chooser_closed_channel_is_cancel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let chooser = ChannelClusterChooser::new(tx);
        assert!(chooser.choose(vec![cluster("a")]).await.is_none());
    }

    #[test]
    fn test_second_cluster_request_is_invalid() {
        let err = search_outcome(SearchReply::ClusterSelectionRequired(vec![])).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
