//! Classified backend replies.
//!
//! Every reply is classified exactly once, here, into a tagged union.
//! Rendering matches on these enums exhaustively instead of sniffing strings.

use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::models::cluster::Cluster;
use crate::models::search::CheckResult;
use crate::models::tenant::{
    DeactivationOutcome, QuotaUpdateOutcome, TenantInfo, TenantResources,
};

/// Prefix of a reply that asks the caller to pick a cluster.
pub const CLUSTER_SELECTION_MARKER: &str = "CLUSTER_SELECTION_REQUIRED:";

/// Reply of the `submit` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReply {
    /// Final text produced by the backend.
    Final(String),
    /// More than zero candidate clusters; the caller must choose.
    ClusterSelectionRequired(Vec<Cluster>),
}

/// Reply of the `check` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReply {
    Results(Vec<CheckResult>),
    ClusterSelectionRequired(Vec<Cluster>),
    Text(String),
}

/// Parse the JSON array that follows the selection marker.
fn parse_cluster_list(payload: &str) -> Result<Vec<Cluster>> {
    serde_json::from_str(payload.trim()).map_err(|e| {
        ClientError::InvalidResponse(format!("malformed cluster selection list: {e}"))
    })
}

impl SubmitReply {
    /// Classify a raw `submit` response body.
    pub fn classify(body: String) -> Result<Self> {
        match body.strip_prefix(CLUSTER_SELECTION_MARKER) {
            Some(payload) => Ok(Self::ClusterSelectionRequired(parse_cluster_list(payload)?)),
            None => Ok(Self::Final(body)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CheckEnvelope {
    Results { results: Option<Vec<CheckResult>> },
    Clusters { clusters: Option<Vec<Cluster>> },
}

impl SearchReply {
    /// Classify a raw `check` response body.
    ///
    /// JSON objects must carry `results` or `clusters`; anything that is not
    /// a JSON object is plain text.
    pub fn classify(body: String) -> Result<Self> {
        if let Some(payload) = body.strip_prefix(CLUSTER_SELECTION_MARKER) {
            return Ok(Self::ClusterSelectionRequired(parse_cluster_list(payload)?));
        }
        if !body.trim_start().starts_with('{') {
            return Ok(Self::Text(body));
        }
        match serde_json::from_str::<CheckEnvelope>(&body) {
            Ok(CheckEnvelope::Results { results }) => {
                Ok(Self::Results(results.unwrap_or_default()))
            }
            Ok(CheckEnvelope::Clusters { clusters }) => {
                Ok(Self::ClusterSelectionRequired(clusters.unwrap_or_default()))
            }
            Err(e) => Err(ClientError::InvalidResponse(format!(
                "unexpected search response: {e}"
            ))),
        }
    }
}

/// Everything a finished operation can show in the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    /// Verbatim text, whitespace preserved.
    Text(String),
    /// Search rows; an empty list renders as "No results found".
    Search(Vec<CheckResult>),
    /// Detail of one cluster from `cluster-info`.
    ClusterDetails(Cluster),
    /// Resource check of an existing tenant.
    TenantResources(TenantResources),
    /// Tenant info followed by its resource check.
    TenantCheck {
        info: TenantInfo,
        resources: TenantResources,
    },
    /// Tenant info followed by the text of a submission.
    TenantSubmission { info: TenantInfo, text: String },
    Deactivation(DeactivationOutcome),
    QuotaUpdate(QuotaUpdateOutcome),
}
