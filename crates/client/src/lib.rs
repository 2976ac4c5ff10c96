//! Client for the zayavki provisioning backend.
//!
//! This crate provides typed access to the `/zayavki/` routes used to
//! provision tenants, users and buckets across storage clusters, and the
//! submission workflow that resolves cluster disambiguation.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod models;
mod serde_helpers;
pub mod workflow;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::{ProvisioningClient, ProvisioningClientBuilder};
pub use error::{ClientError, Result};
pub use form::{FormData, SubmitFlags, VALID_ENV_CODES, env_code_for};
pub use models::{
    BucketQuota, BucketStatus, CheckResult, Cluster, ClusterInfoRequest, CommandBlock,
    CommandKind, DeactivationOutcome, DeactivationRequest, ProvisioningOutcome,
    QuotaUpdateOutcome, QuotaUpdateRequest, ResourceMode, SearchCriteria, SearchReply,
    SubmitReply, TenantInfo, TenantResources, TenantResourcesRequest, TenantSummary, UserStatus,
};
pub use workflow::{
    ChannelClusterChooser, ClusterChoiceRequest, ClusterChooser, Submission, WorkflowOutcome,
    WorkflowPhase,
};
