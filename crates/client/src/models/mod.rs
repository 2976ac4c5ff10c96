//! Data models for provisioning backend requests and responses.
//!
//! Submodules:
//! - `cluster`: Candidate storage clusters and the cluster-info lookup.
//! - `search`: Search criteria and rows returned by the `check` route.
//! - `tenant`: Tenant info, resource checks, deactivation and quota payloads.
//! - `outcome`: The tagged union handed to result rendering.

pub mod cluster;
pub mod outcome;
pub mod search;
pub mod tenant;

pub use cluster::{Cluster, ClusterInfoRequest};
pub use outcome::{CLUSTER_SELECTION_MARKER, ProvisioningOutcome, SearchReply, SubmitReply};
pub use search::{CheckResult, SearchCriteria};
pub use tenant::{
    BucketQuota, BucketStatus, CommandBlock, CommandKind, DeactivationOutcome,
    DeactivationRequest, QuotaUpdateOutcome, QuotaUpdateRequest, ResourceMode, TenantInfo,
    TenantResources, TenantResourcesRequest, TenantSummary, UserStatus,
};
