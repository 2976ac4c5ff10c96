//! Provisioning backend client.
//!
//! [`ProvisioningClient`] owns the HTTP connection pool and the normalized
//! base URL and exposes one async method per backend route.
//!
//! # Submodules
//! - [`builder`]: Client construction from flags or [`zayavki_config::Config`]
//!
//! # What this module does NOT handle:
//! - HTTP request details (delegated to [`crate::endpoints`])
//! - Cluster disambiguation (see [`crate::workflow`])
//!
//! # Invariants
//! - `base_url` never ends with a slash
//! - No method retries; every failure is returned to the caller once

pub mod builder;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::form::{FormData, SubmitFlags};
use crate::models::{
    Cluster, ClusterInfoRequest, DeactivationOutcome, DeactivationRequest, QuotaUpdateOutcome,
    QuotaUpdateRequest, SearchCriteria, SearchReply, SubmitReply, TenantInfo, TenantResources,
    TenantResourcesRequest,
};

pub use builder::ProvisioningClientBuilder;

/// Client for the `/zayavki/` routes.
#[derive(Debug, Clone)]
pub struct ProvisioningClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl ProvisioningClient {
    /// Create a new client builder.
    pub fn builder() -> ProvisioningClientBuilder {
        ProvisioningClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Multipart submission of a tab's fields.
    pub async fn submit(&self, form: &FormData, flags: SubmitFlags) -> Result<SubmitReply> {
        endpoints::submit_form(&self.http, &self.base_url, form, flags).await
    }

    /// Resubmission once the target cluster is known.
    pub async fn submit_with_cluster(
        &self,
        form: &FormData,
        flags: SubmitFlags,
        cluster: &Cluster,
    ) -> Result<String> {
        endpoints::submit_with_cluster(&self.http, &self.base_url, form, flags, cluster).await
    }

    pub async fn check(&self, criteria: &SearchCriteria) -> Result<SearchReply> {
        endpoints::check(&self.http, &self.base_url, criteria).await
    }

    pub async fn cluster_info(&self, request: &ClusterInfoRequest) -> Result<Cluster> {
        endpoints::cluster_info(&self.http, &self.base_url, request).await
    }

    pub async fn tenant_info(&self, tenant: &str) -> Result<TenantInfo> {
        require_tenant(tenant)?;
        endpoints::tenant_info(&self.http, &self.base_url, tenant).await
    }

    pub async fn check_tenant_resources(
        &self,
        request: &TenantResourcesRequest,
    ) -> Result<TenantResources> {
        require_tenant(&request.tenant)?;
        endpoints::check_tenant_resources(&self.http, &self.base_url, request).await
    }

    pub async fn deactivate_resources(
        &self,
        request: &DeactivationRequest,
    ) -> Result<DeactivationOutcome> {
        require_tenant(&request.tenant)?;
        if request.users.is_empty() && request.buckets.is_empty() {
            return Err(ClientError::MissingField(
                "Необходимо указать пользователей или бакеты для деактивации".to_string(),
            ));
        }
        endpoints::deactivate_resources(&self.http, &self.base_url, request).await
    }

    pub async fn update_bucket_quotas(
        &self,
        request: &QuotaUpdateRequest,
    ) -> Result<QuotaUpdateOutcome> {
        require_tenant(&request.tenant)?;
        endpoints::update_bucket_quotas(&self.http, &self.base_url, request).await
    }
}

fn require_tenant(tenant: &str) -> Result<()> {
    if tenant.trim().is_empty() {
        return Err(ClientError::MissingField(
            "Необходимо указать имя тенанта".to_string(),
        ));
    }
    Ok(())
}
