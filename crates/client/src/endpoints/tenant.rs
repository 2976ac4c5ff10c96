//! Existing-tenant routes: info, resource check, deactivation, quotas.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::{read_json, route_url, send_request};
use crate::error::Result;
use crate::models::{
    DeactivationOutcome, DeactivationRequest, QuotaUpdateOutcome, QuotaUpdateRequest, TenantInfo,
    TenantResources, TenantResourcesRequest,
};

#[derive(Serialize)]
struct TenantInfoRequest<'a> {
    tenant: &'a str,
}

pub async fn tenant_info(client: &Client, base_url: &str, tenant: &str) -> Result<TenantInfo> {
    let url = route_url(base_url, "tenant-info");
    let builder = client.post(&url).json(&TenantInfoRequest { tenant });
    let response = send_request(builder, "tenant-info").await?;
    read_json(response, "tenant-info").await
}

/// Existence and status of the listed users and buckets, plus commands.
pub async fn check_tenant_resources(
    client: &Client,
    base_url: &str,
    request: &TenantResourcesRequest,
) -> Result<TenantResources> {
    let url = route_url(base_url, "check-tenant-resources");
    let builder = client.post(&url).json(request);
    let response = send_request(builder, "check-tenant-resources").await?;
    read_json(response, "check-tenant-resources").await
}

pub async fn deactivate_resources(
    client: &Client,
    base_url: &str,
    request: &DeactivationRequest,
) -> Result<DeactivationOutcome> {
    let url = route_url(base_url, "deactivate-resources");
    let builder = client.post(&url).json(request);
    let response = send_request(builder, "deactivate-resources").await?;
    read_json(response, "deactivate-resources").await
}

pub async fn update_bucket_quotas(
    client: &Client,
    base_url: &str,
    request: &QuotaUpdateRequest,
) -> Result<QuotaUpdateOutcome> {
    let url = route_url(base_url, "update-bucket-quotas");
    let builder = client.post(&url).json(request);
    let response = send_request(builder, "update-bucket-quotas").await?;
    read_json(response, "update-bucket-quotas").await
}
