//! `check` and `cluster-info` routes.

use reqwest::Client;

use crate::endpoints::{read_json, read_text, route_url, send_request};
use crate::error::Result;
use crate::models::{Cluster, ClusterInfoRequest, SearchCriteria, SearchReply};

/// Search tenants, users and buckets.
pub async fn check(
    client: &Client,
    base_url: &str,
    criteria: &SearchCriteria,
) -> Result<SearchReply> {
    let url = route_url(base_url, "check");
    let builder = client.post(&url).json(criteria);
    let response = send_request(builder, "check").await?;
    SearchReply::classify(read_text(response).await?)
}

/// Full record of one cluster.
pub async fn cluster_info(
    client: &Client,
    base_url: &str,
    request: &ClusterInfoRequest,
) -> Result<Cluster> {
    let url = route_url(base_url, "cluster-info");
    let builder = client.post(&url).json(request);
    let response = send_request(builder, "cluster-info").await?;
    read_json(response, "cluster-info").await
}
