//! `submit` and `cluster` routes.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::{read_text, route_url, send_request};
use crate::error::Result;
use crate::form::{FormData, SubmitFlags};
use crate::models::{Cluster, SubmitReply};

/// Post the active tab's fields as multipart.
pub async fn submit_form(
    client: &Client,
    base_url: &str,
    form: &FormData,
    flags: SubmitFlags,
) -> Result<SubmitReply> {
    let url = route_url(base_url, "submit");
    let builder = client.post(&url).multipart(form.to_multipart(flags));
    let response = send_request(builder, "submit").await?;
    SubmitReply::classify(read_text(response).await?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterSubmission<'a> {
    processed_vars: BTreeMap<String, Vec<String>>,
    selected_cluster: &'a Cluster,
    push_to_db: bool,
}

/// Re-post collected fields once a cluster is known.
pub async fn submit_with_cluster(
    client: &Client,
    base_url: &str,
    form: &FormData,
    flags: SubmitFlags,
    cluster: &Cluster,
) -> Result<String> {
    let url = route_url(base_url, "cluster");
    let body = ClusterSubmission {
        processed_vars: form.processed_vars(flags),
        selected_cluster: cluster,
        push_to_db: flags.push_to_db,
    };
    let builder = client.post(&url).json(&body);
    let response = send_request(builder, "cluster").await?;
    read_text(response).await
}
