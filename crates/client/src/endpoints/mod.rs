//! REST endpoint implementations.
//!
//! Every function takes the shared `reqwest::Client` and the normalized base
//! URL; routes live under `/<API_PREFIX>/`.

mod check;
mod request;
mod submit;
mod tenant;

use zayavki_config::constants::API_PREFIX;

pub use check::{check, cluster_info};
pub use request::{read_json, read_text, send_request};
pub use submit::{submit_form, submit_with_cluster};
pub use tenant::{check_tenant_resources, deactivate_resources, tenant_info, update_bucket_quotas};

/// Absolute URL of a backend route.
pub fn route_url(base_url: &str, route: &str) -> String {
    format!("{base_url}/{API_PREFIX}/{route}")
}
