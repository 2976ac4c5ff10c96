//! Search criteria and result rows for the `check` route.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{string_from_nullable, string_from_string_or_number};

/// Filter criteria posted to `check`.
///
/// `cluster` is only set on the second request, after disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    pub segment: String,
    pub env: String,
    pub ris_number: String,
    pub ris_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// One row of the provisioning register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckResult {
    pub cluster: String,
    pub segment: String,
    pub environment: String,
    pub realm: String,
    pub tenant: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub user: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub bucket: String,
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub quota: String,
    pub sd_num: String,
    pub srt_num: String,
    pub done_date: String,
    pub ris_code: String,
    pub ris_id: String,
    pub owner_group: String,
    pub owner: String,
    pub applicant: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub email: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub cspp_comment: String,
    pub active: bool,
}
