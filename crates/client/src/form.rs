//! Collected field values and their wire encodings.
//!
//! Responsibilities:
//! - Holding the id -> value pairs gathered from the active tab ([`FormData`])
//! - Encoding them as the `submit` multipart body
//! - Encoding them as `processedVars` for the `cluster` resubmission
//! - Splitting textarea values into users, bucket lines and quotas
//!
//! Does NOT handle:
//! - Validation (owned by the UI's validators)
//! - Sending requests (see [`crate::endpoints`])
//!
//! # Invariants
//! - Keys are field ids; iteration order is sorted so encodings are stable
//! - Every `processedVars` value is a single-element list

use std::collections::BTreeMap;

use reqwest::multipart::Form;

use crate::models::{BucketQuota, TenantInfo};

/// Environment codes accepted in tenant, user and bucket names.
pub const VALID_ENV_CODES: [&str; 5] = ["p0", "rr", "if", "hf", "lt"];

/// Map a human environment name to its naming-convention code.
pub fn env_code_for(env: &str) -> Option<&'static str> {
    match env.trim().to_ascii_uppercase().as_str() {
        "PROD" => Some("p0"),
        "PREPROD" => Some("rr"),
        "IFT" => Some("if"),
        "HOTFIX" => Some("hf"),
        "LT" => Some("lt"),
        _ => None,
    }
}

/// Flags sent alongside a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitFlags {
    /// Commit instead of dry run.
    pub push_to_db: bool,
    /// Set only by the new-tenant tab.
    pub create_tenant: bool,
}

impl SubmitFlags {
    pub fn check() -> Self {
        Self::default()
    }

    pub fn commit() -> Self {
        Self {
            push_to_db: true,
            create_tenant: false,
        }
    }

    pub fn creating_tenant(mut self) -> Self {
        self.create_tenant = true;
        self
    }
}

/// Field values gathered from one tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Trimmed value, or an empty string when the field is absent.
    pub fn trimmed(&self, id: &str) -> &str {
        self.get(id).map(str::trim).unwrap_or_default()
    }

    pub fn is_blank(&self, id: &str) -> bool {
        self.trimmed(id).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Multipart body for the `submit` route.
    pub fn to_multipart(&self, flags: SubmitFlags) -> Form {
        let mut form = Form::new();
        for (id, value) in &self.values {
            form = form.text(id.clone(), value.clone());
        }
        form = form.text("push_to_db", flags.push_to_db.to_string());
        if flags.create_tenant {
            form = form.text("create_tenant", "true");
        }
        form
    }

    /// `processedVars` for the `cluster` resubmission.
    ///
    /// `env_code` is derived from `env` when the form does not carry one.
    pub fn processed_vars(&self, flags: SubmitFlags) -> BTreeMap<String, Vec<String>> {
        let mut vars: BTreeMap<String, Vec<String>> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), vec![v.clone()]))
            .collect();

        if !vars.contains_key("env_code")
            && let Some(code) = self.get("env").and_then(env_code_for)
        {
            vars.insert("env_code".to_string(), vec![code.to_string()]);
        }
        if flags.create_tenant {
            vars.insert("create_tenant".to_string(), vec!["true".to_string()]);
        }
        vars
    }

    /// Overwrite identity fields with what `tenant-info` reported.
    pub fn merge_tenant_info(&mut self, info: &TenantInfo) {
        self.insert("segment", info.net_seg.clone());
        self.insert("env", info.env.clone());
        self.insert("ris_number", info.ris_id.clone());
        self.insert("ris_name", info.ris_code.clone());
        self.insert("cluster", info.cls_name.clone());
        self.insert("tenant", info.tenant.clone());
    }

    /// Non-blank trimmed lines of a textarea field.
    pub fn lines(&self, id: &str) -> Vec<String> {
        non_blank_lines(self.get(id).unwrap_or_default())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (k, v) in iter {
            data.insert(k, v);
        }
        data
    }
}

/// Split text into trimmed lines, dropping blank ones.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Bucket names from `name` or `name | size` lines.
pub fn bucket_names(text: &str) -> Vec<String> {
    non_blank_lines(text)
        .into_iter()
        .filter_map(|line| {
            let name = line.split('|').next().unwrap_or_default().trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

/// Parse `name | size` lines; malformed lines are skipped.
pub fn bucket_quotas(text: &str) -> Vec<BucketQuota> {
    non_blank_lines(text)
        .into_iter()
        .filter_map(|line| {
            let (name, size) = line.split_once('|')?;
            let (name, size) = (name.trim(), size.trim());
            (!name.is_empty() && !size.is_empty()).then(|| BucketQuota {
                name: name.to_string(),
                size: size.to_string(),
            })
        })
        .collect()
}
