//! Tenant-level payloads: tenant info, resource checks, deactivation and quota updates.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{string_from_nullable, string_from_string_or_number};

/// Register entry describing an existing tenant, returned by `tenant-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TenantInfo {
    pub tenant: String,
    pub cls_name: String,
    pub net_seg: String,
    pub env: String,
    pub realm: String,
    pub ris_code: String,
    pub ris_id: String,
    pub owner_group: String,
    pub owner_person: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub srt_num: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub tls_endpoint: String,
    #[serde(deserialize_with = "string_from_nullable")]
    pub mtls_endpoint: String,
}

/// What a `check-tenant-resources` call prepares commands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    Create,
    Delete,
    Quota,
}

/// Body of `check-tenant-resources`.
///
/// `buckets` holds raw textarea lines; the backend strips an optional `| size` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantResourcesRequest {
    pub tenant: String,
    pub users: Vec<String>,
    pub buckets: Vec<String>,
    pub mode: ResourceMode,
}

/// Tenant header of a resource check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TenantSummary {
    pub name: String,
    pub cluster: String,
    pub env: String,
    pub segment: String,
    pub realm: String,
    pub ris_code: String,
    pub ris_id: String,
    pub owner_group: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserStatus {
    pub name: String,
    pub exists: bool,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BucketStatus {
    pub name: String,
    pub exists: bool,
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub size: String,
    pub status: String,
}

/// Which command block a resource check carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Creation,
    Deletion,
    Generic,
}

impl CommandKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Creation => "Команды для создания",
            Self::Deletion => "Команды для удаления",
            Self::Generic => "Команды",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    pub kind: CommandKind,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct RawTenantResources {
    #[serde(default)]
    tenant: TenantSummary,
    #[serde(default, deserialize_with = "vec_from_nullable")]
    users: Vec<UserStatus>,
    #[serde(default, deserialize_with = "vec_from_nullable")]
    buckets: Vec<BucketStatus>,
    #[serde(default)]
    creation_commands: Option<String>,
    #[serde(default)]
    deletion_commands: Option<String>,
    #[serde(default)]
    commands: Option<String>,
}

/// Response of `check-tenant-resources`.
///
/// At most one command block is present; creation wins over deletion,
/// deletion over the generic block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTenantResources")]
pub struct TenantResources {
    pub tenant: TenantSummary,
    pub users: Vec<UserStatus>,
    pub buckets: Vec<BucketStatus>,
    pub commands: Option<CommandBlock>,
}

impl From<RawTenantResources> for TenantResources {
    fn from(raw: RawTenantResources) -> Self {
        let pick = |text: Option<String>, kind| {
            text.filter(|t| !t.is_empty())
                .map(|text| CommandBlock { kind, text })
        };
        let commands = pick(raw.creation_commands, CommandKind::Creation)
            .or_else(|| pick(raw.deletion_commands, CommandKind::Deletion))
            .or_else(|| pick(raw.commands, CommandKind::Generic));
        Self {
            tenant: raw.tenant,
            users: raw.users,
            buckets: raw.buckets,
            commands,
        }
    }
}

fn vec_from_nullable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `deactivate-resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeactivationRequest {
    pub tenant: String,
    pub users: Vec<String>,
    pub buckets: Vec<String>,
}

/// Response of `deactivate-resources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeactivationOutcome {
    #[serde(default, deserialize_with = "vec_from_nullable")]
    pub deactivated_users: Vec<String>,
    #[serde(default, deserialize_with = "vec_from_nullable")]
    pub deactivated_buckets: Vec<String>,
    #[serde(default, deserialize_with = "vec_from_nullable")]
    pub errors: Vec<String>,
}

impl DeactivationOutcome {
    /// Nothing deactivated and nothing failed.
    pub fn is_noop(&self) -> bool {
        self.deactivated_users.is_empty()
            && self.deactivated_buckets.is_empty()
            && self.errors.is_empty()
    }
}

/// A bucket with its quota in gigabytes, as typed in `name | size` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketQuota {
    pub name: String,
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub size: String,
}

/// Body of `update-bucket-quotas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaUpdateRequest {
    pub tenant: String,
    pub buckets: Vec<BucketQuota>,
}

/// Response of `update-bucket-quotas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuotaUpdateOutcome {
    #[serde(default, deserialize_with = "vec_from_nullable")]
    pub updated_buckets: Vec<BucketQuota>,
    #[serde(default, deserialize_with = "vec_from_nullable")]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        let req = TenantResourcesRequest {
            tenant: "if_cosd_t1".into(),
            users: vec![],
            buckets: vec!["if-cosd-b1 | 10".into()],
            mode: ResourceMode::Quota,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["mode"], "quota");
        assert_eq!(value["buckets"][0], "if-cosd-b1 | 10");
    }

    #[test]
    fn test_creation_commands_take_priority() {
        let json = r#"{
            "tenant": {"name": "if_cosd_t1", "cluster": "cls-01"},
            "users": [{"name": "if_cosd_u1", "exists": false, "status": "Не найден"}],
            "buckets": null,
            "creation_commands": "radosgw-admin user create",
            "commands": "ignored"
        }"#;
        let resources: TenantResources = serde_json::from_str(json).unwrap();
        assert_eq!(resources.tenant.cluster, "cls-01");
        assert_eq!(resources.users.len(), 1);
        assert!(resources.buckets.is_empty());
        let block = resources.commands.unwrap();
        assert_eq!(block.kind, CommandKind::Creation);
        assert_eq!(block.kind.title(), "Команды для создания");
    }

    #[test]
    fn test_empty_command_text_is_ignored() {
        let resources: TenantResources =
            serde_json::from_str(r#"{"deletion_commands": "", "commands": "x"}"#).unwrap();
        assert_eq!(resources.commands.unwrap().kind, CommandKind::Generic);
    }

    #[test]
    fn test_deactivation_noop() {
        let outcome: DeactivationOutcome = serde_json::from_str(
            r#"{"deactivated_users": null, "deactivated_buckets": [], "errors": null}"#,
        )
        .unwrap();
        assert!(outcome.is_noop());
    }

    #[test]
    fn test_quota_outcome_accepts_numeric_size() {
        let outcome: QuotaUpdateOutcome =
            serde_json::from_str(r#"{"updated_buckets": [{"name": "b", "size": 200}]}"#).unwrap();
        assert_eq!(outcome.updated_buckets[0].size, "200");
        assert!(outcome.errors.is_empty());
    }
}
