//! JSON import for the new-tenant form.
//!
//! Two documents are accepted, each optional:
//! - a ticket record (`number`, `customFieldsValues[{code, value}]`) whose
//!   `resources` custom field carries a free-text block with `Бакеты:` and
//!   `Пользователи:` sections;
//! - a parameter document, either an object with camelCase keys or an array
//!   of `{label, value}` pairs.
//!
//! Every source key maps to a field id through a fixed table. The tables are
//! checked against the new-tenant registry when the schema is built, and a
//! required source that is absent from a document is an error rather than a
//! silently skipped field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::forms::registry::{FieldKind, RegistryError, TabId, tab_config};

static BUCKETS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Бакеты:\s*(.*?)\s*(?:Пользователи:|\z)").expect("valid buckets regex")
});

static USERS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Пользователи:\s*(.*?)\s*(?:Бакеты:|\z)").expect("valid users regex")
});

static BUCKET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s|]+)\s*(?:\|\s*|\s+)(\d+)\s*(?i:гб|gb|г|g)?$").expect("valid bucket regex")
});

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("отсутствует поле \"{0}\"")]
    MissingKey(&'static str),

    #[error("не найден параметр \"{0}\"")]
    MissingLabel(&'static str),

    #[error("неизвестная среда \"{0}\"")]
    UnknownEnvironment(String),

    #[error("ожидается JSON-объект заявки")]
    TicketNotObject,

    #[error("ожидается JSON-объект или массив параметров")]
    UnexpectedParamsShape,

    #[error(
        "не удалось разобрать список ресурсов: нет разделов \"Бакеты:\" или \"Пользователи:\""
    )]
    UnrecognizedResources,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Copy)]
struct Mapping {
    source: &'static str,
    target: &'static str,
    required: bool,
}

const fn map(source: &'static str, target: &'static str, required: bool) -> Mapping {
    Mapping {
        source,
        target,
        required,
    }
}

const TICKET_KEYS: &[Mapping] = &[map("number", "request_id_srt", true)];

const TICKET_CUSTOM_FIELDS: &[Mapping] = &[
    map("appealNumber", "request_id_sd", false),
    map("applicant", "requester", false),
];

/// Custom field holding the free-text resource list.
const RESOURCES_CODE: &str = "resources";

const PARAM_KEYS: &[Mapping] = &[
    map("segment", "segment", true),
    map("environment", "env", true),
    map("risNumber", "ris_number", true),
    map("risName", "ris_name", true),
    map("respGroup", "resp_group", false),
    map("owner", "owner", false),
    map("zamOwner", "zam_owner", false),
    map("emailForCredentials", "email_for_credentials", false),
];

const PARAM_LABELS: &[Mapping] = &[
    map("Зона безопасности", "segment", true),
    map("Среда", "env", true),
    map("РИС номер", "ris_number", true),
    map("РИС имя", "ris_name", true),
    map("Группа сопровождения", "resp_group", false),
    map("Владелец", "owner", false),
    map("Зам.владелец", "zam_owner", false),
    map("Email для отправки данных УЗ", "email_for_credentials", false),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketDocument {
    #[serde(default)]
    custom_fields_values: Vec<CustomFieldValue>,
    #[serde(flatten)]
    keys: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct CustomFieldValue {
    code: String,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParamsDocument {
    Keys(BTreeMap<String, Value>),
    Labels(Vec<LabeledValue>),
}

#[derive(Debug, Deserialize)]
struct LabeledValue {
    label: String,
    #[serde(default)]
    value: Value,
}

/// Field values extracted from the pasted documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedFields {
    values: BTreeMap<&'static str, String>,
}

impl ImportedFields {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, target: &'static str, value: String) {
        if !value.is_empty() {
            self.values.insert(target, value);
        }
    }
}

/// Mapping tables checked against the new-tenant form.
#[derive(Debug, Clone)]
pub struct ImportSchema {
    env_values: Vec<&'static str>,
}

impl ImportSchema {
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownField`] if a mapping targets a field
    /// the new-tenant tab does not have.
    pub fn new() -> Result<Self, RegistryError> {
        let config = tab_config(TabId::NewTenant);
        let targets = TICKET_KEYS
            .iter()
            .chain(TICKET_CUSTOM_FIELDS)
            .chain(PARAM_KEYS)
            .chain(PARAM_LABELS)
            .map(|m| m.target)
            .chain(["users", "buckets"]);
        for target in targets {
            config.require_field(target)?;
        }

        let env_values = match config.require_field("env")?.kind {
            FieldKind::Select(options) => options
                .iter()
                .map(|o| o.value)
                .filter(|v| !v.is_empty())
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self { env_values })
    }

    /// Extract form values from the two documents; blank documents are skipped.
    pub fn import(&self, ticket_json: &str, params_json: &str) -> Result<ImportedFields, ImportError> {
        let mut fields = ImportedFields::default();

        if !ticket_json.trim().is_empty() {
            let ticket: Value = serde_json::from_str(ticket_json)?;
            if !ticket.is_object() {
                return Err(ImportError::TicketNotObject);
            }
            self.apply_ticket(serde_json::from_value(ticket)?, &mut fields)?;
        }
        if !params_json.trim().is_empty() {
            let params: Value = serde_json::from_str(params_json)?;
            if !(params.is_object() || params.is_array()) {
                return Err(ImportError::UnexpectedParamsShape);
            }
            self.apply_params(serde_json::from_value(params)?, &mut fields)?;
        }

        debug!(fields = fields.len(), "json import parsed");
        Ok(fields)
    }

    fn apply_ticket(
        &self,
        ticket: TicketDocument,
        fields: &mut ImportedFields,
    ) -> Result<(), ImportError> {
        for mapping in TICKET_KEYS {
            match ticket.keys.get(mapping.source).and_then(scalar_text) {
                Some(value) => fields.set(mapping.target, value),
                None if mapping.required => return Err(ImportError::MissingKey(mapping.source)),
                None => {}
            }
        }

        let custom: BTreeMap<String, String> = ticket
            .custom_fields_values
            .into_iter()
            .filter_map(|entry| Some((entry.code, scalar_text(&entry.value)?)))
            .collect();

        for mapping in TICKET_CUSTOM_FIELDS {
            if let Some(value) = custom.get(mapping.source) {
                fields.set(mapping.target, value.clone());
            }
        }

        if let Some(text) = custom.get(RESOURCES_CODE) {
            let resources = parse_resources(text)?;
            fields.set("buckets", resources.buckets.join("\n"));
            fields.set("users", resources.users.join("\n"));
        }
        Ok(())
    }

    fn apply_params(
        &self,
        params: ParamsDocument,
        fields: &mut ImportedFields,
    ) -> Result<(), ImportError> {
        let mut found: BTreeMap<&'static str, String> = BTreeMap::new();
        let labelled = matches!(params, ParamsDocument::Labels(_));
        let table = match params {
            ParamsDocument::Keys(object) => {
                for mapping in PARAM_KEYS {
                    if let Some(value) = object.get(mapping.source).and_then(scalar_text) {
                        found.insert(mapping.target, value);
                    }
                }
                PARAM_KEYS
            }
            ParamsDocument::Labels(items) => {
                for item in &items {
                    let label = item.label.trim();
                    match PARAM_LABELS.iter().find(|m| m.source == label) {
                        Some(mapping) => {
                            if let Some(value) = scalar_text(&item.value) {
                                found.insert(mapping.target, value);
                            }
                        }
                        None => debug!(label, "ignoring unmapped parameter label"),
                    }
                }
                PARAM_LABELS
            }
        };

        for mapping in table.iter().filter(|m| m.required) {
            if !found.contains_key(mapping.target) {
                return Err(if labelled {
                    ImportError::MissingLabel(mapping.source)
                } else {
                    ImportError::MissingKey(mapping.source)
                });
            }
        }

        if let Some(env) = found.get_mut("env") {
            let upper = env.to_uppercase();
            if !self.env_values.contains(&upper.as_str()) {
                return Err(ImportError::UnknownEnvironment(env.clone()));
            }
            *env = upper;
        }

        for (target, value) in found {
            fields.set(target, value);
        }
        Ok(())
    }
}

/// Resource lists found in a ticket's free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLists {
    /// `name | size` lines
    pub buckets: Vec<String>,
    pub users: Vec<String>,
}

/// Parse the `Бакеты:` / `Пользователи:` sections of a ticket's free text.
///
/// # Errors
///
/// A non-blank text with neither section header is
/// [`ImportError::UnrecognizedResources`].
pub fn parse_resources(text: &str) -> Result<ResourceLists, ImportError> {
    if text.trim().is_empty() {
        return Ok(ResourceLists::default());
    }

    let buckets_block = BUCKETS_SECTION.captures(text).and_then(|c| c.get(1));
    let users_block = USERS_SECTION.captures(text).and_then(|c| c.get(1));
    if buckets_block.is_none() && users_block.is_none() {
        return Err(ImportError::UnrecognizedResources);
    }

    let buckets = buckets_block
        .map(|m| list_lines(m.as_str()).map(normalize_bucket_line).collect())
        .unwrap_or_default();
    let users = users_block
        .map(|m| list_lines(m.as_str()).map(str::to_string).collect())
        .unwrap_or_default();
    Ok(ResourceLists { buckets, users })
}

fn list_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
}

fn normalize_bucket_line(line: &str) -> String {
    match BUCKET_LINE.captures(line) {
        Some(caps) => format!("{} | {}", &caps[1], &caps[2]),
        None => line.to_string(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ImportSchema {
        ImportSchema::new().expect("mapping targets exist on new-tenant")
    }

    #[test]
    fn test_schema_targets_exist() {
        assert!(ImportSchema::new().is_ok());
    }

    #[test]
    fn test_ticket_fields() {
        let ticket = r#"{
            "number": "SRT-0005678",
            "customFieldsValues": [
                {"code": "appealNumber", "value": "SD-0001234"},
                {"code": "applicant", "value": "Иванов Иван"},
                {"code": "resources", "value": "Бакеты:\nif-cosd-data 100 ГБ\nif-cosd-logs | 50\nПользователи:\n- if_cosd_app\n"}
            ]
        }"#;
        let fields = schema().import(ticket, "").unwrap();
        assert_eq!(fields.get("request_id_srt"), Some("SRT-0005678"));
        assert_eq!(fields.get("request_id_sd"), Some("SD-0001234"));
        assert_eq!(fields.get("requester"), Some("Иванов Иван"));
        assert_eq!(
            fields.get("buckets"),
            Some("if-cosd-data | 100\nif-cosd-logs | 50")
        );
        assert_eq!(fields.get("users"), Some("if_cosd_app"));
    }

    #[test]
    fn test_ticket_without_number_fails() {
        let err = schema().import(r#"{"customFieldsValues": []}"#, "").unwrap_err();
        assert!(matches!(err, ImportError::MissingKey("number")));
    }

    #[test]
    fn test_params_object() {
        let params = r#"{"segment": "B2B-CLOUD", "environment": "ift", "risNumber": 1234, "risName": "cosd", "owner": "o@vtb.ru"}"#;
        let fields = schema().import("", params).unwrap();
        assert_eq!(fields.get("env"), Some("IFT"));
        assert_eq!(fields.get("ris_number"), Some("1234"));
        assert_eq!(fields.get("owner"), Some("o@vtb.ru"));
    }

    #[test]
    fn test_params_label_list() {
        let params = r#"[
            {"label": "Зона безопасности", "value": "B2B-CLOUD"},
            {"label": "Среда", "value": "PROD"},
            {"label": "РИС номер", "value": "1234"},
            {"label": "РИС имя", "value": "cosd"},
            {"label": "Зам.владелец", "value": "z@vtb.ru"},
            {"label": "Комментарий", "value": "ignored"}
        ]"#;
        let fields = schema().import("", params).unwrap();
        assert_eq!(fields.get("segment"), Some("B2B-CLOUD"));
        assert_eq!(fields.get("zam_owner"), Some("z@vtb.ru"));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn test_renamed_label_fails_loudly() {
        let params = r#"[
            {"label": "Сегмент", "value": "B2B-CLOUD"},
            {"label": "Среда", "value": "PROD"},
            {"label": "РИС номер", "value": "1234"},
            {"label": "РИС имя", "value": "cosd"}
        ]"#;
        let err = schema().import("", params).unwrap_err();
        assert!(matches!(err, ImportError::MissingLabel("Зона безопасности")));
    }

    #[test]
    fn test_unknown_environment() {
        let params = r#"{"segment": "S", "environment": "DEV", "risNumber": "1", "risName": "x"}"#;
        let err = schema().import("", params).unwrap_err();
        assert_eq!(err.to_string(), "неизвестная среда \"DEV\"");
    }

    #[test]
    fn test_resources_without_headers_fail() {
        let err = parse_resources("Buckets:\nfoo | 1").unwrap_err();
        assert!(matches!(err, ImportError::UnrecognizedResources));
        assert_eq!(parse_resources("  ").unwrap(), ResourceLists::default());
    }

    #[test]
    fn test_users_section_before_buckets() {
        let lists = parse_resources("Пользователи:\nif_cosd_a\nБакеты:\nif-cosd-b | 5").unwrap();
        assert_eq!(lists.users, vec!["if_cosd_a"]);
        assert_eq!(lists.buckets, vec!["if-cosd-b | 5"]);
    }

    #[test]
    fn test_document_shapes() {
        assert!(matches!(
            schema().import("[1]", "").unwrap_err(),
            ImportError::TicketNotObject
        ));
        assert!(matches!(
            schema().import("", "42").unwrap_err(),
            ImportError::UnexpectedParamsShape
        ));
        let err = schema()
            .import(r#"{"number": "SRT-1", "customFieldsValues": [{"value": "x"}]}"#, "")
            .unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn test_invalid_json_reports_parser_error() {
        let err = schema().import("{not json", "").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }
}
