//! Client-side field validators.
//!
//! Every validator is a pure function of the field value and, for the
//! naming-convention checks, the tab's other values. Validators never touch
//! the value itself; they only produce a message for the field.
//!
//! Naming conventions:
//! - Buckets start with `<env_code>-<ris_code>-` (underscores of the RIS
//!   name become hyphens).
//! - Users start with `<env_code>_<ris_name>_` and use `[A-Za-z0-9_]` only.
//! - The env/RIS pair comes from the `env` and `ris_name` fields when both
//!   are filled, otherwise it is parsed out of the `tenant` field
//!   (`envcode_riscode_rest`).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use zayavki_client::{FormData, VALID_ENV_CODES, env_code_for};

use crate::forms::registry::{TabId, tab_config};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

const FORMAT_OK: &str = "Формат корректен";
const TENANT_FORMAT_OK: &str = "Формат имени тенанта корректен";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

/// Message shown under a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub text: String,
}

impl ValidationMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    fn from_errors(errors: Vec<String>, ok: &str) -> Self {
        if errors.is_empty() {
            Self::success(ok)
        } else {
            Self::error(errors.join("\n"))
        }
    }
}

/// Validate one field of `tab`.
///
/// Returns `None` when the field is blank or has no validator.
pub fn validate_field(tab: TabId, field_id: &str, values: &FormData) -> Option<ValidationMessage> {
    let value = values.trimmed(field_id);
    if value.is_empty() {
        return None;
    }

    match field_id {
        "request_id_sd" => prefix_error(value, "sd-", "Номер должен начинаться с \"SD-\"")
            .map(ValidationMessage::error),
        "request_id_srt" => prefix_error(value, "srt-", "Номер должен начинаться с \"SRT-\"")
            .map(ValidationMessage::error),
        "owner" | "zam_owner" => email_error(value).map(ValidationMessage::error),
        "email_for_credentials" => email_list_error(value).map(ValidationMessage::error),
        "buckets" if tab == TabId::UserBucketDel => Some(ValidationMessage::from_errors(
            bucket_name_errors(value, values),
            FORMAT_OK,
        )),
        "buckets" => Some(ValidationMessage::from_errors(
            bucket_quota_errors(value, values),
            FORMAT_OK,
        )),
        "users" => Some(ValidationMessage::from_errors(
            username_errors(value, values),
            FORMAT_OK,
        )),
        "tenant" if tab.is_existing_tenant() => Some(ValidationMessage::from_errors(
            tenant_name_errors(value),
            TENANT_FORMAT_OK,
        )),
        _ => None,
    }
}

/// Validate every field of `tab`; blank and unchecked fields are omitted.
pub fn validate_tab(tab: TabId, values: &FormData) -> BTreeMap<&'static str, ValidationMessage> {
    tab_config(tab)
        .fields
        .iter()
        .filter_map(|spec| validate_field(tab, spec.id, values).map(|m| (spec.id, m)))
        .collect()
}

pub fn has_errors(messages: &BTreeMap<&'static str, ValidationMessage>) -> bool {
    messages.values().any(ValidationMessage::is_error)
}

/// Labels of required fields of `tab` that are blank.
pub fn missing_required(tab: TabId, values: &FormData) -> Vec<&'static str> {
    tab_config(tab)
        .required_fields()
        .filter(|spec| values.is_blank(spec.id))
        .map(|spec| spec.label)
        .collect()
}

/// Case-insensitive literal prefix check for ticket numbers.
pub fn prefix_error(value: &str, prefix: &str, message: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    if value.is_empty() || value.starts_with(prefix) {
        None
    } else {
        Some(message.to_string())
    }
}

pub fn email_error(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || EMAIL_RE.is_match(value) {
        None
    } else {
        Some("Введите корректный email адрес".to_string())
    }
}

/// Semicolon separated addresses; a comma is reported before anything else.
pub fn email_list_error(value: &str) -> Option<String> {
    let value = value.trim();
    if value.contains(',') {
        return Some(
            "Используйте точку с запятой (;) для разделения адресов вместо запятой".to_string(),
        );
    }
    value
        .split(';')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .find_map(email_error)
}

/// Positive integer without unit suffix or sign.
pub fn is_valid_quota(quota: &str) -> bool {
    let mut chars = quota.trim().chars();
    matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit())
}

/// Non-blank lines of a textarea with their 1-based line numbers.
fn numbered_lines(value: &str) -> impl Iterator<Item = (usize, &str)> {
    value
        .trim()
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

enum QuotaLine<'a> {
    Malformed,
    Parts { name: &'a str, quota: &'a str },
}

fn split_quota_line(line: &str) -> QuotaLine<'_> {
    let mut parts = line.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(quota), None) => QuotaLine::Parts {
            name: name.trim(),
            quota: quota.trim(),
        },
        _ => QuotaLine::Malformed,
    }
}

fn quota_errors(line_no: usize, quota: &str) -> Option<String> {
    if quota.is_empty() {
        Some(format!(
            "Строка {line_no}: Размер квоты не может быть пустым"
        ))
    } else if !is_valid_quota(quota) {
        Some(format!(
            "Строка {line_no}: Размер квоты \"{quota}\" должен быть положительным целым числом (в GB)"
        ))
    } else {
        None
    }
}

/// Format of `name | quota` lines, without the naming convention.
pub fn quota_line_errors(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    for (line_no, line) in numbered_lines(value) {
        match split_quota_line(line) {
            QuotaLine::Malformed => errors.push(malformed_quota_line(line_no)),
            QuotaLine::Parts { name, quota } => {
                if name.is_empty() {
                    errors.push(empty_bucket_name(line_no));
                }
                errors.extend(quota_errors(line_no, quota));
            }
        }
    }
    errors
}

/// Format of `name | quota` lines plus the bucket naming convention.
pub fn bucket_quota_errors(value: &str, values: &FormData) -> Vec<String> {
    let mut errors = Vec::new();
    for (line_no, line) in numbered_lines(value) {
        match split_quota_line(line) {
            QuotaLine::Malformed => errors.push(malformed_quota_line(line_no)),
            QuotaLine::Parts { name, quota } => {
                if name.is_empty() {
                    errors.push(empty_bucket_name(line_no));
                } else {
                    errors.extend(bucket_name_line_errors(name, line_no, values));
                }
                errors.extend(quota_errors(line_no, quota));
            }
        }
    }
    errors
}

/// Bucket names only, one per line (deletion).
pub fn bucket_name_errors(value: &str, values: &FormData) -> Vec<String> {
    numbered_lines(value)
        .flat_map(|(line_no, name)| bucket_name_line_errors(name, line_no, values))
        .collect()
}

pub fn username_errors(value: &str, values: &FormData) -> Vec<String> {
    numbered_lines(value)
        .flat_map(|(line_no, name)| username_line_errors(name, line_no, values))
        .collect()
}

fn malformed_quota_line(line_no: usize) -> String {
    format!("Строка {line_no}: Неверный формат. Используйте \"имя-бакета | размер\"")
}

fn empty_bucket_name(line_no: usize) -> String {
    format!("Строка {line_no}: Имя бакета не может быть пустым")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resource {
    Bucket,
    User,
}

impl Resource {
    fn separator(self) -> char {
        match self {
            Self::Bucket => '-',
            Self::User => '_',
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Self::Bucket => "бакетов",
            Self::User => "пользователей",
        }
    }
}

/// Expected name prefix for `resource`, or the per-line context error.
fn expected_prefix(resource: Resource, line_no: usize, values: &FormData) -> Result<String, String> {
    let env = values.trimmed("env");
    let ris_name = values.trimmed("ris_name");
    let sep = resource.separator();

    if !env.is_empty() && !ris_name.is_empty() {
        let env_code = env_code_for(env)
            .ok_or_else(|| format!("Строка {line_no}: Неизвестная среда \"{env}\""))?;
        let ris_code = match resource {
            Resource::Bucket => ris_name.replace('_', "-"),
            Resource::User => ris_name.to_string(),
        };
        return Ok(format!("{env_code}{sep}{ris_code}{sep}"));
    }

    let tenant = values.trimmed("tenant");
    if tenant.is_empty() {
        return Err(format!(
            "Строка {line_no}: Заполните поле \"Имя тенанта\" перед валидацией {}",
            resource.plural()
        ));
    }
    let parts: Vec<&str> = tenant.split('_').collect();
    if parts.len() < 2 {
        return Err(format!(
            "Строка {line_no}: Неверный формат имени тенанта \"{tenant}\". Ожидается: env_riscode_rest"
        ));
    }
    let (env_code, ris_code) = (parts[0], parts[1]);
    if ris_code.trim().is_empty() {
        return Err(format!(
            "Строка {line_no}: Код РИС в имени тенанта \"{tenant}\" не может быть пустым"
        ));
    }
    if !VALID_ENV_CODES.contains(&env_code) {
        return Err(format!(
            "Строка {line_no}: Неверный код среды в имени тенанта \"{env_code}\". Допустимые значения: {}",
            VALID_ENV_CODES.join(", ")
        ));
    }
    Ok(format!("{env_code}{sep}{ris_code}{sep}"))
}

fn naming_errors(
    resource: Resource,
    name: &str,
    line_no: usize,
    values: &FormData,
) -> Vec<String> {
    let prefix = match expected_prefix(resource, line_no, values) {
        Ok(prefix) => prefix,
        Err(context_error) => return vec![context_error],
    };

    let (subject, allowed_char, allowed_desc) = match resource {
        Resource::Bucket => ("Имя бакета", '-', "буквы, цифры и дефисы"),
        Resource::User => ("Имя пользователя", '_', "буквы, цифры и подчеркивания"),
    };

    let mut errors = Vec::new();
    if !name.to_lowercase().starts_with(&prefix.to_lowercase()) {
        errors.push(format!(
            "Строка {line_no}: {subject} \"{name}\" должно начинаться с \"{prefix}\""
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == allowed_char)
    {
        errors.push(format!(
            "Строка {line_no}: {subject} \"{name}\" содержит недопустимые символы. Разрешены только {allowed_desc}"
        ));
    }
    if name.chars().count() <= prefix.chars().count() {
        errors.push(format!(
            "Строка {line_no}: {subject} \"{name}\" слишком короткое. Должно быть длиннее префикса \"{prefix}\""
        ));
    }
    errors
}

fn bucket_name_line_errors(name: &str, line_no: usize, values: &FormData) -> Vec<String> {
    naming_errors(Resource::Bucket, name, line_no, values)
}

fn username_line_errors(name: &str, line_no: usize, values: &FormData) -> Vec<String> {
    naming_errors(Resource::User, name, line_no, values)
}

/// Existing tenant name of the form `envcode_riscode_rest`.
pub fn tenant_name_errors(value: &str) -> Vec<String> {
    let value = value.trim();
    let mut errors = Vec::new();

    let parts: Vec<&str> = value.split('_').collect();
    if parts.len() < 2 {
        errors.push("Неверный формат имени тенанта. Ожидается: env_riscode_rest".to_string());
    } else {
        let env_code = parts[0];
        if !VALID_ENV_CODES.contains(&env_code) {
            errors.push(format!(
                "Неверный код среды \"{env_code}\". Допустимые значения: {}",
                VALID_ENV_CODES.join(", ")
            ));
        }
        if parts[1].trim().is_empty() {
            errors.push("Код РИС не может быть пустым".to_string());
        }
        if parts.get(2).is_none_or(|rest| rest.trim().is_empty()) {
            errors.push(
                "Имя тенанта должно содержать дополнительную часть после env_riscode_".to_string(),
            );
        }
    }

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.push(
            "Имя тенанта содержит недопустимые символы. Разрешены только буквы, цифры и подчеркивания"
                .to_string(),
        );
    }
    errors
}
