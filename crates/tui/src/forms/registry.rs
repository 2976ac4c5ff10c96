//! Tab and field registry.
//!
//! Responsibilities:
//! - Describe the five workflow tabs: ordered fields, buttons, required ids.
//! - Classify field ids as shared between tabs or never remembered.
//!
//! Does NOT handle:
//! - Field values (see `forms::store`).
//! - Field validation (see `forms::validation`).
//!
//! Invariants:
//! - Field ids are unique within a tab.
//! - Tab configs are static; lookups never allocate a tab on the fly.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;

/// Registry lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown tab id: {0}")]
    UnknownTab(String),

    #[error("tab {tab} has no field {field}")]
    UnknownField { tab: TabId, field: String },
}

/// One of the five workflow tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TabId {
    Search,
    NewTenant,
    TenantMod,
    UserBucketDel,
    BucketMod,
}

impl TabId {
    /// Tabs in display order.
    pub const ALL: [TabId; 5] = [
        TabId::Search,
        TabId::NewTenant,
        TabId::TenantMod,
        TabId::UserBucketDel,
        TabId::BucketMod,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::NewTenant => "new-tenant",
            Self::TenantMod => "tenant-mod",
            Self::UserBucketDel => "user-bucket-del",
            Self::BucketMod => "bucket-mod",
        }
    }

    /// Short caption for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Поиск",
            Self::NewTenant => "Новый тенант",
            Self::TenantMod => "Добавление в тенант",
            Self::UserBucketDel => "Удаление",
            Self::BucketMod => "Квоты",
        }
    }

    /// Heading shown above the tab's form.
    pub fn title(self) -> &'static str {
        match self {
            Self::Search => "Поиск",
            Self::NewTenant => "Создание нового тенанта",
            Self::TenantMod => "Создание пользователя/бакета в существующем тенанте",
            Self::UserBucketDel => "Удаление пользователя/бакета из существующего тенанта",
            Self::BucketMod => "Изменение квоты бакета",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tabs that operate on an already provisioned tenant.
    pub fn is_existing_tenant(self) -> bool {
        matches!(
            self,
            Self::TenantMod | Self::UserBucketDel | Self::BucketMod
        )
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownTab(s.to_string()))
    }
}

/// An entry of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input widget used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select(&'static [SelectOption]),
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub required: bool,
}

/// What a tab button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonBehavior {
    Search,
    Check,
    Commit,
    Clear,
    ClearAll,
    ImportJson,
}

impl ButtonBehavior {
    /// Buttons that talk to the backend and are disabled while busy.
    pub fn sends_request(self) -> bool {
        matches!(self, Self::Search | Self::Check | Self::Commit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub behavior: ButtonBehavior,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabConfig {
    pub id: TabId,
    pub fields: &'static [FieldSpec],
    pub buttons: &'static [ButtonSpec],
}

impl TabConfig {
    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Like [`TabConfig::field`], but a missing id is an error.
    pub fn require_field(&self, id: &str) -> Result<&'static FieldSpec, RegistryError> {
        self.field(id).ok_or_else(|| RegistryError::UnknownField {
            tab: self.id,
            field: id.to_string(),
        })
    }

    pub fn has_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn has_button(&self, behavior: ButtonBehavior) -> bool {
        self.buttons.iter().any(|b| b.behavior == behavior)
    }
}

/// Fields whose values are never copied into the store.
pub const NO_MEMORY_FIELDS: &[&str] = &[
    "request_id_sd",
    "request_id_srt",
    "owner",
    "zam_owner",
    "resp_group",
    "requester",
    "email_for_credentials",
    "tenant_override",
    "users",
    "buckets",
];

/// Fields kept per tab even when several tabs expose them.
pub const NON_SHARED_FIELDS: &[&str] = &[
    "request_id_sd",
    "request_id_srt",
    "tenant_override",
    "users",
    "buckets",
    "user",
    "bucket",
    "requester",
    "email_for_credentials",
    "resp_group",
    "owner",
    "zam_owner",
];

const ENV_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Выберите среду",
    },
    SelectOption {
        value: "PROD",
        label: "PROD",
    },
    SelectOption {
        value: "PREPROD",
        label: "PREPROD",
    },
    SelectOption {
        value: "IFT",
        label: "IFT",
    },
    SelectOption {
        value: "HOTFIX",
        label: "HOTFIX",
    },
];

const ENV_OPTIONS_WITH_LT: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Выберите среду",
    },
    SelectOption {
        value: "PROD",
        label: "PROD",
    },
    SelectOption {
        value: "PREPROD",
        label: "PREPROD",
    },
    SelectOption {
        value: "IFT",
        label: "IFT",
    },
    SelectOption {
        value: "HOTFIX",
        label: "HOTFIX",
    },
    SelectOption {
        value: "LT",
        label: "LT",
    },
];

const fn field(
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    placeholder: Option<&'static str>,
    required: bool,
) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind,
        placeholder,
        required,
    }
}

const fn button(behavior: ButtonBehavior, label: &'static str) -> ButtonSpec {
    ButtonSpec { behavior, label }
}

const SEARCH_FIELDS: &[FieldSpec] = &[
    field(
        "segment",
        "Зона безопасности",
        FieldKind::Text,
        Some("INET-DEVTEST-SYNT"),
        true,
    ),
    field("env", "Среда", FieldKind::Select(ENV_OPTIONS), None, true),
    field("ris_number", "РИС номер", FieldKind::Text, Some("1763"), false),
    field("ris_name", "РИС имя", FieldKind::Text, Some("cosd"), false),
    field("cluster", "Кластер", FieldKind::Text, None, false),
    field("tenant", "Тенант", FieldKind::Text, None, false),
    field("bucket", "Бакет", FieldKind::Text, None, false),
    field("user", "Пользователь", FieldKind::Text, None, false),
];

const NEW_TENANT_FIELDS: &[FieldSpec] = &[
    field(
        "request_id_sd",
        "Номер обращения SD",
        FieldKind::Text,
        Some("SD-XXXXXXX"),
        true,
    ),
    field(
        "request_id_srt",
        "Номер задания SRT",
        FieldKind::Text,
        Some("SRT-XXXXXXX"),
        true,
    ),
    field(
        "segment",
        "Зона безопасности",
        FieldKind::Text,
        Some("INET-DEVTEST-SYNT"),
        true,
    ),
    field(
        "env",
        "Среда",
        FieldKind::Select(ENV_OPTIONS_WITH_LT),
        None,
        true,
    ),
    field("ris_number", "РИС номер", FieldKind::Text, Some("1763"), true),
    field("ris_name", "РИС имя", FieldKind::Text, Some("cosd"), true),
    field(
        "resp_group",
        "Группа сопровождения",
        FieldKind::Text,
        Some("Ответственная РГ"),
        true,
    ),
    field(
        "owner",
        "Владелец",
        FieldKind::Email,
        Some("email владельца"),
        true,
    ),
    field(
        "zam_owner",
        "Зам.владелец",
        FieldKind::Email,
        Some("email зам.владельца"),
        false,
    ),
    field(
        "requester",
        "Заявитель",
        FieldKind::Text,
        Some("ФИО заявителя"),
        true,
    ),
    field(
        "email_for_credentials",
        "Email для отправки данных УЗ",
        FieldKind::Email,
        Some("email@vtb.ru"),
        true,
    ),
    field(
        "tenant_override",
        "Имя тенанта (override)",
        FieldKind::Text,
        Some("Оставьте пустым для автогенерации"),
        false,
    ),
    field(
        "users",
        "Дополнительные пользователи (по одному на строку)",
        FieldKind::TextArea,
        Some("if_cosd_user1\nif_cosd_user2"),
        false,
    ),
    field(
        "buckets",
        "Бакеты с указанием квоты (формат: имя-бакета | размер)",
        FieldKind::TextArea,
        Some("if-cosd-bucket1 | 100\nif-cosd-bucket2 | 200"),
        false,
    ),
];

const TENANT_MOD_FIELDS: &[FieldSpec] = &[
    field(
        "tenant",
        "Имя тенанта",
        FieldKind::Text,
        Some("Введите имя тенанта"),
        true,
    ),
    field(
        "request_id_sd",
        "Номер обращения SD",
        FieldKind::Text,
        Some("SD-XXXXXXX"),
        true,
    ),
    field(
        "request_id_srt",
        "Номер задания SRT",
        FieldKind::Text,
        Some("SRT-XXXXXXX"),
        true,
    ),
    field(
        "email_for_credentials",
        "Email для отправки данных УЗ",
        FieldKind::Email,
        Some("example@vtb.ru"),
        false,
    ),
    field(
        "users",
        "Дополнительные пользователи (по одному на строку)",
        FieldKind::TextArea,
        Some("if_cosd_user1\nif_cosd_user2"),
        false,
    ),
    field(
        "buckets",
        "Бакеты с указанием квоты (формат: имя-бакета | размер)",
        FieldKind::TextArea,
        Some("if-cosd-bucket1 | 100\nif-cosd-bucket2 | 200"),
        false,
    ),
];

const USER_BUCKET_DEL_FIELDS: &[FieldSpec] = &[
    field(
        "tenant",
        "Имя тенанта",
        FieldKind::Text,
        Some("Введите имя тенанта"),
        true,
    ),
    field(
        "users",
        "Пользователи (один в строке)",
        FieldKind::TextArea,
        Some("if_cosd_user1\nif_cosd_user2"),
        false,
    ),
    field(
        "buckets",
        "Бакеты (один в строке)",
        FieldKind::TextArea,
        Some("if-cosd-bucket1\nif-cosd-bucket2"),
        false,
    ),
];

const BUCKET_MOD_FIELDS: &[FieldSpec] = &[
    field(
        "tenant",
        "Имя тенанта",
        FieldKind::Text,
        Some("Введите имя тенанта"),
        true,
    ),
    field(
        "buckets",
        "Бакеты с новой квотой (формат: имя-бакета | размер)",
        FieldKind::TextArea,
        Some("if-cosd-bucket1 | 200"),
        true,
    ),
];

const SEARCH_BUTTONS: &[ButtonSpec] = &[
    button(ButtonBehavior::Search, "Поиск"),
    button(ButtonBehavior::Clear, "Очистить"),
    button(ButtonBehavior::ClearAll, "Очистить все поля"),
];

const NEW_TENANT_BUTTONS: &[ButtonSpec] = &[
    button(ButtonBehavior::ImportJson, "Импорт из JSON"),
    button(ButtonBehavior::Check, "Проверить"),
    button(ButtonBehavior::Commit, "Отправить в БД"),
    button(ButtonBehavior::Clear, "Очистить"),
    button(ButtonBehavior::ClearAll, "Очистить все поля"),
];

const EXISTING_TENANT_BUTTONS: &[ButtonSpec] = &[
    button(ButtonBehavior::Check, "Проверить"),
    button(ButtonBehavior::Commit, "Отправить в БД"),
    button(ButtonBehavior::Clear, "Очистить"),
    button(ButtonBehavior::ClearAll, "Очистить все поля"),
];

static TAB_CONFIGS: [TabConfig; 5] = [
    TabConfig {
        id: TabId::Search,
        fields: SEARCH_FIELDS,
        buttons: SEARCH_BUTTONS,
    },
    TabConfig {
        id: TabId::NewTenant,
        fields: NEW_TENANT_FIELDS,
        buttons: NEW_TENANT_BUTTONS,
    },
    TabConfig {
        id: TabId::TenantMod,
        fields: TENANT_MOD_FIELDS,
        buttons: EXISTING_TENANT_BUTTONS,
    },
    TabConfig {
        id: TabId::UserBucketDel,
        fields: USER_BUCKET_DEL_FIELDS,
        buttons: EXISTING_TENANT_BUTTONS,
    },
    TabConfig {
        id: TabId::BucketMod,
        fields: BUCKET_MOD_FIELDS,
        buttons: EXISTING_TENANT_BUTTONS,
    },
];

/// Configuration of a known tab.
pub fn tab_config(tab: TabId) -> &'static TabConfig {
    &TAB_CONFIGS[tab.index()]
}

/// Configuration of a tab by its string id.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownTab`] for ids outside the registry.
pub fn lookup(tab_id: &str) -> Result<&'static TabConfig, RegistryError> {
    let tab = tab_id.parse::<TabId>()?;
    Ok(tab_config(tab))
}

pub fn is_no_memory(field_id: &str) -> bool {
    NO_MEMORY_FIELDS.contains(&field_id)
}

static SHARED_FIELDS: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    let mut seen = BTreeSet::new();
    let mut shared = BTreeSet::new();
    for config in &TAB_CONFIGS {
        for spec in config.fields {
            if NON_SHARED_FIELDS.contains(&spec.id) {
                continue;
            }
            if !seen.insert(spec.id) {
                shared.insert(spec.id);
            }
        }
    }
    shared
});

/// Ids exposed by more than one tab and not marked private.
pub fn shared_fields() -> &'static BTreeSet<&'static str> {
    &SHARED_FIELDS
}

pub fn is_shared(field_id: &str) -> bool {
    SHARED_FIELDS.contains(field_id)
}
