//! Application state types.
//!
//! Responsibilities:
//! - Layout constants shared with the toast renderer.
//! - The busy marker for an in-flight operation.
//! - The per-session context that replaces page-level globals
//!   (selected cluster, last checked tenant).
//!
//! Does NOT handle:
//! - State mutations (in the `App` impl).
//! - The `App` struct itself.

use std::time::{Duration, Instant};

use zayavki_client::{Cluster, TenantInfo};

use crate::forms::TabId;

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// How long the copy button reads "Скопировано!" after a copy.
pub const COPIED_LABEL_TTL: Duration = Duration::from_secs(2);

/// What an in-flight operation is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Search,
    Check,
    Commit,
}

impl OperationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Поиск",
            Self::Check => "Проверка",
            Self::Commit => "Отправка в БД",
        }
    }
}

/// An operation started from `tab` that has not finished yet.
///
/// While one is pending, request buttons, tab switching and clearing are
/// disabled. A pending cluster choice counts as part of the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperation {
    pub tab: TabId,
    pub kind: OperationKind,
    pub started_at: Instant,
}

impl PendingOperation {
    pub fn new(tab: TabId, kind: OperationKind) -> Self {
        Self {
            tab,
            kind,
            started_at: Instant::now(),
        }
    }
}

/// State that outlives a single operation but not the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Cluster picked (or auto-selected) by the last operation that needed one.
    pub selected_cluster: Option<Cluster>,
    /// Info of the tenant most recently checked on the tenant-mod tab.
    pub last_checked_tenant: Option<TenantInfo>,
}

impl Session {
    /// Tenant info of the last check, if it was for `tenant`.
    pub fn checked_tenant(&self, tenant: &str) -> Option<&TenantInfo> {
        self.last_checked_tenant
            .as_ref()
            .filter(|info| info.tenant.trim() == tenant.trim())
    }
}
