//! Per-tab field memory.
//!
//! Responsibilities:
//! - Remember field values when the user leaves a tab and hand them back
//!   when the user returns.
//! - Keep shared fields identical across every tab that exposes them.
//!
//! Does NOT handle:
//! - Live input widgets (owned by `App`).
//! - Persistence across runs; the store lives for one session.
//!
//! Invariants:
//! - A shared field has exactly one slot; the most recently saved value wins.
//! - No-memory fields are never written; they restore as empty.
//! - Restoring a field that was never saved yields an empty string.

use std::collections::BTreeMap;

use crate::forms::registry::{TabId, is_no_memory, is_shared, tab_config};

/// Which tabs a clear applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    Tab(TabId),
    All,
}

#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    shared: BTreeMap<String, String>,
    private: BTreeMap<TabId, BTreeMap<String, String>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the values currently shown on `tab`.
    pub fn save<'a>(&mut self, tab: TabId, values: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (id, value) in values {
            if is_no_memory(id) {
                continue;
            }
            if is_shared(id) {
                self.shared.insert(id.to_string(), value.to_string());
            } else {
                self.private
                    .entry(tab)
                    .or_default()
                    .insert(id.to_string(), value.to_string());
            }
        }
    }

    /// Remembered value of one field as seen from `tab`.
    pub fn value(&self, tab: TabId, id: &str) -> &str {
        if is_no_memory(id) {
            return "";
        }
        let slot = if is_shared(id) {
            self.shared.get(id)
        } else {
            self.private.get(&tab).and_then(|values| values.get(id))
        };
        slot.map(String::as_str).unwrap_or("")
    }

    /// Values for every field of `tab`, in registry order.
    pub fn restore(&self, tab: TabId) -> Vec<(&'static str, String)> {
        tab_config(tab)
            .fields
            .iter()
            .map(|spec| (spec.id, self.value(tab, spec.id).to_string()))
            .collect()
    }

    /// Blank remembered values in `scope`.
    ///
    /// Clearing one tab also blanks the shared fields it exposes, so other
    /// tabs see the cleared value on their next restore.
    pub fn clear(&mut self, scope: ClearScope) {
        match scope {
            ClearScope::All => {
                self.shared.clear();
                self.private.clear();
            }
            ClearScope::Tab(tab) => {
                self.private.remove(&tab);
                for spec in tab_config(tab).fields {
                    self.shared.remove(spec.id);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shared.values().all(String::is_empty)
            && self
                .private
                .values()
                .flat_map(BTreeMap::values)
                .all(String::is_empty)
    }
}
