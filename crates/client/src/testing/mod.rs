//! Testing utilities for provisioning client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use zayavki_client::testing::{load_fixture, load_fixture_text};
//!
//! let resources = load_fixture("tenant/check_resources_create.json");
//! let reply = load_fixture_text("submit/cluster_selection_two.txt");
//! ```

use std::path::{Path, PathBuf};

use crate::form::{FormData, SubmitFlags};
use crate::models::Cluster;
use crate::workflow::ClusterChooser;

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path_rel: &str) -> serde_json::Value {
    let content = load_fixture_text(fixture_path_rel);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture verbatim (plain-text backend replies).
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_text(fixture_path_rel: &str) -> String {
    let full_path = fixture_path(fixture_path_rel);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// A new-tenant form with every required field filled.
pub fn sample_new_tenant_form() -> FormData {
    [
        ("request_id_sd", "SD-0001234"),
        ("request_id_srt", "SRT-0005678"),
        ("segment", "B2B-CLOUD"),
        ("env", "IFT"),
        ("ris_number", "1234"),
        ("ris_name", "cosd"),
        ("resp_group", "storage-team"),
        ("owner", "owner@example.com"),
        ("requester", "Requester Name"),
        ("email_for_credentials", "team@example.com"),
        ("users", "if_cosd_app"),
        ("buckets", "if-cosd-data | 100"),
    ]
    .into_iter()
    .collect()
}

/// Flags of a new-tenant dry run.
pub fn new_tenant_check() -> SubmitFlags {
    SubmitFlags::check().creating_tenant()
}

/// Chooser that records what it was shown and answers with a fixed index.
#[derive(Debug, Default)]
pub struct RecordingChooser {
    pick: Option<usize>,
    seen: std::sync::Mutex<Vec<Vec<Cluster>>>,
}

impl RecordingChooser {
    /// Always pick the candidate at `index`.
    pub fn picking(index: usize) -> Self {
        Self {
            pick: Some(index),
            ..Default::default()
        }
    }

    /// Always cancel.
    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Candidate lists shown so far.
    pub fn offers(&self) -> Vec<Vec<Cluster>> {
        self.seen.lock().expect("chooser lock poisoned").clone()
    }
}

impl ClusterChooser for RecordingChooser {
    fn choose(
        &self,
        clusters: Vec<Cluster>,
    ) -> impl std::future::Future<Output = Option<Cluster>> + Send {
        let choice = self.pick.and_then(|i| clusters.get(i).cloned());
        self.seen
            .lock()
            .expect("chooser lock poisoned")
            .push(clusters);
        std::future::ready(choice)
    }
}
