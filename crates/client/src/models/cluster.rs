//! Storage cluster records.
//!
//! The backend reads clusters from an inventory sheet and keeps its column
//! headers as JSON keys, so most fields carry Cyrillic renames.

use serde::{Deserialize, Serialize};

/// A candidate storage cluster.
///
/// Never created or mutated client-side; it is displayed and sent back
/// verbatim as the caller's selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Issuance flag
    #[serde(rename = "Выдача", default)]
    pub issuance: String,
    /// Data center
    #[serde(rename = "ЦОД", default)]
    pub data_center: String,
    /// Environment
    #[serde(rename = "Среда", default)]
    pub environment: String,
    /// Security zone (segment)
    #[serde(rename = "ЗБ", default)]
    pub security_zone: String,
    #[serde(default)]
    pub tls_endpoint: String,
    #[serde(default)]
    pub mtls_endpoint: String,
    #[serde(rename = "Кластер", default)]
    pub name: String,
    #[serde(rename = "Реалм", default)]
    pub realm: String,
}

impl Cluster {
    /// Label used in cluster pick lists: `name (data center)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.data_center)
    }

    /// Every attribute with its display caption, in detail-panel order.
    pub fn attributes(&self) -> [(&'static str, &str); 8] {
        [
            ("Кластер", &self.name),
            ("ЦОД", &self.data_center),
            ("Среда", &self.environment),
            ("ЗБ", &self.security_zone),
            ("Реалм", &self.realm),
            ("Выдача", &self.issuance),
            ("TLS endpoint", &self.tls_endpoint),
            ("mTLS endpoint", &self.mtls_endpoint),
        ]
    }
}

/// Body of the `cluster-info` lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterInfoRequest {
    pub segment: String,
    pub env: String,
    pub cluster: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_deserializes_cyrillic_keys() {
        let json = r#"{
            "Выдача": "да",
            "ЦОД": "DC1",
            "Среда": "IFT",
            "ЗБ": "INET-DEVTEST-SYNT",
            "tls_endpoint": "https://s3-tls.dc1",
            "mtls_endpoint": "https://s3-mtls.dc1",
            "Кластер": "cls-01",
            "Реалм": "realm-a"
        }"#;
        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.name, "cls-01");
        assert_eq!(cluster.data_center, "DC1");
        assert_eq!(cluster.realm, "realm-a");
        assert_eq!(cluster.display_label(), "cls-01 (DC1)");
    }

    #[test]
    fn test_cluster_roundtrips_original_keys() {
        let cluster = Cluster {
            name: "cls-02".into(),
            data_center: "DC2".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(value["Кластер"], "cls-02");
        assert_eq!(value["ЦОД"], "DC2");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let cluster: Cluster = serde_json::from_str(r#"{"Кластер": "solo"}"#).unwrap();
        assert_eq!(cluster.name, "solo");
        assert!(cluster.tls_endpoint.is_empty());
    }
}
