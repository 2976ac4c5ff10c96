//! Serde helpers for the backend's loose JSON typing.
//!
//! Responsibilities:
//! - Accept `null` where a string column is expected (nullable database columns).
//! - Accept either JSON numbers or strings for sizes and quotas.
//!
//! Invariants / assumptions:
//! - Nullable columns are rendered as empty strings, never as the text "null".
//! - Numbers are rendered with their plain decimal representation.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::U64(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
        }
    }
}

/// Deserialize a string that may be `null`.
pub fn string_from_nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a string, a number, or `null` into a string.
pub fn string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_string)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_from_nullable")]
        name: String,
        #[serde(default, deserialize_with = "string_from_string_or_number")]
        size: String,
    }

    #[test]
    fn test_null_becomes_empty() {
        let row: Row = serde_json::from_str(r#"{"name": null, "size": null}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.size, "");
    }

    #[test]
    fn test_number_becomes_string() {
        let row: Row = serde_json::from_str(r#"{"name": "b1", "size": 250}"#).unwrap();
        assert_eq!(row.name, "b1");
        assert_eq!(row.size, "250");
    }

    #[test]
    fn test_missing_uses_default() {
        let row: Row = serde_json::from_str("{}").unwrap();
        assert!(row.name.is_empty());
        assert!(row.size.is_empty());
    }
}
