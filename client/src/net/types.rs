//! Manifest record schema.
//!
//! DESIGN
//! ======
//! The manifest is maintained by hand, outside this crate. Every field is
//! optional and a field of the wrong JSON type reads as absent, so a single
//! sloppy entry never takes down the whole poem list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Link text used when a record has no title.
pub const UNTITLED: &str = "Untitled";

/// One poem entry in `poems-list.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    /// Display title.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    /// Poet name.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub author: Option<String>,
    /// Page path, relative to the site origin.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub file: Option<String>,
    /// Category labels in manifest order.
    #[serde(default, deserialize_with = "deserialize_lenient_tags")]
    pub tags: Option<Vec<String>>,
}

impl PoemRecord {
    /// Title for link text, falling back to [`UNTITLED`] when absent or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    /// Tags as a slice; absent tags read as empty.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn deserialize_lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}
