//! Raw Session Manager backup structures
//!
//! These mirror the parts of the backup document that the exporter reads.
//! Everything is optional at this level so that absent fields surface as
//! `MissingField` errors from the parser rather than generic decode errors.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub windows: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Window {
    #[serde(rename = "extData", default)]
    pub ext_data: Option<WindowExtData>,

    #[serde(default)]
    pub tabs: Option<Vec<Tab>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowExtData {
    /// Double-encoded JSON object describing the tab groups.
    #[serde(rename = "tabview-group", default)]
    pub tabview_group: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tab {
    #[serde(rename = "extData", default)]
    pub ext_data: Option<TabExtData>,

    #[serde(default)]
    pub pinned: Option<bool>,

    #[serde(default)]
    pub entries: Option<Vec<Entry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabExtData {
    /// Double-encoded JSON object carrying the tab's `groupID`.
    #[serde(rename = "tabview-tab", default)]
    pub tabview_tab: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// Decoded `tabview-tab` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabViewTab {
    #[serde(rename = "groupID", default, deserialize_with = "string_or_number")]
    pub group_id: Option<String>,
}

/// Decoded group descriptor inside `tabview-group`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupDescriptor {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// Accepts `"3"`, `3` or `null` and yields the string form.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}
