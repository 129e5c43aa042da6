//! Backup extraction: raw backup text to grouped tab records

pub mod backup;
pub mod groups;
pub mod tabs;

pub use backup::{parse_backup, root_window};
pub use groups::{extract_groups, parse_groups};
pub use tabs::{extract_tabs, group_number, group_tabs};

use crate::error::Result;
use crate::models::Session;

/// Run the full extraction pipeline over the text of a backup file.
pub fn extract_session(text: &str) -> Result<Session> {
    let backup = parse_backup(text)?;
    let window = root_window(&backup)?;
    let groups = extract_groups(&window)?;
    tracing::debug!(count = groups.len(), "extracted tab groups");

    let tabs = extract_tabs(&window, &groups)?;
    tracing::debug!(count = tabs.len(), "normalized tabs");

    let grouped = group_tabs(tabs)?;
    Ok(Session { groups, grouped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use serde_json::json;

    fn backup(groups: serde_json::Value, tabs: serde_json::Value) -> String {
        json!({
            "windows": [{
                "extData": { "tabview-group": groups.to_string() },
                "tabs": tabs,
            }]
        })
        .to_string()
    }

    #[test]
    fn test_extract_session_groups_and_orders() {
        let text = backup(
            json!({"0": {"id": "0", "title": "Work"}, "1": {"id": "1", "title": "Personal"}}),
            json!([
                {"extData": {"tabview-tab": r#"{"groupID":"1"}"#},
                 "entries": [{"title": "A", "url": "https://a.example/"}]},
                {"extData": {"tabview-tab": r#"{"groupID":"0"}"#},
                 "entries": [{"title": "B1", "url": "https://b.example/1"},
                             {"title": "B2", "url": "https://b.example/2"}]},
                {"extData": {"tabview-tab": r#"{"groupID":"0"}"#},
                 "entries": [{"title": "C", "url": "https://c.example/"}]},
            ]),
        );

        let session = extract_session(&text).unwrap();
        assert_eq!(session.grouped.len(), 2);
        assert_eq!(session.grouped[0].group_id, "0");
        assert_eq!(session.grouped[0].tabs[0].urls[0].title, "B1");
        assert_eq!(session.grouped[0].tabs[1].urls[0].title, "C");
        assert_eq!(session.grouped[1].group_id, "1");
        assert_eq!(session.tab_count(), 3);
    }

    #[test]
    fn test_default_group_is_first_declared() {
        let text = backup(
            json!({"7": {"id": "7", "title": "Seven"}, "2": {"id": "2", "title": "Two"}}),
            json!([
                {"extData": {"tabview-tab": "null"},
                 "entries": [{"title": "A", "url": "https://a.example/"}]},
                {"entries": [{"title": "B", "url": "https://b.example/"}]},
                {"extData": {"tabview-tab": r#"{"groupID":2}"#},
                 "entries": [{"title": "C", "url": "https://c.example/"}]},
            ]),
        );

        let session = extract_session(&text).unwrap();
        assert_eq!(session.grouped[0].group_id, "2");
        assert_eq!(session.grouped[1].group_id, "7");
        assert_eq!(session.grouped[1].tabs.len(), 2);
        assert_eq!(session.default_group_tab_count(), 2);
    }

    #[test]
    fn test_window_without_ext_data() {
        let text = r#"{"windows": [{"tabs": []}]}"#;
        let err = extract_session(text).unwrap_err();
        assert!(matches!(err, ExportError::MissingField(ref f) if f == "windows[0].extData"));
    }

    #[test]
    fn test_non_numeric_group_id() {
        let text = backup(
            json!({"x": {"id": "work", "title": "Work"}}),
            json!([{"extData": {"tabview-tab": r#"{"groupID":"work"}"#},
                    "entries": [{"title": "A", "url": "https://a.example/"}]}]),
        );
        let err = extract_session(&text).unwrap_err();
        assert!(matches!(err, ExportError::Format(_)));
    }
}
