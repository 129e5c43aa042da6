//! Tab group extraction from the double-encoded `tabview-group` field

use crate::error::{ExportError, Result};
use crate::models::{GroupDescriptor, TabGroups, Window};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Build the id → title mapping declared on the root window.
pub fn extract_groups(window: &Window) -> Result<TabGroups> {
    let text = window
        .ext_data
        .as_ref()
        .ok_or_else(|| ExportError::missing("windows[0].extData"))?
        .tabview_group
        .as_deref()
        .ok_or_else(|| ExportError::missing("windows[0].extData.tabview-group"))?;

    parse_groups(text)
}

/// Decode a `tabview-group` payload. Children are visited in declared order.
pub fn parse_groups(text: &str) -> Result<TabGroups> {
    let data: Map<String, Value> =
        serde_json::from_str(text).map_err(|e| ExportError::parse("tabview-group", e))?;

    let mut groups = TabGroups::new();
    for (key, child) in &data {
        let descriptor = descriptor_for(key, child)?;
        let id = descriptor
            .id
            .ok_or_else(|| ExportError::missing(format!("tabview-group.{key}.id")))?;
        let title = descriptor
            .title
            .ok_or_else(|| ExportError::missing(format!("tabview-group.{key}.title")))?;

        tracing::debug!(group_id = %id, title = %title, "found tab group");
        if !groups.insert(id.clone(), title) {
            return Err(ExportError::Format(format!(
                "tab group id {id} is declared more than once"
            )));
        }
    }

    Ok(groups)
}

/// A child is either the descriptor itself or an object whose first
/// property wraps it.
fn descriptor_for(key: &str, child: &Value) -> Result<GroupDescriptor> {
    let object = child.as_object().ok_or_else(|| {
        ExportError::missing(format!("tabview-group.{key} is not a group descriptor"))
    })?;

    let target = if has_scalar_id(child) {
        child
    } else {
        object
            .values()
            .next()
            .filter(|inner| has_scalar_id(inner))
            .ok_or_else(|| ExportError::missing(format!("tabview-group.{key}.id")))?
    };

    GroupDescriptor::deserialize(target)
        .map_err(|e| ExportError::parse(format!("tabview-group.{key}"), e))
}

fn has_scalar_id(value: &Value) -> bool {
    value
        .get("id")
        .is_some_and(|id| id.is_string() || id.is_number())
}
