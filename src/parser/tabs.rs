//! Tab normalization, ordering and grouping

use crate::error::{ExportError, Result};
use crate::models::{GroupedTabs, Tab, TabGroups, TabRecord, TabViewTab, UrlEntry, Window};
use crate::utils::is_empty_payload;

/// Normalize every tab of the root window, in document order.
pub fn extract_tabs(window: &Window, groups: &TabGroups) -> Result<Vec<TabRecord>> {
    let tabs = window
        .tabs
        .as_ref()
        .ok_or_else(|| ExportError::missing("windows[0].tabs"))?;

    tabs.iter()
        .enumerate()
        .map(|(index, tab)| normalize_tab(index, tab, groups))
        .collect()
}

fn normalize_tab(index: usize, tab: &Tab, groups: &TabGroups) -> Result<TabRecord> {
    let payload = tab
        .ext_data
        .as_ref()
        .and_then(|ext| ext.tabview_tab.as_deref());

    let (group_id, default_group) = match payload {
        Some(text) if !is_empty_payload(payload) => (group_from_payload(index, text)?, false),
        _ => {
            let id = groups.default_id().ok_or_else(|| {
                ExportError::missing(format!(
                    "tab {index} has no group data and no tab group is declared"
                ))
            })?;
            tracing::warn!(tab = index, group_id = %id, "tab has no group data, using first declared group");
            (id.to_string(), true)
        }
    };

    let entries = tab
        .entries
        .as_ref()
        .filter(|entries| !entries.is_empty())
        .ok_or_else(|| ExportError::missing(format!("tabs[{index}].entries")))?;

    let urls = entries
        .iter()
        .enumerate()
        .map(|(n, entry)| -> Result<UrlEntry> {
            let title = entry.title.clone().ok_or_else(|| {
                ExportError::missing(format!("tabs[{index}].entries[{n}].title"))
            })?;
            let url = entry.url.clone().ok_or_else(|| {
                ExportError::missing(format!("tabs[{index}].entries[{n}].url"))
            })?;
            Ok(UrlEntry { title, url })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TabRecord {
        group_id,
        is_pinned: tab.pinned.unwrap_or(false),
        urls,
        default_group,
    })
}

fn group_from_payload(index: usize, payload: &str) -> Result<String> {
    let data: TabViewTab = serde_json::from_str(payload)
        .map_err(|e| ExportError::parse(format!("tabs[{index}].extData.tabview-tab"), e))?;

    data.group_id
        .ok_or_else(|| ExportError::missing(format!("tabs[{index}].extData.tabview-tab.groupID")))
}

/// Numeric value of a group id, used for ordering.
pub fn group_number(group_id: &str) -> Result<i32> {
    group_id.trim().parse::<i32>().map_err(|_| {
        ExportError::Format(format!("tab group id {group_id:?} is not an integer"))
    })
}

/// Stable sort by numeric group id, then group by id in order of first
/// appearance. Tabs sharing an id keep their document order.
pub fn group_tabs(tabs: Vec<TabRecord>) -> Result<Vec<GroupedTabs>> {
    let mut keyed = tabs
        .into_iter()
        .map(|tab| -> Result<(i32, TabRecord)> { Ok((group_number(&tab.group_id)?, tab)) })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|(number, _)| *number);

    let mut grouped: Vec<GroupedTabs> = Vec::new();
    for (_, tab) in keyed {
        match grouped.iter_mut().find(|g| g.group_id == tab.group_id) {
            Some(group) => group.tabs.push(tab),
            None => grouped.push(GroupedTabs {
                group_id: tab.group_id.clone(),
                tabs: vec![tab],
            }),
        }
    }

    Ok(grouped)
}
