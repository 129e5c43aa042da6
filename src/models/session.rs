//! Normalized session records produced by the extractor

/// A declared tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub id: String,
    pub title: String,
}

/// Tab groups in the order the backup declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabGroups {
    groups: Vec<TabGroup>,
}

impl TabGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group, returning `false` if the id is already declared.
    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.groups.push(TabGroup {
            id,
            title: title.into(),
        });
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    pub fn title(&self, id: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.title.as_str())
    }

    /// Id of the first declared group; tabs without group data land here.
    pub fn default_id(&self) -> Option<&str> {
        self.groups.first().map(|g| g.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One navigation history entry of a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub title: String,
    pub url: String,
}

impl UrlEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    pub group_id: String,
    pub is_pinned: bool,
    /// Back/forward history, never empty.
    pub urls: Vec<UrlEntry>,
    /// Set when the backup carried no group data for this tab.
    pub default_group: bool,
}

impl TabRecord {
    pub fn is_multi_entry(&self) -> bool {
        self.urls.len() > 1
    }

    pub fn primary(&self) -> Option<&UrlEntry> {
        self.urls.first()
    }
}

/// Tabs sharing one group id, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTabs {
    pub group_id: String,
    pub tabs: Vec<TabRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub groups: TabGroups,
    pub grouped: Vec<GroupedTabs>,
}

impl Session {
    pub fn tab_count(&self) -> usize {
        self.grouped.iter().map(|g| g.tabs.len()).sum()
    }

    pub fn default_group_tab_count(&self) -> usize {
        self.grouped
            .iter()
            .flat_map(|g| g.tabs.iter())
            .filter(|t| t.default_group)
            .count()
    }
}
