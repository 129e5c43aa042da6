//! HTML link collection rendering

use crate::error::{ExportError, Result};
use crate::models::{Session, TabRecord, UrlEntry};
use crate::utils::escape_html;

/// Appended to the primary title of a pinned tab.
pub const PINNED_SUFFIX: &str = " (pinned)";

/// How a tab's history entries are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryLayout {
    /// Multi-entry tabs show the first title as plain text followed by every
    /// entry as a link; single-entry tabs drop the pin marker.
    #[default]
    Legacy,
    /// The first entry is always a link with the pin marker; later history
    /// entries go in a nested list.
    Corrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape_html: bool,
    pub layout: EntryLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            layout: EntryLayout::Legacy,
        }
    }
}

impl RenderOptions {
    /// Byte-for-byte output of the unescaped legacy format.
    pub fn raw() -> Self {
        Self {
            escape_html: false,
            layout: EntryLayout::Legacy,
        }
    }
}

pub fn render_html(session: &Session, options: &RenderOptions) -> Result<String> {
    let mut html = String::new();
    let text = |s: &str| -> String {
        if options.escape_html {
            escape_html(s)
        } else {
            s.to_string()
        }
    };

    html.push_str("<html><body>");
    for group in &session.grouped {
        let title = session.groups.title(&group.group_id).ok_or_else(|| {
            ExportError::missing(format!(
                "tab group {} is referenced by a tab but not declared",
                group.group_id
            ))
        })?;

        html.push_str(&format!("<h1>{}</h1><ul>", text(title)));
        for tab in &group.tabs {
            html.push_str("<li>");
            match options.layout {
                EntryLayout::Legacy => push_legacy_tab(&mut html, tab, &text),
                EntryLayout::Corrected => push_corrected_tab(&mut html, tab, &text),
            }
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html.push_str("</body></html>");

    Ok(html)
}

fn push_link(html: &mut String, entry: &UrlEntry, text: &impl Fn(&str) -> String) {
    html.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        text(&entry.url),
        text(&entry.title)
    ));
}

fn push_legacy_tab(html: &mut String, tab: &TabRecord, text: &impl Fn(&str) -> String) {
    if tab.is_multi_entry() {
        if let Some(first) = tab.primary() {
            html.push_str(&text(&first.title));
        }
        if tab.is_pinned {
            html.push_str(PINNED_SUFFIX);
        }
        html.push_str("<ul>");
        for entry in &tab.urls {
            html.push_str("<li>");
            push_link(html, entry, text);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    } else {
        for entry in &tab.urls {
            push_link(html, entry, text);
        }
    }
}

fn push_corrected_tab(html: &mut String, tab: &TabRecord, text: &impl Fn(&str) -> String) {
    let Some((first, history)) = tab.urls.split_first() else {
        return;
    };

    push_link(html, first, text);
    if tab.is_pinned {
        html.push_str(PINNED_SUFFIX);
    }
    if !history.is_empty() {
        html.push_str("<ul>");
        for entry in history {
            html.push_str("<li>");
            push_link(html, entry, text);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
}
