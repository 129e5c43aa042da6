//! Report generation

pub mod html;

pub use html::{EntryLayout, RenderOptions, PINNED_SUFFIX};

use crate::error::Result;
use crate::models::Session;

pub fn generate_report(session: &Session, options: &RenderOptions) -> Result<String> {
    html::render_html(session, options)
}
