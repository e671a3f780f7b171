//! Autogeneration banner for Markdown outputs

use crate::diff::AUTOGEN_MARKER;
use chrono::{DateTime, SecondsFormat, Utc};

/// Whether a template with this logical name gets a banner
///
/// Only Markdown templates (name ending in `.md`, any case) do.
pub fn wants_banner(template_name: &str) -> bool {
    template_name.to_lowercase().ends_with(".md")
}

/// Banner block for `template_name`, if it gets one
///
/// The block is a Markdown comment line starting with [`AUTOGEN_MARKER`],
/// terminated by a line break.
pub fn banner_for(template_name: &str, timestamp: DateTime<Utc>) -> Option<String> {
    wants_banner(template_name).then(|| markdown_banner(timestamp))
}

/// Markdown comment line stamped with `timestamp`
pub fn markdown_banner(timestamp: DateTime<Utc>) -> String {
    format!(
        "{} on {}. Do not edit this file manually; edit its template instead.)\n",
        AUTOGEN_MARKER,
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
