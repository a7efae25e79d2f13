use anyhow::Result;

use super::SuiteEntry;

/// Serializes entries as a pretty-printed JSON array, two-space indented.
///
/// An empty scan is an empty array, never null; the VS Code adapter consuming
/// this output relies on that.
pub fn to_json(entries: &[SuiteEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
