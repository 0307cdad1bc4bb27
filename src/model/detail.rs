//! Text shown in the detail pane for a selected row.

use serde_json::Value;

use crate::viewport::ScrollableText;

use super::log_row::{LogRow, RowKind};

/// Raw detail text of `row`.
///
/// Tool rows with an input payload show the payload as pretty-printed
/// JSON with two-space indentation. Tool result rows show a string result
/// verbatim and any other result as pretty JSON. Every other row shows its
/// content, or nothing.
///
/// # Examples
///
/// ```
/// # use cclogview::model::detail::detail_text;
/// # use cclogview::model::log_row::{LogRow, RowKind};
/// let row = LogRow::new(1, RowKind::Tool)
///     .with_tool("Read", serde_json::json!({"file_path": "/tmp/a"}));
/// assert_eq!(detail_text(&row), "{\n  \"file_path\": \"/tmp/a\"\n}");
/// ```
pub fn detail_text(row: &LogRow) -> String {
    match (&row.kind, &row.tool_input, &row.tool_result) {
        (RowKind::Tool, Some(input), _) => pretty_json(input),
        (RowKind::ToolResult, _, Some(Value::String(text))) => text.clone(),
        (RowKind::ToolResult, _, Some(result)) => pretty_json(result),
        _ => row.content.clone().unwrap_or_default(),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Detail text of `row`, split and expanded for the scrollable pane.
pub fn detail_view(row: &LogRow, tab_width: usize) -> ScrollableText {
    ScrollableText::new(&detail_text(row), tab_width)
}
