//! Log rows as shown in the session list.
//!
//! A `LogRow` is one parsed transcript entry. Its rendered height is not a
//! property of the row: it depends on the collapse state held by the
//! caller, so it is computed by [`row_height`] on demand.

use std::fmt;

use serde::Deserialize;

/// Lines of content shown under an expanded row before the `...` marker.
pub const DEFAULT_PREVIEW_LINES: usize = 5;

/// Identifier of a row within one loaded log (session or agent trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    /// Create a row id from its sequence number.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw sequence number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a row represents.
///
/// A sub-agent invocation is bracketed by a `SubagentStart` row and a
/// `SubagentEnd` row. The end row only closes the bracket and carries no
/// content of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Prompt typed by the user.
    User,
    /// Assistant text reply.
    Assistant,
    /// Tool invocation.
    Tool,
    /// Output returned by a tool.
    ToolResult,
    /// Assistant thinking block.
    Thinking,
    /// A sub-agent was launched.
    SubagentStart,
    /// A sub-agent finished.
    SubagentEnd,
}

/// Filter category of a row kind. Sub-agent start and end share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowCategory {
    /// User rows.
    User,
    /// Assistant rows.
    Assistant,
    /// Tool invocation and tool result rows.
    Tool,
    /// Thinking rows.
    Thinking,
    /// Sub-agent start and end rows.
    Subagent,
}

impl RowCategory {
    /// All categories in hotkey order.
    pub const ALL: [RowCategory; 5] = [
        RowCategory::User,
        RowCategory::Assistant,
        RowCategory::Tool,
        RowCategory::Thinking,
        RowCategory::Subagent,
    ];

    /// Category bound to the digit hotkeys `1`-`5`.
    pub fn from_hotkey(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Lowercase name, as matched by `type:` search terms.
    pub fn name(&self) -> &'static str {
        match self {
            RowCategory::User => "user",
            RowCategory::Assistant => "assistant",
            RowCategory::Tool => "tool",
            RowCategory::Thinking => "thinking",
            RowCategory::Subagent => "subagent",
        }
    }
}

impl RowKind {
    /// Filter category for this kind.
    pub fn category(&self) -> RowCategory {
        match self {
            RowKind::User => RowCategory::User,
            RowKind::Assistant => RowCategory::Assistant,
            RowKind::Tool | RowKind::ToolResult => RowCategory::Tool,
            RowKind::Thinking => RowCategory::Thinking,
            RowKind::SubagentStart | RowKind::SubagentEnd => RowCategory::Subagent,
        }
    }
}

/// One entry of a session or sub-agent trace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogRow {
    /// Sequence id within the loaded log.
    pub id: RowId,
    /// Row kind.
    pub kind: RowKind,
    /// Text content, if any.
    #[serde(default)]
    pub content: Option<String>,
    /// Sub-agent id for sub-agent rows.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Tool name for tool rows.
    #[serde(default)]
    pub tool_name: Option<String>,
    /// Tool input payload for tool rows.
    #[serde(default)]
    pub tool_input: Option<serde_json::Value>,
    /// Tool output payload for tool result rows: a string or structured JSON.
    #[serde(default)]
    pub tool_result: Option<serde_json::Value>,
    /// Display timestamp.
    #[serde(default)]
    pub timestamp: String,
}

impl LogRow {
    /// Create a row with no content.
    pub fn new(id: u64, kind: RowKind) -> Self {
        Self {
            id: RowId::new(id),
            kind,
            content: None,
            agent_id: None,
            tool_name: None,
            tool_input: None,
            tool_result: None,
            timestamp: String::new(),
        }
    }

    /// Set the text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the sub-agent id.
    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    /// Set the tool name and input payload.
    pub fn with_tool(mut self, name: impl Into<String>, input: serde_json::Value) -> Self {
        self.tool_name = Some(name.into());
        self.tool_input = Some(input);
        self
    }

    /// Set the tool output payload.
    pub fn with_tool_result(mut self, result: impl Into<serde_json::Value>) -> Self {
        self.tool_result = Some(result.into());
        self
    }

    /// Set the display timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// True when the row has non-empty text content to expand.
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// True for the marker row that closes a sub-agent bracket.
    pub fn is_subagent_end(&self) -> bool {
        self.kind == RowKind::SubagentEnd
    }
}

/// Rendered height of a row in the session list.
///
/// - sub-agent end marker: 1
/// - sub-agent start: title, plus one quoted content line when expanded
/// - other rows: title, plus up to `preview_lines` content lines and a
///   `...` line when the content is longer
///
/// Collapsed rows and rows without content are a single title line.
///
/// # Examples
///
/// ```
/// # use cclogview::model::log_row::{row_height, LogRow, RowKind};
/// let row = LogRow::new(1, RowKind::Assistant).with_content("a\nb\nc");
/// assert_eq!(row_height(&row, true, 5), 1);
/// assert_eq!(row_height(&row, false, 5), 4);
/// assert_eq!(row_height(&row, false, 2), 4);
/// ```
pub fn row_height(row: &LogRow, collapsed: bool, preview_lines: usize) -> usize {
    if row.is_subagent_end() {
        return 1;
    }
    let content = match row.content.as_deref() {
        Some(content) if !content.is_empty() && !collapsed => content,
        _ => return 1,
    };
    if row.kind == RowKind::SubagentStart {
        return 2;
    }

    let content_lines = content.split('\n').count();
    let shown = content_lines.min(preview_lines);
    let more_marker = usize::from(content_lines > preview_lines);
    1 + shown + more_marker
}
