//! Row filtering: per-category toggles plus a `field:value` search query.
//!
//! The filtered row sequence is what navigation and the list viewport
//! operate on. Any change here replaces that sequence, so callers must
//! reconcile their cursor afterwards.

use super::log_row::{LogRow, RowCategory};

/// Which row categories are shown. All are shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFilter {
    user: bool,
    assistant: bool,
    tool: bool,
    thinking: bool,
    subagent: bool,
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl KindFilter {
    /// Every category enabled.
    pub fn all() -> Self {
        Self {
            user: true,
            assistant: true,
            tool: true,
            thinking: true,
            subagent: true,
        }
    }

    fn slot(&mut self, category: RowCategory) -> &mut bool {
        match category {
            RowCategory::User => &mut self.user,
            RowCategory::Assistant => &mut self.assistant,
            RowCategory::Tool => &mut self.tool,
            RowCategory::Thinking => &mut self.thinking,
            RowCategory::Subagent => &mut self.subagent,
        }
    }

    /// Whether `category` is shown.
    pub fn is_enabled(&self, category: RowCategory) -> bool {
        match category {
            RowCategory::User => self.user,
            RowCategory::Assistant => self.assistant,
            RowCategory::Tool => self.tool,
            RowCategory::Thinking => self.thinking,
            RowCategory::Subagent => self.subagent,
        }
    }

    /// Show or hide `category`.
    pub fn set(&mut self, category: RowCategory, enabled: bool) {
        *self.slot(category) = enabled;
    }

    /// Flip `category`.
    pub fn toggle(&mut self, category: RowCategory) {
        let slot = self.slot(category);
        *slot = !*slot;
    }

    /// True when every category is shown.
    pub fn is_all(&self) -> bool {
        RowCategory::ALL.iter().all(|c| self.is_enabled(*c))
    }

    /// Names of the enabled categories, in hotkey order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        RowCategory::ALL
            .iter()
            .filter(|c| self.is_enabled(**c))
            .map(RowCategory::name)
            .collect()
    }

    /// Whether `row` passes the category toggles.
    pub fn allows(&self, row: &LogRow) -> bool {
        self.is_enabled(row.kind.category())
    }
}

/// Field a search term applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchField {
    /// Row category name (`type:`).
    Type,
    /// Text content (`content:`).
    Content,
    /// Sub-agent id (`agent:`).
    Agent,
    /// Tool name (`tool:`).
    Tool,
    /// Any other field name; matches every row.
    Unknown(String),
}

impl SearchField {
    fn parse(name: &str) -> Self {
        match name {
            "type" => SearchField::Type,
            "content" => SearchField::Content,
            "agent" => SearchField::Agent,
            "tool" => SearchField::Tool,
            other => SearchField::Unknown(other.to_string()),
        }
    }
}

/// One `field:value` term, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// Field to match.
    pub field: SearchField,
    /// Case-folded substring to look for.
    pub value: String,
}

impl SearchTerm {
    /// Case-insensitive substring match against the term's field.
    pub fn matches(&self, row: &LogRow) -> bool {
        let haystack = match &self.field {
            SearchField::Type => Some(row.kind.category().name()),
            SearchField::Content => row.content.as_deref(),
            SearchField::Agent => row.agent_id.as_deref(),
            SearchField::Tool => row.tool_name.as_deref(),
            SearchField::Unknown(_) => return true,
        };
        haystack.is_some_and(|text| text.to_lowercase().contains(&self.value))
    }
}

/// Parse a search query into terms.
///
/// Whitespace-separated tokens of the form `field:value` become terms;
/// everything after the first `:` is the value. Tokens without a field
/// name, without a value, or with non-word characters in the field name
/// are ignored.
///
/// # Examples
///
/// ```
/// # use cclogview::model::filter::{parse_search_query, SearchField};
/// let terms = parse_search_query("type:Tool  stray tool:bash");
/// assert_eq!(terms.len(), 2);
/// assert_eq!(terms[0].field, SearchField::Type);
/// assert_eq!(terms[0].value, "tool");
/// ```
pub fn parse_search_query(query: &str) -> Vec<SearchTerm> {
    query
        .split_whitespace()
        .filter_map(|token| {
            let (field, value) = token.split_once(':')?;
            let is_word = |c: char| c.is_alphanumeric() || c == '_';
            if field.is_empty() || value.is_empty() || !field.chars().all(is_word) {
                return None;
            }
            Some(SearchTerm {
                field: SearchField::parse(&field.to_lowercase()),
                value: value.to_lowercase(),
            })
        })
        .collect()
}

/// Category toggles and search terms applied together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowFilter {
    /// Category toggles.
    pub kinds: KindFilter,
    /// Active search terms; all must match.
    pub search: Vec<SearchTerm>,
}

impl RowFilter {
    /// Replace the active search with `query`.
    pub fn set_search(&mut self, query: &str) {
        self.search = parse_search_query(query);
    }

    /// Drop the active search.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Whether `row` is part of the filtered sequence.
    pub fn matches(&self, row: &LogRow) -> bool {
        self.kinds.allows(row) && self.search.iter().all(|term| term.matches(row))
    }

    /// Filtered view over `rows`, preserving order.
    pub fn apply<'a>(&self, rows: &'a [LogRow]) -> Vec<&'a LogRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}
