//! Domain model types (pure).
//!
//! Rows of a loaded session, how tall they render, which of them survive
//! the active filter, and what the detail pane shows for one of them.

pub mod detail;
pub mod filter;
pub mod log_row;

pub use detail::{detail_text, detail_view};
pub use filter::{parse_search_query, KindFilter, RowFilter, SearchField, SearchTerm};
pub use log_row::{row_height, LogRow, RowCategory, RowId, RowKind, DEFAULT_PREVIEW_LINES};
