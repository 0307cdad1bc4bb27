//! UI state holders (pure).
//!
//! Cursors, scroll offsets and flags that live between viewport
//! computations. All transitions are plain methods testable without a
//! terminal.

pub mod agent_view;
pub mod collapse;
pub mod list_cursor;
pub mod navigation;
pub mod text_scroll;

// Re-export for convenience
pub use agent_view::{drill_target, AgentView};
pub use collapse::CollapseStates;
pub use list_cursor::ListCursor;
pub use navigation::{
    find_next_selectable, find_nth_selectable, first_selectable, last_selectable, Direction,
    Selectable,
};
pub use text_scroll::TextScroll;
