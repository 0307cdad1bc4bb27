//! Viewport layer - virtualization of variable-height rows
//!
//! Pure functions that decide which contiguous slice of rows fits in a
//! terminal window of fixed height. Nothing here holds state between
//! calls: the caller supplies the full row list, a cursor and a height
//! callback every time its input changes.
//!
//! # Module Structure
//!
//! - `cumulative`: CumulativeHeights - prefix sums over row heights
//! - `list`: list viewport that keeps a selected item on screen
//! - `text`: text viewport driven by a scroll offset, plus ScrollableText
//! - `wrap`: wrap-width math and text preparation for height estimation
//! - `types`: ViewportDimensions

pub mod cumulative;
pub mod list;
pub mod text;
pub mod types;
pub mod wrap;

pub use list::{calculate_list_viewport, ListViewport};
pub use text::{calculate_text_viewport, ScrollableText, TextViewport};
pub use types::ViewportDimensions;
