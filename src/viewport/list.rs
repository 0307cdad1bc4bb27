//! List viewport calculation
//!
//! Decides which contiguous slice of a variable-height item list fits in a
//! fixed number of terminal rows while keeping the selected item on screen.
//!
//! # Centering
//!
//! By default the selected item is placed in the vertical middle of the
//! viewport. The ideal top edge is
//! `selected_start - floor((height - selected_height) / 2)`; with an odd
//! amount of spare space the extra row goes below the selection. When there
//! is not enough content above (top edge <= 0) the window is pinned to the
//! first item, and when there is not enough below it is pinned to the last.
//!
//! # Overflow counts
//!
//! `rows_above` / `rows_below` count hidden *items*, not terminal rows.

use std::ops::RangeInclusive;

use tracing::trace;

use super::cumulative::CumulativeHeights;

/// Result of a list viewport calculation.
///
/// # Invariants
/// - `end_index` is `None` iff the input list was empty
/// - `start_index <= selected <= end_index` for the (clamped) selection
/// - `rows_above == start_index`
/// - `rows_below == len - end_index - 1`
#[derive(Debug, PartialEq, Eq)]
pub struct ListViewport<'a, T> {
    /// Index of the first visible item.
    pub start_index: usize,
    /// Index of the last visible item (inclusive). `None` for an empty list.
    pub end_index: Option<usize>,
    /// Slice of `items` to render.
    pub visible_items: &'a [T],
    /// Number of items hidden above the viewport.
    pub rows_above: usize,
    /// Number of items hidden below the viewport.
    pub rows_below: usize,
}

impl<T> Clone for ListViewport<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListViewport<'_, T> {}

impl<'a, T> ListViewport<'a, T> {
    fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: None,
            visible_items: &[],
            rows_above: 0,
            rows_below: 0,
        }
    }

    fn window(items: &'a [T], start: usize, end: usize) -> Self {
        Self {
            start_index: start,
            end_index: Some(end),
            visible_items: &items[start..=end],
            rows_above: start,
            rows_below: items.len() - end - 1,
        }
    }

    /// Visible item indices, or `None` when nothing is visible.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        self.end_index.map(|end| self.start_index..=end)
    }

    /// Check whether item `index` is rendered.
    pub fn contains(&self, index: usize) -> bool {
        self.range().is_some_and(|range| range.contains(&index))
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.visible_items.len()
    }

    /// True when no items are visible.
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    /// Whether a "more above" indicator should be drawn.
    pub fn has_items_above(&self) -> bool {
        self.rows_above > 0
    }

    /// Whether a "more below" indicator should be drawn.
    pub fn has_items_below(&self) -> bool {
        self.rows_below > 0
    }
}

/// Compute the visible window of `items` for the given selection.
///
/// # Arguments
/// - `items`: full (filtered) item list
/// - `selected_index`: selection cursor, clamped into `[0, len - 1]`
/// - `height`: available rows; `0` means unbounded
/// - `item_height`: rendered height of `(item, index)` in rows
/// - `center_selected`: center the selection when content allows
///
/// An item taller than the whole viewport is still returned on its own
/// when it is selected; the renderer clips it.
///
/// # Examples
///
/// ```
/// # use cclogview::viewport::list::calculate_list_viewport;
/// let items = ["a", "b", "c", "d", "e"];
/// let viewport = calculate_list_viewport(&items, 0, 3, |_, _| 1, true);
/// assert_eq!(viewport.start_index, 0);
/// assert_eq!(viewport.end_index, Some(2));
/// assert_eq!(viewport.rows_below, 2);
/// ```
pub fn calculate_list_viewport<'a, T, F>(
    items: &'a [T],
    selected_index: usize,
    height: usize,
    mut item_height: F,
    center_selected: bool,
) -> ListViewport<'a, T>
where
    F: FnMut(&T, usize) -> usize,
{
    if items.is_empty() {
        return ListViewport::empty();
    }

    let cumulative = CumulativeHeights::from_heights(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| item_height(item, index)),
    );
    let last = items.len() - 1;

    if height == 0 || cumulative.total() <= height {
        return ListViewport::window(items, 0, last);
    }

    let selected = selected_index.min(last);

    let (start, end) = if center_selected {
        centered_window(&cumulative, selected, height)
    } else {
        anchored_window(&cumulative, selected, height)
    };

    // Tall neighbours can push the computed window off the selection.
    let (start, end) = if (start..=end).contains(&selected) {
        (start, end)
    } else {
        grow_around(&cumulative, selected, height)
    };

    trace!(
        selected,
        height,
        start,
        end,
        total_height = cumulative.total(),
        "list viewport"
    );

    ListViewport::window(items, start, end)
}

fn centered_window(
    cumulative: &CumulativeHeights,
    selected: usize,
    height: usize,
) -> (usize, usize) {
    let last = cumulative.len() - 1;
    let selected_height = cumulative.height_of(selected);
    let selected_start = cumulative.start_of(selected);

    // Floor division: odd spare space leaves the extra row below.
    // `None` means the ideal top lies above the first row.
    let target_top = if height >= selected_height {
        selected_start.checked_sub((height - selected_height) / 2)
    } else {
        Some(selected_start.saturating_add((selected_height - height).div_ceil(2)))
    };

    match target_top {
        None | Some(0) => (0, cumulative.fill_forward(0, height)),
        Some(top) if top.saturating_add(height) >= cumulative.total() => {
            (cumulative.fill_backward(last, height), last)
        }
        Some(top) => {
            let start = cumulative.row_at(top).unwrap_or(selected);
            (start, cumulative.fill_forward(start, height))
        }
    }
}

fn anchored_window(
    cumulative: &CumulativeHeights,
    selected: usize,
    height: usize,
) -> (usize, usize) {
    let last = cumulative.len() - 1;
    if selected == 0 {
        (0, cumulative.fill_forward(0, height))
    } else if selected == last {
        (cumulative.fill_backward(last, height), last)
    } else {
        grow_around(cumulative, selected, height)
    }
}

/// Expand from `selected` downward first, then upward.
fn grow_around(cumulative: &CumulativeHeights, selected: usize, height: usize) -> (usize, usize) {
    let last = cumulative.len() - 1;
    let mut start = selected;
    let mut end = selected;
    let mut used = cumulative.height_of(selected);

    while end < last && used.saturating_add(cumulative.height_of(end + 1)) <= height {
        end += 1;
        used += cumulative.height_of(end);
    }
    while start > 0 && used.saturating_add(cumulative.height_of(start - 1)) <= height {
        start -= 1;
        used += cumulative.height_of(start);
    }
    (start, end)
}
