//! Selection cursor for the session list.
//!
//! The cursor is an index into the filtered row sequence. It survives
//! between viewport computations; the viewport itself does not.

use tracing::debug;

use crate::viewport::{calculate_list_viewport, ListViewport};

use super::navigation::{
    find_next_selectable, find_nth_selectable, first_selectable, last_selectable, Direction,
    Selectable,
};

/// Selected row index in the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
}

impl ListCursor {
    /// Cursor at `selected`. Call [`ListCursor::reconcile`] before trusting it.
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }

    /// Currently selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move one selectable row.
    pub fn step<T: Selectable>(&mut self, rows: &[T], direction: Direction) {
        self.selected = find_next_selectable(rows, self.selected, direction);
    }

    /// Move up to `n` selectable rows.
    pub fn page<T: Selectable>(&mut self, rows: &[T], direction: Direction, n: usize) {
        self.selected = find_nth_selectable(rows, self.selected, direction, n);
    }

    /// Jump to the first selectable row. Stays put if there is none.
    pub fn to_top<T: Selectable>(&mut self, rows: &[T]) {
        if let Some(index) = first_selectable(rows) {
            self.selected = index;
        }
    }

    /// Jump to the last selectable row. Stays put if there is none.
    pub fn to_bottom<T: Selectable>(&mut self, rows: &[T]) {
        if let Some(index) = last_selectable(rows) {
            self.selected = index;
        }
    }

    /// Bring the cursor back onto a valid row after `rows` changed.
    ///
    /// Clamps into range, then moves to the nearest selectable row,
    /// looking downward first. Returns true when the cursor moved.
    pub fn reconcile<T: Selectable>(&mut self, rows: &[T]) -> bool {
        let before = self.selected;
        let clamped = before.min(rows.len().saturating_sub(1));
        let settled = match rows.get(clamped) {
            Some(row) if !row.is_selectable() => {
                let down = find_next_selectable(rows, clamped, Direction::Down);
                if down != clamped {
                    down
                } else {
                    find_next_selectable(rows, clamped, Direction::Up)
                }
            }
            _ => clamped,
        };
        self.selected = settled;

        if settled != before {
            debug!(before, after = settled, rows = rows.len(), "selection re-derived");
        }
        settled != before
    }

    /// Visible window of `rows` around the cursor.
    pub fn viewport<'a, T, F>(
        &self,
        rows: &'a [T],
        height: usize,
        item_height: F,
        center_selected: bool,
    ) -> ListViewport<'a, T>
    where
        F: FnMut(&T, usize) -> usize,
    {
        calculate_list_viewport(rows, self.selected, height, item_height, center_selected)
    }
}
