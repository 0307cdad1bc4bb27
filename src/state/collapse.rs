//! Per-row expand/collapse flags.
//!
//! Rows start collapsed. Only expanded ids are stored, so a freshly loaded
//! row set needs no initialization pass.

use std::collections::HashSet;

use crate::model::{row_height, LogRow, RowId};

/// Expanded rows of the loaded log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseStates {
    expanded: HashSet<RowId>,
}

impl CollapseStates {
    /// Whether row `id` is collapsed.
    pub fn is_collapsed(&self, id: RowId) -> bool {
        !self.expanded.contains(&id)
    }

    /// Flip `row` between collapsed and expanded.
    ///
    /// Rows without content have nothing to expand and are left alone.
    /// Returns true when the state changed.
    pub fn toggle(&mut self, row: &LogRow) -> bool {
        if !row.has_content() {
            return false;
        }
        if !self.expanded.remove(&row.id) {
            self.expanded.insert(row.id);
        }
        true
    }

    /// Expand every row in `rows`.
    pub fn expand_all<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a LogRow>,
    {
        self.expanded.extend(rows.into_iter().map(|row| row.id));
    }

    /// Collapse every row in `rows`.
    pub fn collapse_all<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a LogRow>,
    {
        for row in rows {
            self.expanded.remove(&row.id);
        }
    }

    /// Collapse everything; used when the row set is replaced.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Session-list height of `row` under the current flags.
    pub fn height_of(&self, row: &LogRow, preview_lines: usize) -> usize {
        row_height(row, self.is_collapsed(row.id), preview_lines)
    }
}
