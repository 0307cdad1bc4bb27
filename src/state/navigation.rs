//! Selection-aware navigation over the filtered row sequence.
//!
//! Some rows exist only to close a visual bracket and cannot hold the
//! cursor. These helpers walk past them. They operate on the full filtered
//! sequence, never on the visible slice.

use crate::model::LogRow;

/// Whether a row can hold the selection cursor.
pub trait Selectable {
    /// Defaults to selectable.
    fn is_selectable(&self) -> bool {
        true
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn is_selectable(&self) -> bool {
        (**self).is_selectable()
    }
}

impl Selectable for LogRow {
    fn is_selectable(&self) -> bool {
        !self.is_subagent_end()
    }
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0.
    Up,
    /// Toward the last row.
    Down,
}

impl Direction {
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        }
    }
}

/// Next selectable row from `index` in `direction`.
///
/// Returns `index` unchanged when no selectable row lies that way.
///
/// # Examples
///
/// ```
/// # use cclogview::state::navigation::{find_next_selectable, Direction, Selectable};
/// struct Row(bool);
/// impl Selectable for Row {
///     fn is_selectable(&self) -> bool { self.0 }
/// }
/// let rows = [Row(true), Row(false), Row(true), Row(false)];
/// assert_eq!(find_next_selectable(&rows, 0, Direction::Down), 2);
/// assert_eq!(find_next_selectable(&rows, 2, Direction::Down), 2);
/// assert_eq!(find_next_selectable(&rows, 2, Direction::Up), 0);
/// ```
pub fn find_next_selectable<T: Selectable>(
    rows: &[T],
    index: usize,
    direction: Direction,
) -> usize {
    let mut candidate = index;
    while let Some(next) = direction.step(candidate) {
        let Some(row) = rows.get(next) else {
            break;
        };
        if row.is_selectable() {
            return next;
        }
        candidate = next;
    }
    index
}

/// Apply [`find_next_selectable`] up to `n` times, stopping early at a
/// boundary.
pub fn find_nth_selectable<T: Selectable>(
    rows: &[T],
    index: usize,
    direction: Direction,
    n: usize,
) -> usize {
    let mut current = index;
    for _ in 0..n {
        let next = find_next_selectable(rows, current, direction);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Index of the first selectable row.
pub fn first_selectable<T: Selectable>(rows: &[T]) -> Option<usize> {
    rows.iter().position(|row| row.is_selectable())
}

/// Index of the last selectable row.
pub fn last_selectable<T: Selectable>(rows: &[T]) -> Option<usize> {
    rows.iter().rposition(|row| row.is_selectable())
}
