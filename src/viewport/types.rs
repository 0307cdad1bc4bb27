//! Core viewport newtypes

/// Viewport dimensions in terminal cells.
///
/// Supplied by the caller from the current terminal size so the
/// calculators never query the terminal themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Shrink by a fixed chrome allowance (borders, titles, help lines),
    /// saturating at zero.
    pub fn inset(&self, columns: u16, rows: u16) -> Self {
        Self {
            width: self.width.saturating_sub(columns),
            height: self.height.saturating_sub(rows),
        }
    }
}
