//! Scroll offset for the detail pane.
//!
//! Line and page movement only adjust the stored offset. The upper bound
//! is unknown until the viewport is computed, so the offset is clamped to
//! `max_scroll_offset` there and written back.

use tracing::debug;

use crate::viewport::{ScrollableText, TextViewport, ViewportDimensions};

/// Top line of the detail pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextScroll {
    offset: usize,
}

impl TextScroll {
    /// Current offset. May exceed the maximum until the next viewport.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll up `lines`.
    pub fn up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down `lines`.
    pub fn down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
    }

    /// Jump to the first line.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump to the last page. Resolved at the next viewport computation.
    pub fn to_bottom(&mut self) {
        self.offset = usize::MAX;
    }

    /// Back to the top; used when a different row's detail is shown.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Compute the viewport and store the clamped offset.
    pub fn viewport<'a>(
        &mut self,
        text: &'a ScrollableText,
        dims: ViewportDimensions,
        padding: usize,
    ) -> TextViewport<'a, String> {
        let viewport = text.viewport(self.offset, dims, padding);
        self.settle(viewport.start_line_index);
        viewport
    }

    /// Store `start` as the offset after an external viewport computation.
    pub fn settle(&mut self, start: usize) {
        if start != self.offset {
            debug!(requested = self.offset, clamped = start, "scroll offset clamped");
            self.offset = start;
        }
    }
}
