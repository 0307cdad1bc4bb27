//! Text viewport calculation
//!
//! Unlike the list viewport, the cursor here is a scroll offset: the line
//! that should appear at the top. The window always starts exactly at the
//! (clamped) offset and fills downward. Overflow counts are expressed in
//! rows, because a wrapped line occupies several.

use std::ops::RangeInclusive;

use tracing::trace;

use super::cumulative::CumulativeHeights;
use super::types::ViewportDimensions;
use super::wrap::{prepare_text, split_lines, LineWrap};

/// Result of a text viewport calculation.
///
/// # Invariants
/// - `rows_above + rows(visible_lines) + rows_below == rows(all lines)`
/// - `start_line_index <= max_scroll_offset`
/// - `end_line_index` is `None` iff `total_lines == 0`
#[derive(Debug, PartialEq, Eq)]
pub struct TextViewport<'a, T> {
    /// Index of the first visible line.
    pub start_line_index: usize,
    /// Index of the last visible line (inclusive). `None` for empty text.
    pub end_line_index: Option<usize>,
    /// Slice of lines to render.
    pub visible_lines: &'a [T],
    /// Total number of lines.
    pub total_lines: usize,
    /// Rows hidden above the viewport.
    pub rows_above: usize,
    /// Rows hidden below the viewport.
    pub rows_below: usize,
    /// Largest scroll offset that does not leave blank rows at the bottom.
    pub max_scroll_offset: usize,
}

impl<T> Clone for TextViewport<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TextViewport<'_, T> {}

impl<T> TextViewport<'_, T> {
    /// Visible line indices, or `None` for empty text.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        self.end_line_index.map(|end| self.start_line_index..=end)
    }

    /// Whether a "more above" indicator should be drawn.
    pub fn has_lines_above(&self) -> bool {
        self.rows_above > 0
    }

    /// Whether a "more below" indicator should be drawn.
    pub fn has_lines_below(&self) -> bool {
        self.rows_below > 0
    }
}

/// Compute the visible window of `lines` starting at `scroll_offset`.
///
/// `scroll_offset` is clamped to `[0, max_scroll_offset]`, so asking for
/// any offset past the maximum yields the same window as the maximum.
/// `height == 0` means unbounded. The first visible line is always
/// included, even when it alone is taller than `height`.
///
/// # Examples
///
/// ```
/// # use cclogview::viewport::text::calculate_text_viewport;
/// let heights = [1, 3, 1, 2];
/// let lines = ["a", "b", "c", "d"];
/// let viewport = calculate_text_viewport(&lines, 1, 4, |_, i| heights[i]);
/// assert_eq!(viewport.visible_lines, &["b", "c"]);
/// assert_eq!(viewport.rows_above, 1);
/// assert_eq!(viewport.rows_below, 2);
/// assert_eq!(viewport.max_scroll_offset, 1);
/// ```
pub fn calculate_text_viewport<'a, T, F>(
    lines: &'a [T],
    scroll_offset: usize,
    height: usize,
    mut line_height: F,
) -> TextViewport<'a, T>
where
    F: FnMut(&T, usize) -> usize,
{
    if lines.is_empty() {
        return TextViewport {
            start_line_index: 0,
            end_line_index: None,
            visible_lines: &[],
            total_lines: 0,
            rows_above: 0,
            rows_below: 0,
            max_scroll_offset: 0,
        };
    }

    let cumulative = CumulativeHeights::from_heights(
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| line_height(line, index)),
    );
    let last = lines.len() - 1;

    if height == 0 || cumulative.total() <= height {
        return TextViewport {
            start_line_index: 0,
            end_line_index: Some(last),
            visible_lines: lines,
            total_lines: lines.len(),
            rows_above: 0,
            rows_below: 0,
            max_scroll_offset: 0,
        };
    }

    let max_scroll_offset = cumulative.last_filling_start(height);
    let start = scroll_offset.min(max_scroll_offset);
    let end = cumulative.fill_forward(start, height);

    trace!(
        scroll_offset,
        start,
        end,
        max_scroll_offset,
        total_height = cumulative.total(),
        "text viewport"
    );

    TextViewport {
        start_line_index: start,
        end_line_index: Some(end),
        visible_lines: &lines[start..=end],
        total_lines: lines.len(),
        rows_above: cumulative.height_before(start),
        rows_below: cumulative.height_after(end),
        max_scroll_offset,
    }
}

/// A block of text prepared for scrolling in a numbered, wrapped pane.
///
/// Owns the split lines so repeated viewport computations during a scroll
/// session reuse them; build a new one whenever the text changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollableText {
    lines: Vec<String>,
}

impl ScrollableText {
    /// Expand tabs and escaped newlines in `text`, then split it into lines.
    pub fn new(text: &str, tab_width: usize) -> Self {
        let prepared = prepare_text(text, tab_width);
        Self::from_lines(split_lines(&prepared).into_iter().map(str::to_owned))
    }

    /// Wrap lines that are already split and expanded.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Wrap settings for a pane `width` columns wide.
    pub fn line_wrap(&self, width: usize, padding: usize) -> LineWrap {
        LineWrap::for_pane(width, self.lines.len(), padding)
    }

    /// Compute the viewport with the default wrap-height measurement.
    pub fn viewport(
        &self,
        scroll_offset: usize,
        dims: ViewportDimensions,
        padding: usize,
    ) -> TextViewport<'_, String> {
        let wrap = self.line_wrap(dims.width as usize, padding);
        calculate_text_viewport(&self.lines, scroll_offset, dims.height as usize, |line, _| {
            wrap.height_of(line)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIABLE: [usize; 4] = [1, 3, 1, 2];
    const LETTERS: [&str; 4] = ["a", "b", "c", "d"];

    fn unit(_: &&str, _: usize) -> usize {
        1
    }

    fn variable(_: &&str, index: usize) -> usize {
        VARIABLE[index]
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_text_returns_zeros() {
            let lines: [&str; 0] = [];
            let viewport = calculate_text_viewport(&lines, 5, 10, unit);

            assert_eq!(viewport.start_line_index, 0);
            assert_eq!(viewport.end_line_index, None);
            assert!(viewport.visible_lines.is_empty());
            assert_eq!(viewport.total_lines, 0);
            assert_eq!(viewport.rows_above, 0);
            assert_eq!(viewport.rows_below, 0);
            assert_eq!(viewport.max_scroll_offset, 0);
        }

        #[test]
        fn content_that_fits_ignores_offset() {
            let lines = ["line 1", "line 2", "line 3"];
            let viewport = calculate_text_viewport(&lines, 2, 10, unit);

            assert_eq!(viewport.start_line_index, 0);
            assert_eq!(viewport.end_line_index, Some(2));
            assert_eq!(viewport.max_scroll_offset, 0);
            assert!(!viewport.has_lines_above());
            assert!(!viewport.has_lines_below());
        }

        #[test]
        fn zero_height_means_unbounded() {
            let viewport = calculate_text_viewport(&LETTERS, 3, 0, variable);
            assert_eq!(viewport.range(), Some(0..=3));
            assert_eq!(viewport.max_scroll_offset, 0);
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn offset_zero_shows_first_rows() {
            let lines = ["l1", "l2", "l3", "l4", "l5"];
            let viewport = calculate_text_viewport(&lines, 0, 3, unit);

            assert_eq!(viewport.visible_lines, &["l1", "l2", "l3"]);
            assert_eq!(viewport.rows_above, 0);
            assert_eq!(viewport.rows_below, 2);
            assert_eq!(viewport.max_scroll_offset, 2);
        }

        #[test]
        fn offset_in_middle_starts_exactly_there() {
            let lines = ["l1", "l2", "l3", "l4", "l5"];
            let viewport = calculate_text_viewport(&lines, 2, 2, unit);

            assert_eq!(viewport.visible_lines, &["l3", "l4"]);
            assert_eq!(viewport.rows_above, 2);
            assert_eq!(viewport.rows_below, 1);
        }

        #[test]
        fn wrapped_lines_count_rows_not_lines() {
            // GIVEN heights [1, 3, 1, 2]
            // WHEN starting at "b" with 4 rows
            let viewport = calculate_text_viewport(&LETTERS, 1, 4, variable);

            // THEN "b" and "c" fill the viewport exactly
            assert_eq!(viewport.start_line_index, 1);
            assert_eq!(viewport.end_line_index, Some(2));
            assert_eq!(viewport.visible_lines, &["b", "c"]);
            assert_eq!(viewport.rows_above, 1);
            assert_eq!(viewport.rows_below, 2);
            assert_eq!(viewport.max_scroll_offset, 1);
        }

        #[test]
        fn max_scroll_offset_uses_suffix_heights() {
            // Suffix heights from each line: [7, 6, 3, 2]
            let viewport = calculate_text_viewport(&LETTERS, 0, 5, variable);
            assert_eq!(viewport.max_scroll_offset, 1);
            assert_eq!(viewport.visible_lines, &["a", "b", "c"]);
        }

        #[test]
        fn offset_past_maximum_is_clamped() {
            let at_max = calculate_text_viewport(&LETTERS, 1, 4, variable);
            let past_max = calculate_text_viewport(&LETTERS, 3, 4, variable);
            let far_past = calculate_text_viewport(&LETTERS, 1_000, 4, variable);

            assert_eq!(past_max, at_max);
            assert_eq!(far_past, at_max);
        }

        #[test]
        fn oversized_line_is_shown_alone() {
            let heights = [1, 9, 1];
            let lines = ["x", "tall", "y"];
            let viewport = calculate_text_viewport(&lines, 1, 4, |_, i| heights[i]);

            assert_eq!(viewport.visible_lines, &["tall"]);
            assert_eq!(viewport.rows_above, 1);
            assert_eq!(viewport.rows_below, 1);
        }
    }

    mod scrollable_text {
        use super::*;

        #[test]
        fn splits_and_expands_before_measuring() {
            let text = ScrollableText::new("{\n\t\"key\": \"a\\nb\"\n}", 2);
            assert_eq!(
                text.lines(),
                &["{", "  \"key\": \"a", "b\"", "}"].map(String::from)
            );
        }

        #[test]
        fn viewport_wraps_at_pane_width() {
            // GIVEN 4 lines in a 20-column pane: gutter 4, padding 2 -> 14 columns
            let long = "z".repeat(30);
            let text = ScrollableText::from_lines(
                ["one".to_string(), long, "three".to_string(), "four".to_string()],
            );

            // WHEN showing 4 rows from the top
            let viewport = text.viewport(0, ViewportDimensions::new(20, 4), 2);

            // THEN the 30-column line takes 3 rows and pushes the rest out
            assert_eq!(viewport.end_line_index, Some(1));
            assert_eq!(viewport.rows_below, 2);
            assert!(viewport.has_lines_below());
        }

        #[test]
        fn empty_text_is_one_blank_line() {
            let text = ScrollableText::new("", 2);
            assert_eq!(text.line_count(), 1);
            let viewport = text.viewport(0, ViewportDimensions::new(80, 10), 2);
            assert_eq!(viewport.range(), Some(0..=0));
        }
    }
}
