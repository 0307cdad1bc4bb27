//! Line-wrap height estimation
//!
//! The text viewport only needs to know how many terminal rows each line
//! occupies. Lines are measured after tab and escaped-newline expansion:
//! expansion changes the column count, so measuring the raw text would
//! desync the computed viewport from what is actually painted.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

/// Columns reserved for the left/right padding of the detail pane.
pub const DEFAULT_CONTENT_PADDING: usize = 2;

/// Spaces substituted for each tab character.
pub const DEFAULT_TAB_WIDTH: usize = 2;

/// Width of the `"[N] "` line-number gutter for a text with `line_count` lines.
///
/// # Examples
///
/// ```
/// # use cclogview::viewport::wrap::gutter_width;
/// assert_eq!(gutter_width(9), 4);
/// assert_eq!(gutter_width(999), 6);
/// assert_eq!(gutter_width(1000), 7);
/// ```
pub fn gutter_width(line_count: usize) -> usize {
    let digits = line_count.checked_ilog10().map_or(1, |log| log as usize + 1);
    digits + 3
}

/// Columns left for text once the gutter and padding are taken out.
pub fn available_width(viewport_width: usize, line_count: usize, padding: usize) -> usize {
    viewport_width
        .saturating_sub(gutter_width(line_count))
        .saturating_sub(padding)
}

/// Rows a single line occupies when wrapped at `available_width` columns.
///
/// Empty lines and degenerate widths take one row.
///
/// # Examples
///
/// ```
/// # use cclogview::viewport::wrap::wrapped_height;
/// assert_eq!(wrapped_height("", 10), 1);
/// assert_eq!(wrapped_height("0123456789", 10), 1);
/// assert_eq!(wrapped_height("0123456789a", 10), 2);
/// assert_eq!(wrapped_height("abc", 0), 1);
/// ```
pub fn wrapped_height(line: &str, available_width: usize) -> usize {
    if line.is_empty() || available_width == 0 {
        return 1;
    }
    line.width().div_ceil(available_width).max(1)
}

/// Replace every tab with `tab_width` spaces.
pub fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(tab_width)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Turn literal `\n` escape sequences (backslash, `n`) into real newlines.
///
/// Tool payloads frequently arrive JSON-escaped; splitting them into lines
/// only works once the escapes are real line breaks.
pub fn expand_escaped_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") {
        Cow::Owned(text.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Expand escaped newlines and tabs so the text is ready to split and measure.
pub fn prepare_text(text: &str, tab_width: usize) -> String {
    let unescaped = expand_escaped_newlines(text);
    expand_tabs(&unescaped, tab_width).into_owned()
}

/// Split on `\n`, keeping a trailing empty line when the text ends with a
/// newline. A `\r` left over from CRLF endings is dropped.
///
/// # Examples
///
/// ```
/// # use cclogview::viewport::wrap::split_lines;
/// assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Wrap-height callback bound to a fixed content width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrap {
    available_width: usize,
}

impl LineWrap {
    /// Wrap at exactly `available_width` columns.
    pub fn new(available_width: usize) -> Self {
        Self { available_width }
    }

    /// Wrap inside a pane of `viewport_width` columns showing `line_count`
    /// numbered lines.
    pub fn for_pane(viewport_width: usize, line_count: usize, padding: usize) -> Self {
        Self::new(available_width(viewport_width, line_count, padding))
    }

    /// Columns available to line content.
    pub fn available_width(&self) -> usize {
        self.available_width
    }

    /// Rows occupied by `line`.
    pub fn height_of(&self, line: &str) -> usize {
        wrapped_height(line, self.available_width)
    }
}
