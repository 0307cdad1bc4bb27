//! CumulativeHeights - prefix sums over row heights
//!
//! Rebuilt from scratch on every viewport calculation. For realistic row
//! counts this is cheaper than keeping an incremental index in sync with
//! expand/collapse and filter changes.
//!
//! # Layout
//!
//! `offsets[i]` is the total height of rows `0..i`, so row `i` covers the
//! half-open band `[offsets[i], offsets[i + 1])`.
//!
//! ```text
//! heights  [1, 3, 1, 2]
//! offsets  [0, 1, 4, 5, 7]
//! ```

/// Prefix-sum table for O(1) range totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeHeights {
    offsets: Vec<usize>,
}

impl CumulativeHeights {
    /// Builds the table from per-row heights.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cclogview::viewport::cumulative::CumulativeHeights;
    /// let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
    /// assert_eq!(cumulative.total(), 7);
    /// assert_eq!(cumulative.start_of(2), 4);
    /// assert_eq!(cumulative.height_of(1), 3);
    /// ```
    pub fn from_heights<I>(heights: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let heights = heights.into_iter();
        let mut offsets = Vec::with_capacity(heights.size_hint().0 + 1);
        offsets.push(0);
        let mut running = 0usize;
        for height in heights {
            running = running.saturating_add(height);
            offsets.push(running);
        }
        Self { offsets }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total height of all rows.
    pub fn total(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Vertical offset at which row `index` starts.
    ///
    /// `start_of(len())` is the total height.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn start_of(&self, index: usize) -> usize {
        self.offsets[index]
    }

    /// Vertical offset one past the last line of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn end_of(&self, index: usize) -> usize {
        self.offsets[index + 1]
    }

    /// Height of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height_of(&self, index: usize) -> usize {
        self.end_of(index) - self.start_of(index)
    }

    /// Total height of the inclusive row range `first..=last`.
    ///
    /// Returns 0 when `first > last`.
    pub fn range_total(&self, first: usize, last: usize) -> usize {
        if first > last {
            return 0;
        }
        self.end_of(last) - self.start_of(first)
    }

    /// Total height of rows strictly before `index`.
    pub fn height_before(&self, index: usize) -> usize {
        self.start_of(index)
    }

    /// Total height of rows strictly after `index`.
    pub fn height_after(&self, index: usize) -> usize {
        self.total() - self.end_of(index)
    }

    /// First row whose band ends below `offset`, i.e. the row containing
    /// vertical position `offset`.
    ///
    /// Returns `None` if `offset >= total()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cclogview::viewport::cumulative::CumulativeHeights;
    /// let cumulative = CumulativeHeights::from_heights([10, 20, 15]);
    /// assert_eq!(cumulative.row_at(0), Some(0));
    /// assert_eq!(cumulative.row_at(10), Some(1));
    /// assert_eq!(cumulative.row_at(29), Some(1));
    /// assert_eq!(cumulative.row_at(30), Some(2));
    /// assert_eq!(cumulative.row_at(45), None);
    /// ```
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        // offsets[1..] is non-decreasing, so the predicate flips exactly once.
        let index = self.offsets[1..].partition_point(|&end| end <= offset);
        (index < self.len()).then_some(index)
    }

    /// Last row reachable from `start` while rows `start..=end` stay within
    /// `budget`. `start` itself is always included, even if it alone is
    /// taller than `budget`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cclogview::viewport::cumulative::CumulativeHeights;
    /// let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
    /// assert_eq!(cumulative.fill_forward(1, 4), 2);
    /// assert_eq!(cumulative.fill_forward(1, 1), 1);
    /// ```
    pub fn fill_forward(&self, start: usize, budget: usize) -> usize {
        let last = self.len() - 1;
        let mut end = start;
        let mut used = self.height_of(start);
        while end < last && used.saturating_add(self.height_of(end + 1)) <= budget {
            end += 1;
            used += self.height_of(end);
        }
        end
    }

    /// First row reachable walking back from `end` while rows
    /// `start..=end` stay within `budget`. `end` itself is always included.
    pub fn fill_backward(&self, end: usize, budget: usize) -> usize {
        let mut start = end;
        let mut used = self.height_of(end);
        while start > 0 && used.saturating_add(self.height_of(start - 1)) <= budget {
            start -= 1;
            used += self.height_of(start);
        }
        start
    }

    /// Largest row index from which the remaining rows still cover at
    /// least `height` rows. Returns 0 when the content is shorter than
    /// `height`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cclogview::viewport::cumulative::CumulativeHeights;
    /// let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
    /// assert_eq!(cumulative.last_filling_start(5), 1);
    /// assert_eq!(cumulative.last_filling_start(2), 3);
    /// assert_eq!(cumulative.last_filling_start(100), 0);
    /// ```
    pub fn last_filling_start(&self, height: usize) -> usize {
        let total = self.total();
        if self.is_empty() || total < height {
            return 0;
        }
        // Suffix totals shrink as the start moves down, so starts that
        // leave at least `height` rows form a prefix of the row list.
        let limit = total - height;
        self.offsets[..self.len()]
            .partition_point(|&start| start <= limit)
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_zero_total() {
        let cumulative = CumulativeHeights::from_heights(Vec::new());
        assert!(cumulative.is_empty());
        assert_eq!(cumulative.len(), 0);
        assert_eq!(cumulative.total(), 0);
        assert_eq!(cumulative.row_at(0), None);
    }

    #[test]
    fn offsets_accumulate_heights() {
        let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
        let starts: Vec<_> = (0..=4).map(|i| cumulative.start_of(i)).collect();
        assert_eq!(starts, vec![0, 1, 4, 5, 7]);
    }

    #[test]
    fn range_total_is_inclusive() {
        let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
        assert_eq!(cumulative.range_total(1, 2), 4);
        assert_eq!(cumulative.range_total(0, 3), 7);
        assert_eq!(cumulative.range_total(3, 3), 2);
        assert_eq!(cumulative.range_total(2, 1), 0);
    }

    #[test]
    fn height_before_and_after_partition_total() {
        let cumulative = CumulativeHeights::from_heights([2, 5, 1, 4]);
        for index in 0..cumulative.len() {
            assert_eq!(
                cumulative.height_before(index)
                    + cumulative.height_of(index)
                    + cumulative.height_after(index),
                cumulative.total(),
                "partition broken at row {index}"
            );
        }
    }

    #[test]
    fn row_at_skips_zero_height_rows() {
        // GIVEN a zero-height row in the middle
        let cumulative = CumulativeHeights::from_heights([2, 0, 3]);

        // WHEN looking up the offset where the empty row "starts"
        // THEN the row that actually occupies it is returned
        assert_eq!(cumulative.row_at(2), Some(2));
        assert_eq!(cumulative.row_at(1), Some(0));
    }

    #[test]
    fn fill_forward_includes_oversized_start() {
        let cumulative = CumulativeHeights::from_heights([1, 9, 1]);
        assert_eq!(cumulative.fill_forward(1, 4), 1);
        assert_eq!(cumulative.fill_forward(0, 4), 0);
        assert_eq!(cumulative.fill_forward(2, 4), 2);
    }

    #[test]
    fn fill_backward_stops_before_overflow() {
        let cumulative = CumulativeHeights::from_heights([2, 2, 1, 1]);
        assert_eq!(cumulative.fill_backward(3, 4), 1);
        assert_eq!(cumulative.fill_backward(3, 1), 3);
    }

    #[test]
    fn last_filling_start_scans_from_the_end() {
        // Suffix totals: [7, 6, 3, 2]
        let cumulative = CumulativeHeights::from_heights([1, 3, 1, 2]);
        assert_eq!(cumulative.last_filling_start(4), 1);
        assert_eq!(cumulative.last_filling_start(3), 2);
        assert_eq!(cumulative.last_filling_start(7), 0);
        assert_eq!(cumulative.last_filling_start(0), 3);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let cumulative = CumulativeHeights::from_heights([usize::MAX, 5]);
        assert_eq!(cumulative.total(), usize::MAX);
    }
}
