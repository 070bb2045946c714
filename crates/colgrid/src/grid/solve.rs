//! Column-count search for multi-column terminal output.
//!
//! Given the display width of every item and a terminal width, the solver
//! finds the densest column count whose rendered lines fit. Candidates are
//! tried from the widest possible count downward; the first one that fits
//! wins, so the result always packs as many columns as the terminal allows.
//!
//! A single column is the unconditional fallback. Even when one item is
//! wider than the terminal, the solver still returns a one-column layout and
//! leaves truncation or wrapping to the caller.

use super::traits::CellWidth;
use super::types::{Flow, GridConfig, Layout};
use crate::error::GridError;

impl GridConfig {
    /// Compute the densest feasible [`Layout`] for the given item widths.
    ///
    /// `item_widths` holds one display width per item, in final print
    /// order. `terminal_width` is the total number of cells available on
    /// one line and must be at least 1.
    ///
    /// The search never fails for well-formed input: an empty slice yields
    /// the empty layout and an infeasible terminal yields one column.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidTerminalWidth`] when `terminal_width`
    /// is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colgrid::GridConfig;
    ///
    /// let widths = [5, 5, 5, 5, 5, 5, 5, 5, 5, 5];
    /// let layout = GridConfig::new().solve(&widths, 30).unwrap();
    /// assert_eq!(layout.num_columns(), 4);
    /// assert_eq!(layout.num_rows(), 3);
    /// ```
    pub fn solve(&self, item_widths: &[usize], terminal_width: usize) -> Result<Layout, GridError> {
        if terminal_width == 0 {
            return Err(GridError::InvalidTerminalWidth);
        }
        let num_items = item_widths.len();
        if num_items == 0 {
            return Ok(Layout {
                num_items: 0,
                num_columns: 0,
                num_rows: 0,
                col_widths: Vec::new(),
                separator_width: self.separator_width,
                flow: self.flow,
            });
        }

        // Upper bound on the column count from the width floor alone. The
        // floor keeps the divisor positive for degenerate configurations.
        let min_col = self.min_column_width.max(1);
        let max_candidate = (terminal_width / min_col).max(1).min(num_items);

        for num_columns in (2..=max_candidate).rev() {
            if let Some(layout) = self.candidate(item_widths, terminal_width, num_columns) {
                return Ok(layout);
            }
        }

        // One column always works, even when an item overflows the
        // terminal; overflow is the caller's problem.
        Ok(self.single_column(item_widths))
    }

    /// Compute a layout for items that know their own width.
    ///
    /// Convenience over [`solve`](Self::solve) for callers whose item type
    /// implements [`CellWidth`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidTerminalWidth`] when `terminal_width`
    /// is zero.
    pub fn solve_items<T: CellWidth>(
        &self,
        items: &[T],
        terminal_width: usize,
    ) -> Result<Layout, GridError> {
        let widths: Vec<usize> = items.iter().map(CellWidth::cell_width).collect();
        self.solve(&widths, terminal_width)
    }

    /// Test one column count; returns the layout when its lines fit.
    fn candidate(
        &self,
        item_widths: &[usize],
        terminal_width: usize,
        num_columns: usize,
    ) -> Option<Layout> {
        let num_items = item_widths.len();
        let num_rows = num_items.div_ceil(num_columns);

        let mut col_widths = vec![0usize; num_columns];
        for (index, &width) in item_widths.iter().enumerate() {
            let col = match self.flow {
                Flow::Vertical => index / num_rows,
                Flow::Horizontal => index % num_columns,
            };
            col_widths[col] = col_widths[col].max(width);
        }

        let line_width = col_widths.iter().sum::<usize>()
            + self.separator_width * (num_columns - 1);
        (line_width <= terminal_width).then(|| Layout {
            num_items,
            num_columns,
            num_rows,
            col_widths,
            separator_width: self.separator_width,
            flow: self.flow,
        })
    }

    fn single_column(&self, item_widths: &[usize]) -> Layout {
        let widest = item_widths.iter().copied().max().unwrap_or(0);
        Layout {
            num_items: item_widths.len(),
            num_columns: 1,
            num_rows: item_widths.len(),
            col_widths: vec![widest],
            separator_width: self.separator_width,
            flow: self.flow,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accepted_layouts_fit_unless_single_column(
            item_widths in proptest::collection::vec(0usize..30, 0..40),
            terminal_width in 1usize..120,
        ) {
            let config = GridConfig::new();
            let layout = config.solve(&item_widths, terminal_width).unwrap();

            if layout.num_columns() > 1 {
                prop_assert!(
                    layout.line_width() <= terminal_width,
                    "line width {} exceeds terminal {}",
                    layout.line_width(), terminal_width
                );
            }
        }

        #[test]
        fn no_denser_candidate_would_fit(
            item_widths in proptest::collection::vec(0usize..30, 1..40),
            terminal_width in 1usize..120,
        ) {
            let config = GridConfig::new();
            let layout = config.solve(&item_widths, terminal_width).unwrap();

            let min_col = config.min_column_width.max(1);
            let max_candidate = (terminal_width / min_col).max(1).min(item_widths.len());

            for denser in layout.num_columns() + 1..=max_candidate {
                prop_assert!(
                    config.candidate(&item_widths, terminal_width, denser).is_none(),
                    "candidate with {} columns also fits but {} was chosen",
                    denser, layout.num_columns()
                );
            }
        }

        #[test]
        fn every_item_appears_in_exactly_one_cell(
            item_widths in proptest::collection::vec(0usize..30, 0..40),
            terminal_width in 1usize..120,
            horizontal in proptest::bool::ANY,
        ) {
            let mut config = GridConfig::new();
            if horizontal {
                config = config.horizontal();
            }
            let layout = config.solve(&item_widths, terminal_width).unwrap();

            let mut seen = vec![false; item_widths.len()];
            for row in 0..layout.num_rows() {
                for (_, index) in layout.row(row) {
                    prop_assert!(index < item_widths.len(), "index {} out of range", index);
                    prop_assert!(!seen[index], "index {} appears twice", index);
                    seen[index] = true;
                }
            }
            prop_assert!(seen.iter().all(|&s| s), "some item never placed");
        }

        #[test]
        fn narrow_terminals_always_resolve_to_one_column(
            item_widths in proptest::collection::vec(0usize..30, 1..40),
            terminal_width in 1usize..3,
        ) {
            // default min_column_width is 3
            let layout = GridConfig::new().solve(&item_widths, terminal_width).unwrap();
            prop_assert_eq!(layout.num_columns(), 1);
            prop_assert_eq!(layout.num_rows(), item_widths.len());
        }

        #[test]
        fn row_count_is_ceiling_of_items_over_columns(
            item_widths in proptest::collection::vec(0usize..30, 1..40),
            terminal_width in 1usize..120,
        ) {
            let layout = GridConfig::new().solve(&item_widths, terminal_width).unwrap();
            let n = item_widths.len();
            let c = layout.num_columns();
            prop_assert_eq!(layout.num_rows(), n.div_ceil(c));
        }
    }
}
