//! Core types for grid layout: configuration and the accepted layout.

use serde::{Deserialize, Serialize};

/// Fill order for items within the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Consecutive items run down a column before spilling into the next
    /// one, like `ls -C`.
    #[default]
    Vertical,
    /// Consecutive items run across a row before wrapping to the next one,
    /// like `ls -x`.
    Horizontal,
}

/// Configuration for a grid layout computation.
///
/// All knobs are explicit values carried by the caller; the engine keeps no
/// process-global state. The defaults match conventional directory-listing
/// output: columns at least 3 cells wide, 2 cells between columns, items
/// flowing down the columns.
///
/// # Example
///
/// ```rust
/// use colgrid::{Flow, GridConfig};
///
/// let config = GridConfig::new().separator_width(1).flow(Flow::Horizontal);
/// assert_eq!(config.separator_width, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Minimum width a column may occupy: one content cell plus the
    /// separator. Bounds the candidate search independently of item widths.
    pub min_column_width: usize,
    /// Cells between adjacent columns. The last column of a row carries no
    /// separator.
    pub separator_width: usize,
    /// Fill order for items.
    pub flow: Flow,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            min_column_width: 3,
            separator_width: 2,
            flow: Flow::Vertical,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the conventional defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum column width.
    pub fn min_column_width(mut self, width: usize) -> Self {
        self.min_column_width = width;
        self
    }

    /// Set the separator width between adjacent columns.
    pub fn separator_width(mut self, width: usize) -> Self {
        self.separator_width = width;
        self
    }

    /// Set the fill order.
    pub fn flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    /// Fill across rows instead of down columns (shorthand for
    /// `.flow(Flow::Horizontal)`).
    pub fn horizontal(self) -> Self {
        self.flow(Flow::Horizontal)
    }
}

/// The accepted result of a layout computation.
///
/// Carries the chosen column count, the row count `ceil(N / C)`, the content
/// width of each column, and the mapping from grid cells back to item
/// indices. Produced by [`GridConfig::solve`](crate::GridConfig::solve);
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub(crate) num_items: usize,
    pub(crate) num_columns: usize,
    pub(crate) num_rows: usize,
    /// Content width per column, separator excluded.
    pub(crate) col_widths: Vec<usize>,
    pub(crate) separator_width: usize,
    pub(crate) flow: Flow,
}

impl Layout {
    /// Number of side-by-side columns. Zero for an empty item list.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of printed lines, `ceil(N / C)`. Zero for an empty item list.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of items the layout was computed for.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Check if the layout holds no items.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Content width of each column in display cells, separators excluded.
    pub fn column_widths(&self) -> &[usize] {
        &self.col_widths
    }

    /// Content width of a specific column.
    pub fn column_width(&self, col: usize) -> Option<usize> {
        self.col_widths.get(col).copied()
    }

    /// Cells between adjacent columns, as configured at solve time.
    pub fn separator_width(&self) -> usize {
        self.separator_width
    }

    /// Fill order the layout was computed for.
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Total rendered width of a full line: content widths plus the
    /// separators between columns.
    pub fn line_width(&self) -> usize {
        let separators = self.separator_width * self.num_columns.saturating_sub(1);
        self.col_widths.iter().sum::<usize>() + separators
    }

    /// Item index at `(row, col)`, or `None` for cells past the last item.
    ///
    /// Vertical flow maps `(row, col)` to `col * num_rows + row`; horizontal
    /// flow to `row * num_columns + col`.
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.num_rows || col >= self.num_columns {
            return None;
        }
        let index = match self.flow {
            Flow::Vertical => col * self.num_rows + row,
            Flow::Horizontal => row * self.num_columns + col,
        };
        (index < self.num_items).then_some(index)
    }

    /// Iterate the populated cells of one row as `(col, item_index)` pairs.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_columns).filter_map(move |col| self.index_at(row, col).map(|idx| (col, idx)))
    }
}
