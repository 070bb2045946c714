//! Row emission for computed layouts.
//!
//! The engine itself never writes output; [`GridWriter`] is the bundled
//! `Display` adapter for callers that want the conventional rendering:
//! each populated cell padded to its column width, empty cells skipped,
//! no trailing whitespace and no trailing newline.

use std::fmt;

use super::types::Layout;
use crate::util::pad_right;

/// Renders a slice of items through a computed [`Layout`].
///
/// Borrows both the items and the layout; nothing is copied until the
/// value is formatted.
///
/// # Example
///
/// ```rust
/// use colgrid::{GridConfig, GridWriter};
///
/// let names = ["ash", "birch", "cedar", "elm"];
/// let layout = GridConfig::new().solve_items(&names, 13).unwrap();
/// let rendered = GridWriter::new(&names, &layout).to_string();
/// assert_eq!(rendered, "ash    cedar\nbirch  elm");
/// ```
pub struct GridWriter<'a, T> {
    items: &'a [T],
    layout: &'a Layout,
}

impl<'a, T> GridWriter<'a, T> {
    /// Create a writer over `items` and the layout computed for them.
    pub fn new(items: &'a [T], layout: &'a Layout) -> Self {
        GridWriter { items, layout }
    }
}

impl<T: fmt::Display> fmt::Display for GridWriter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.layout.num_rows() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<(usize, usize)> = self.layout.row(row).collect();
            for (pos, &(col, index)) in cells.iter().enumerate() {
                let Some(item) = self.items.get(index) else {
                    continue;
                };
                let text = item.to_string();
                if pos + 1 == cells.len() {
                    // last populated cell of the row stays unpadded
                    write!(f, "{}", text)?;
                } else {
                    let width = self.layout.column_width(col).unwrap_or(0)
                        + self.layout.separator_width();
                    write!(f, "{}", pad_right(&text, width))?;
                }
            }
        }
        Ok(())
    }
}
