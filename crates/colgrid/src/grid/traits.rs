//! The display-width seam between caller items and the layout engine.
//!
//! How many terminal cells a name occupies is locale- and encoding-dependent
//! and orthogonal to the layout algorithm, so the engine never inspects item
//! content. Callers either pass precomputed widths to
//! [`GridConfig::solve`](crate::GridConfig::solve) or implement [`CellWidth`]
//! for their item type and use
//! [`GridConfig::solve_items`](crate::GridConfig::solve_items).

use crate::util::display_width;

/// Trait for items that know their rendered width in terminal cells.
///
/// Implementations for `str` and `String` are provided, backed by
/// `unicode-width`. Types that render decorated output (colors, indicator
/// suffixes) should implement this to report the width of the visible text
/// only.
///
/// # Example
///
/// ```rust
/// use colgrid::CellWidth;
///
/// struct Entry {
///     name: String,
///     is_dir: bool,
/// }
///
/// impl CellWidth for Entry {
///     fn cell_width(&self) -> usize {
///         // a trailing "/" indicator adds one cell
///         self.name.cell_width() + usize::from(self.is_dir)
///     }
/// }
/// ```
pub trait CellWidth {
    /// Returns the number of terminal cells this item occupies when printed.
    fn cell_width(&self) -> usize;
}

impl CellWidth for str {
    fn cell_width(&self) -> usize {
        display_width(self)
    }
}

impl CellWidth for String {
    fn cell_width(&self) -> usize {
        display_width(self)
    }
}

impl<T: CellWidth + ?Sized> CellWidth for &T {
    fn cell_width(&self) -> usize {
        (**self).cell_width()
    }
}
