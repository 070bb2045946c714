//! Multi-column grid layout for terminal listings.
//!
//! Given one display width per item and a terminal width, the solver picks
//! the densest column count whose lines fit, the way directory listers lay
//! out filenames. Items flow down the columns by default ([`Flow::Vertical`])
//! or across the rows ([`Flow::Horizontal`]).
//!
//! ```rust
//! use colgrid::{GridConfig, GridWriter};
//!
//! let names = ["ash", "birch", "cedar", "elm", "fir", "oak"];
//! let layout = GridConfig::new().solve_items(&names, 24).unwrap();
//! assert!(layout.line_width() <= 24);
//! println!("{}", GridWriter::new(&names, &layout));
//! ```

mod render;
mod solve;
mod traits;
mod types;

pub use render::GridWriter;
pub use traits::CellWidth;
pub use types::{Flow, GridConfig, Layout};
