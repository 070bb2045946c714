//! # Colgrid - Multi-Column Layout for Terminal Listings
//!
//! `colgrid` computes how a list of names packs into columns on a terminal:
//! how many columns fit, how wide each one is, and which item lands in which
//! cell. It is the layout half of an `ls`-style lister, usable by any
//! program that prints many short items.
//!
//! ## Core Concepts
//!
//! - [`GridConfig`]: explicit layout knobs (minimum column width, separator
//!   width, fill order) passed per call; no global state
//! - [`Layout`]: the accepted result with column count, row count, per-column
//!   widths, and the cell-to-item mapping
//! - [`Flow`]: vertical-major fill (down the columns, like `ls -C`) or
//!   horizontal (across the rows, like `ls -x`)
//! - [`CellWidth`]: the seam for item display widths; `str` and `String`
//!   report Unicode-aware cell counts
//! - [`GridWriter`]: `Display` adapter that emits the padded rows
//! - [`detect_terminal_width`]: `COLUMNS` override, then the terminal, then 80
//!
//! ## Quick Start
//!
//! ```rust
//! use colgrid::{GridConfig, GridWriter};
//!
//! let names = [
//!     "alpha", "bravo", "cedar", "delta", "eagle",
//!     "fjord", "grape", "hotel", "igloo", "jolly",
//! ];
//!
//! let layout = GridConfig::new().solve_items(&names, 30).unwrap();
//! assert_eq!(layout.num_columns(), 4);
//! assert_eq!(layout.num_rows(), 3);
//!
//! let rendered = GridWriter::new(&names, &layout).to_string();
//! assert_eq!(
//!     rendered,
//!     "alpha  delta  grape  jolly\n\
//!      bravo  eagle  hotel\n\
//!      cedar  fjord  igloo"
//! );
//! ```
//!
//! ## Custom Widths
//!
//! The solver never inspects item content. Pass precomputed widths when the
//! rendered text differs from the raw name (colors, type indicators):
//!
//! ```rust
//! use colgrid::GridConfig;
//!
//! // widths as counted by the caller, one per item
//! let widths = [7, 3, 12, 5];
//! let layout = GridConfig::new().solve(&widths, 40).unwrap();
//! assert!(layout.line_width() <= 40);
//! ```
//!
//! ## Guarantees
//!
//! For any item list and any positive terminal width the solver returns a
//! layout: no feasible multi-column packing falls back to a single column,
//! even when one item alone is wider than the terminal. Multi-column
//! results are maximal; no denser column count would have fit.

mod error;
pub mod grid;
pub mod term;
mod util;

pub use error::GridError;
pub use grid::{CellWidth, Flow, GridConfig, GridWriter, Layout};
pub use term::{detect_terminal_width, DEFAULT_TERMINAL_WIDTH};
pub use util::{display_width, pad_right};
