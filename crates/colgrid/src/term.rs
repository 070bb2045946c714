//! Terminal width detection.
//!
//! Resolves the effective width once per program invocation, in order:
//! a `COLUMNS` environment override, then the controlling terminal, then
//! [`DEFAULT_TERMINAL_WIDTH`]. Invalid overrides and missing terminals are
//! never fatal; they are logged at warn level and the next source is tried.

/// Width used when no override is set and no terminal is attached.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Environment variable consulted before querying the terminal.
const COLUMNS_ENV: &str = "COLUMNS";

/// Detect the usable terminal width in cells.
///
/// Checks the `COLUMNS` environment variable first (set by shells, and the
/// conventional override for scripts and tests), then queries the terminal,
/// then falls back to 80. Always returns a positive width.
///
/// ```rust
/// let width = colgrid::detect_terminal_width();
/// assert!(width >= 1);
/// ```
pub fn detect_terminal_width() -> usize {
    match std::env::var(COLUMNS_ENV) {
        // shells sometimes export the variable empty; treat as unset
        Ok(raw) if raw.is_empty() => {}
        Ok(raw) => match parse_columns(&raw) {
            Ok(width) => return width,
            Err(reason) => {
                log::warn!("ignoring {COLUMNS_ENV}={raw:?}: {reason}");
            }
        },
        Err(_) => {}
    }

    match terminal_size::terminal_size() {
        Some((terminal_size::Width(width), _)) if width > 0 => width as usize,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Parse a non-empty `COLUMNS` override.
fn parse_columns(raw: &str) -> Result<usize, &'static str> {
    match raw.parse::<usize>() {
        Ok(0) => Err("width must be greater than zero"),
        Ok(width) => Ok(width),
        Err(_) => Err("not a number"),
    }
}
