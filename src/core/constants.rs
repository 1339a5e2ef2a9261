//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between the columns of a table row
pub const COLUMN_GUTTER: usize = 1;

/// Bars are never squeezed below 10 characters when sized from the terminal
pub const MIN_BAR_WIDTH: usize = 10;
/// Terminal width used when stdout is not a tty
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// Non-integral labels are rounded to the first decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;

/// Overdue flag
pub const OVERDUE: char = '#';
/// Active flag
pub const FLAGGED: char = '+';
/// Completed flag
pub const COMPLETED: char = '-';
/// No flag
pub const UNFLAGGED: char = '.';

/// Registry order used by the CLI unless `--categories` overrides it.
pub const DEFAULT_CATEGORIES: [char; 4] = [OVERDUE, FLAGGED, COMPLETED, UNFLAGGED];

/// Upper bound on derived bins; larger layouts are rejected as degenerate
pub const MAX_BIN_COUNT: usize = 1 << 20;
/// Upper bound on glyphs drawn in one bar
pub const MAX_BAR_GLYPHS: usize = 1 << 16;
