//! Character constants for the background grid.

/// Cell crossed by a vertical grid line.
pub const GRID_VERTICAL: char = '│';

/// Cell crossed by a horizontal grid line.
pub const GRID_HORIZONTAL: char = '─';

/// Cell crossed by both.
pub const GRID_CROSS: char = '┼';
