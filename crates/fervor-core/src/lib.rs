//! Core types shared by the fervor crates.

mod countdown;
mod interval;
mod speed;
mod theme;

pub use countdown::TimeLeft;
pub use interval::Interval;
pub use speed::AnimationSpeed;
pub use theme::ColorTheme;

/// Width of one terminal cell in virtual canvas pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Height of one terminal cell in virtual canvas pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;
