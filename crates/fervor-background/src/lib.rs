//! Ambient background rendering for the fervor event screen.
//!
//! Soft radial blobs spawn near the left and right margins, fade in, live
//! for a while and ease out again, on top of a faint grid. The simulation is
//! frame based and lives in a fixed-capacity slot arena, see [`BlobField`].

mod animations;
mod chars;
mod color;
mod state;

pub use animations::blob::{Blob, Canvas, SizeBand};
pub use animations::field::{ARENA_CAPACITY, BlobField};
pub use color::{Rgb, blend};
pub use state::BackgroundState;
