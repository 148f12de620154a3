//! Circular card carousel with a pseudo-3D stacked look.
//!
//! [`circular_offset`] and [`CardTransform::derive`] are pure; [`Carousel`]
//! owns the current index and changes it from the auto-advance timer, drag
//! gestures and direct selection. [`CardDeck`] paints the result.

mod carousel;
mod deck;
mod gesture;
mod transform;

pub use carousel::{CardPosition, Carousel};
pub use deck::{CardContent, CardDeck, indicator_hit, indicator_line};
pub use gesture::{DragGesture, DragOutcome};
pub use transform::{CardTransform, CarouselConfig, circular_offset};
