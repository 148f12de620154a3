//! Carousel index state.

use fervor_core::Interval;

use crate::gesture::{DragGesture, DragOutcome};
use crate::transform::{CardTransform, CarouselConfig, circular_offset};

/// A visible card and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPosition {
    pub index: usize,
    pub offset: i32,
    pub transform: CardTransform,
}

/// A ring of items with one active index.
///
/// Index-changing calls return `true` when the active item changed.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    gesture: DragGesture,
    config: CarouselConfig,
    auto_advance: Interval,
    suspended: bool,
}

impl<T> Carousel<T> {
    /// Create a carousel showing the first item. Auto-advance is stopped
    /// until [`Carousel::start`].
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Self {
        let auto_advance = Interval::new(config.auto_advance);
        Self {
            items,
            current: 0,
            gesture: DragGesture::Idle,
            config,
            auto_advance,
            suspended: false,
        }
    }

    /// Start on `index`, clamped into range.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.current = index.min(self.items.len().saturating_sub(1));
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Arm the auto-advance timer.
    pub fn start(&mut self, now_ms: u64) {
        self.auto_advance.start(now_ms);
    }

    /// Disarm the auto-advance timer.
    pub fn stop(&mut self) {
        self.auto_advance.stop();
    }

    pub fn is_running(&self) -> bool {
        self.auto_advance.is_running()
    }

    /// Change the auto-advance period, re-arming a running timer.
    pub fn set_auto_advance(&mut self, period: std::time::Duration, now_ms: u64) {
        self.config.auto_advance = period;
        self.auto_advance.set_period(period, now_ms);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Suspend or resume auto-advance. The timer keeps its phase.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Poll the auto-advance timer.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let fired = self.auto_advance.poll(now_ms);
        if fired == 0 || self.suspended || self.items.is_empty() {
            return false;
        }

        let before = self.current;
        self.current = (self.current + fired as usize) % self.items.len();
        self.current != before
    }

    /// Step to the next item, wrapping to the first.
    pub fn advance(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let before = self.current;
        self.current = (self.current + 1) % self.items.len();
        self.current != before
    }

    /// Step to the previous item, wrapping to the last.
    pub fn retreat(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let before = self.current;
        self.current = if self.current == 0 {
            self.items.len() - 1
        } else {
            self.current - 1
        };
        self.current != before
    }

    /// Jump straight to `index`. The auto-advance timer is not reset.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    /// Pointer down at canvas x.
    pub fn press(&mut self, x: f32) {
        if !self.items.is_empty() {
            self.gesture.press(x);
        }
    }

    /// Pointer moved to canvas x.
    pub fn drag(&mut self, x: f32) {
        self.gesture.move_to(x);
    }

    /// Pointer up or left the carousel.
    pub fn release(&mut self) -> bool {
        let outcome = self.gesture.release(self.config.drag_threshold_px);
        tracing::trace!(?outcome, "drag released");
        match outcome {
            DragOutcome::Previous => self.retreat(),
            DragOutcome::Next => self.advance(),
            DragOutcome::Stay => false,
        }
    }

    /// Visible cards ordered back to front.
    pub fn positions(&self) -> Vec<CardPosition> {
        let drag = self.gesture.offset();
        let len = self.items.len();

        let mut positions: Vec<CardPosition> = (0..len)
            .filter_map(|index| {
                let offset = circular_offset(index, self.current, len);
                CardTransform::derive(offset, drag, &self.config).map(|transform| CardPosition {
                    index,
                    offset,
                    transform,
                })
            })
            .collect();

        positions.sort_by(|a, b| {
            b.offset
                .unsigned_abs()
                .cmp(&a.offset.unsigned_abs())
                .then(a.offset.cmp(&b.offset))
        });
        positions
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    fn ring(len: usize) -> Carousel<usize> {
        Carousel::new((0..len).collect(), CarouselConfig::gallery())
    }

    #[rstest]
    #[case(5, 2, 150.0, 1)]
    #[case(5, 0, -150.0, 1)]
    #[case(5, 0, 150.0, 4)]
    #[case(5, 4, -150.0, 0)]
    #[case(5, 2, 100.0, 2)]
    #[case(5, 2, -100.0, 2)]
    #[case(5, 2, 0.0, 2)]
    #[case(18, 17, -101.0, 0)]
    fn test_drag_release(
        #[case] len: usize,
        #[case] start: usize,
        #[case] delta: f32,
        #[case] expected: usize,
    ) {
        let mut carousel = ring(len).with_start_index(start);
        carousel.press(500.0);
        carousel.drag(500.0 + delta);
        carousel.release();
        assert_eq!(carousel.current_index(), expected);
        assert!(!carousel.gesture().is_dragging());
        assert_eq!(carousel.gesture().offset(), 0.0);
    }

    #[test]
    fn test_speaker_threshold_is_lighter() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c'], CarouselConfig::speakers());
        carousel.press(0.0);
        carousel.drag(-60.0);
        assert!(carousel.release());
        assert_eq!(carousel.current(), Some(&'b'));
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut carousel = ring(3);
        carousel.start(0);
        assert!(!carousel.tick(4_999));
        assert!(carousel.tick(5_000));
        assert!(carousel.tick(10_000));
        assert!(carousel.tick(15_000));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_auto_advance_needs_start() {
        let mut carousel = ring(3);
        assert!(!carousel.tick(60_000));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_suspended_does_not_advance() {
        let mut carousel = ring(4);
        carousel.start(0);
        carousel.set_suspended(true);
        assert!(!carousel.tick(5_000));
        carousel.set_suspended(false);
        assert!(carousel.tick(10_000));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_select_keeps_timer_phase() {
        let mut carousel = ring(6);
        carousel.start(0);
        carousel.tick(1_000);
        assert!(carousel.select(3));
        assert!(!carousel.select(3));
        assert!(!carousel.select(6));
        // The tick due at 5 s still lands on schedule
        assert!(carousel.tick(5_000));
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_set_auto_advance_period() {
        let mut carousel = ring(4);
        carousel.start(0);
        carousel.set_auto_advance(Duration::from_secs(2), 1_000);
        assert!(!carousel.tick(2_999));
        assert!(carousel.tick(3_000));
    }

    #[test]
    fn test_start_index_is_clamped() {
        assert_eq!(ring(3).with_start_index(10).current_index(), 2);
        assert_eq!(ring(0).with_start_index(10).current_index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = ring(0);
        carousel.start(0);
        assert!(!carousel.tick(50_000));
        assert!(!carousel.advance());
        assert!(!carousel.retreat());
        carousel.press(0.0);
        carousel.drag(-500.0);
        assert!(!carousel.release());
        assert!(carousel.positions().is_empty());
        assert!(carousel.current().is_none());
    }

    #[test]
    fn test_positions_back_to_front() {
        let carousel = ring(18).with_start_index(0);
        let positions = carousel.positions();
        let offsets: Vec<i32> = positions.iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![-2, 2, -1, 1, 0]);
        assert_eq!(positions.last().map(|p| p.index), Some(0));
        assert_eq!(positions[0].index, 16);
    }

    #[test]
    fn test_live_drag_moves_speaker_cards() {
        let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::speakers());
        carousel.press(0.0);
        carousel.drag(40.0);
        let front = carousel.positions().into_iter().find(|p| p.offset == 0).unwrap();
        assert!((front.transform.translate_x - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_item_ring() {
        let mut carousel = ring(1);
        assert!(!carousel.advance());
        assert!(!carousel.retreat());
        assert_eq!(carousel.positions().len(), 1);
    }
}
