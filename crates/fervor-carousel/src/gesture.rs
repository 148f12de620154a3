//! Horizontal drag tracking.

/// What a finished drag asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged right past the threshold: show the previous card.
    Previous,
    /// Dragged left past the threshold: show the next card.
    Next,
    /// Not far enough, or no drag in progress.
    Stay,
}

/// Pointer drag state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer x at press time.
        start_x: f32,
        /// Current x minus `start_x`.
        offset: f32,
    },
}

impl DragGesture {
    /// Pointer went down at `x`.
    pub fn press(&mut self, x: f32) {
        *self = DragGesture::Dragging {
            start_x: x,
            offset: 0.0,
        };
    }

    /// Pointer moved to `x`. Ignored unless dragging.
    pub fn move_to(&mut self, x: f32) {
        if let DragGesture::Dragging { start_x, offset } = self {
            *offset = x - *start_x;
        }
    }

    /// Pointer went up or left the widget. Always returns to idle.
    pub fn release(&mut self, threshold: f32) -> DragOutcome {
        let outcome = match *self {
            DragGesture::Dragging { offset, .. } if offset > threshold => DragOutcome::Previous,
            DragGesture::Dragging { offset, .. } if offset < -threshold => DragOutcome::Next,
            _ => DragOutcome::Stay,
        };
        *self = DragGesture::Idle;
        outcome
    }

    /// Live drag distance, zero when idle.
    pub fn offset(&self) -> f32 {
        match self {
            DragGesture::Idle => 0.0,
            DragGesture::Dragging { offset, .. } => *offset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_resets_offset() {
        let mut gesture = DragGesture::default();
        gesture.press(40.0);
        gesture.move_to(90.0);
        assert_eq!(gesture.offset(), 50.0);

        gesture.press(10.0);
        assert_eq!(gesture.offset(), 0.0);
        assert!(gesture.is_dragging());
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut gesture = DragGesture::default();
        gesture.move_to(300.0);
        assert_eq!(gesture, DragGesture::Idle);
        assert_eq!(gesture.offset(), 0.0);
    }

    #[test]
    fn test_release_directions() {
        let mut gesture = DragGesture::default();
        gesture.press(100.0);
        gesture.move_to(250.0);
        assert_eq!(gesture.release(100.0), DragOutcome::Previous);
        assert_eq!(gesture, DragGesture::Idle);

        gesture.press(250.0);
        gesture.move_to(100.0);
        assert_eq!(gesture.release(100.0), DragOutcome::Next);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut gesture = DragGesture::default();
        gesture.press(0.0);
        gesture.move_to(100.0);
        assert_eq!(gesture.release(100.0), DragOutcome::Stay);

        gesture.press(0.0);
        gesture.move_to(-100.0);
        assert_eq!(gesture.release(100.0), DragOutcome::Stay);
    }

    #[test]
    fn test_release_without_movement_or_press() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.release(50.0), DragOutcome::Stay);

        gesture.press(70.0);
        assert_eq!(gesture.release(50.0), DragOutcome::Stay);
        assert_eq!(gesture.offset(), 0.0);
    }
}
