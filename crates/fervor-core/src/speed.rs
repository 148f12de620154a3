//! Global animation pacing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How fast background frames and carousel auto-advance tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Wall-clock length of one background animation frame.
    ///
    /// Medium matches a 60 Hz display refresh.
    pub fn frame_ms(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 1000.0 / 40.0,
            AnimationSpeed::Medium => 1000.0 / 60.0,
            AnimationSpeed::Fast => 1000.0 / 90.0,
        }
    }

    /// Scale a base auto-advance period for this speed.
    pub fn advance_period(self, base: Duration) -> Duration {
        match self {
            AnimationSpeed::Slow => base.mul_f32(1.5),
            AnimationSpeed::Medium => base,
            AnimationSpeed::Fast => base.mul_f32(0.6),
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_is_sixty_hertz() {
        let frame = AnimationSpeed::Medium.frame_ms();
        assert!((frame - 16.666_666).abs() < 0.001);
    }

    #[test]
    fn test_medium_keeps_base_period() {
        let base = Duration::from_secs(5);
        assert_eq!(AnimationSpeed::Medium.advance_period(base), base);
        assert!(AnimationSpeed::Fast.advance_period(base) < base);
        assert!(AnimationSpeed::Slow.advance_period(base) > base);
    }
}
