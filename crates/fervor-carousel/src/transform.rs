//! Offset and transform math for stacked cards.

use std::time::Duration;

/// Tuning for one carousel. Distances are in virtual canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Horizontal distance between neighbouring cards.
    pub spacing_px: f32,
    /// Depth pushed back per step away from the centre.
    pub depth_px: f32,
    /// Y-axis rotation per step, in degrees.
    pub angle_deg: f32,
    /// Scale lost per step.
    pub shrink: f32,
    pub scale_floor: f32,
    /// Opacity lost per step.
    pub fade: f32,
    pub opacity_floor: f32,
    /// Brightness lost per step.
    pub dim: f32,
    /// Blur radius gained per step.
    pub blur_step: f32,
    /// Cards further than this from the centre are not rendered.
    pub visible_radius: Option<u32>,
    /// Share of the live drag distance applied to every card.
    pub drag_factor: f32,
    /// Drag distance that commits a step on release.
    pub drag_threshold_px: f32,
    /// Front card width before scaling.
    pub card_width_px: f32,
    pub auto_advance: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::gallery()
    }
}

impl CarouselConfig {
    /// Photo gallery: tight spacing, only two cards either side.
    pub fn gallery() -> Self {
        Self {
            spacing_px: 220.0,
            depth_px: 200.0,
            angle_deg: 25.0,
            shrink: 0.15,
            scale_floor: 0.1,
            fade: 0.2,
            opacity_floor: 0.3,
            dim: 0.2,
            blur_step: 0.5,
            visible_radius: Some(2),
            drag_factor: 0.0,
            drag_threshold_px: 100.0,
            card_width_px: 240.0,
            auto_advance: Duration::from_secs(5),
        }
    }

    /// Speaker cards: wider spacing, live drag nudge, lighter threshold.
    pub fn speakers() -> Self {
        Self {
            spacing_px: 280.0,
            blur_step: 1.0,
            visible_radius: None,
            drag_factor: 0.3,
            drag_threshold_px: 50.0,
            card_width_px: 280.0,
            ..Self::gallery()
        }
    }
}

/// Signed shortest distance from `current` to `index` around a ring of
/// `len` items.
pub fn circular_offset(index: usize, current: usize, len: usize) -> i32 {
    if len == 0 {
        return 0;
    }

    let len_i = len as i32;
    let half = len as f32 / 2.0;
    let raw = index as i32 - current as i32;

    if raw as f32 > half {
        raw - len_i
    } else if (raw as f32) < -half {
        raw + len_i
    } else {
        raw
    }
}

/// Visual placement of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_z: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub brightness: f32,
    pub blur: f32,
}

impl CardTransform {
    /// Transform for a card `offset` steps from the centre while the pointer
    /// has been dragged `drag_offset` pixels. `None` means hidden.
    pub fn derive(offset: i32, drag_offset: f32, config: &CarouselConfig) -> Option<Self> {
        let distance = offset.unsigned_abs();
        if config.visible_radius.is_some_and(|radius| distance > radius) {
            return None;
        }

        let o = offset as f32;
        let d = distance as f32;
        Some(Self {
            translate_x: o * config.spacing_px + drag_offset * config.drag_factor,
            translate_z: -d * config.depth_px,
            rotate_y_deg: o * -config.angle_deg,
            scale: (1.0 - d * config.shrink).max(config.scale_floor),
            opacity: (1.0 - d * config.fade).max(config.opacity_floor),
            brightness: (1.0 - d * config.dim).max(0.0),
            blur: d * config.blur_step,
        })
    }
}
