//! A single soft radial glow and its fade schedule.

use fastrand::Rng;

/// Share of the canvas width, measured from each side, where blobs spawn.
const SIDE_MARGIN: f32 = 0.15;

/// Fraction of `max_lifetime` after which fade-out begins.
const FADE_OUT_AT: f32 = 0.8;

/// Opacity at or below which a fading blob counts as gone.
pub const OPACITY_EPSILON: f32 = 0.001;

/// Radial gradient stops as (distance / radius, alpha factor).
const GRADIENT_STOPS: [(f32, f32); 6] = [
    (0.0, 1.0),
    (0.2, 0.8),
    (0.4, 0.5),
    (0.6, 0.3),
    (0.8, 0.1),
    (1.0, 0.0),
];

/// Drawing surface dimensions in virtual pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Radius band a blob is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBand {
    Small,
    Medium,
    Large,
}

impl SizeBand {
    /// Weighted pick: 30 % small, 30 % medium, 40 % large.
    pub fn pick(roll: f32) -> Self {
        if roll < 0.3 {
            SizeBand::Small
        } else if roll < 0.6 {
            SizeBand::Medium
        } else {
            SizeBand::Large
        }
    }

    /// Radius range in pixels as (min, span).
    fn range(self) -> (f32, f32) {
        match self {
            SizeBand::Small => (100.0, 150.0),
            SizeBand::Medium => (250.0, 200.0),
            SizeBand::Large => (450.0, 300.0),
        }
    }

    /// Radius for a uniform roll in [0, 1).
    pub fn radius(self, roll: f32) -> f32 {
        let (min, span) = self.range();
        min + roll * span
    }
}

/// A soft-edged glow drawn on the background.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub target_opacity: f32,
    /// Opacity gained per frame while fading in.
    pub fade_in_speed: f32,
    /// Frames lived so far.
    pub lifetime: u32,
    pub max_lifetime: u32,
    pub fade_out_duration: u32,
    pub fading_out: bool,
    /// Frame at which fade-out began.
    pub fade_out_start: u32,
    /// Opacity when fade-out began.
    pub(crate) fade_from: f32,
}

impl Blob {
    /// Roll a new blob for the given canvas.
    pub fn spawn(rng: &mut Rng, canvas: Canvas) -> Self {
        let left_side = rng.bool();
        let margin = canvas.width * SIDE_MARGIN;
        let radius = SizeBand::pick(rng.f32()).radius(rng.f32());

        let x = if left_side {
            rng.f32() * margin
        } else {
            canvas.width - rng.f32() * margin
        };
        // May extend beyond the viewport vertically
        let y = rng.f32() * canvas.height * 1.5 - canvas.height * 0.25;

        Self {
            x,
            y,
            radius,
            opacity: 0.0,
            target_opacity: 0.4 + rng.f32() * 0.2,
            fade_in_speed: 0.001 + rng.f32() * 0.0005,
            lifetime: 0,
            max_lifetime: 800 + rng.u32(0..1000),
            fade_out_duration: 500 + rng.u32(0..400),
            fading_out: false,
            fade_out_start: 0,
            fade_from: 0.0,
        }
    }

    /// Advance the blob by one frame.
    pub fn update(&mut self) {
        self.lifetime += 1;

        if !self.fading_out && self.opacity < self.target_opacity {
            self.opacity = (self.opacity + self.fade_in_speed).min(self.target_opacity);
        }

        if !self.fading_out && self.lifetime as f32 > self.max_lifetime as f32 * FADE_OUT_AT {
            self.fading_out = true;
            self.fade_out_start = self.lifetime;
            self.fade_from = self.opacity;
        }

        if self.fading_out {
            let elapsed = (self.lifetime - self.fade_out_start) as f32;
            let progress = (elapsed / self.fade_out_duration.max(1) as f32).clamp(0.0, 1.0);
            self.opacity = (self.fade_from * (1.0 - ease_out_quad(progress))).max(0.0);
        }
    }

    /// Whether the blob should leave the live set.
    pub fn is_expired(&self) -> bool {
        (self.fading_out && self.opacity <= OPACITY_EPSILON)
            || self.lifetime > self.max_lifetime + self.fade_out_duration
    }

    /// Whether `other` sits too close to share the canvas with this blob.
    pub fn overlaps(&self, other: &Blob) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt() < (self.radius + other.radius) * 0.7
    }

    /// Alpha contributed at a point, zero outside the radius.
    pub fn alpha_at(&self, px: f32, py: f32) -> f32 {
        let dx = px - self.x;
        let dy = py - self.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= self.radius {
            return 0.0;
        }
        self.opacity * gradient_alpha(distance / self.radius)
    }
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Piecewise-linear lookup in the radial gradient.
pub fn gradient_alpha(t: f32) -> f32 {
    if t <= 0.0 {
        return GRADIENT_STOPS[0].1;
    }
    for pair in GRADIENT_STOPS.windows(2) {
        let (t0, a0) = pair[0];
        let (t1, a1) = pair[1];
        if t <= t1 {
            return a0 + (a1 - a0) * (t - t0) / (t1 - t0);
        }
    }
    0.0
}
