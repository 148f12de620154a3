//! Fixed-capacity arena of live blobs.

use fastrand::Rng;

use super::blob::{Blob, Canvas};

/// Number of slots in the arena, one bit each in the alive mask.
pub const ARENA_CAPACITY: usize = 64;

/// Per-frame probability of a spawn attempt while under the cap.
const SPAWN_CHANCE: f32 = 0.005;

/// Spawn attempts made when the field is (re)seeded.
const INITIAL_SPAWN_ATTEMPTS: usize = 4;

/// The live blob set.
///
/// Blobs live in fixed slots; `alive` has bit `i` set when slot `i` holds a
/// live blob. Stepping a frame never allocates.
#[derive(Debug)]
pub struct BlobField {
    slots: [Blob; ARENA_CAPACITY],
    alive: u64,
    max_blobs: usize,
    canvas: Canvas,
    rng: Rng,
}

impl BlobField {
    /// Create an empty field. `max_blobs` is clamped to the arena capacity.
    pub fn new(canvas: Canvas, max_blobs: usize, seed: u64) -> Self {
        Self {
            slots: [Blob::default(); ARENA_CAPACITY],
            alive: 0,
            max_blobs: max_blobs.min(ARENA_CAPACITY),
            canvas,
            rng: Rng::with_seed(seed),
        }
    }

    /// Make the initial spawn attempts.
    pub fn populate(&mut self) {
        for _ in 0..INITIAL_SPAWN_ATTEMPTS {
            self.try_spawn();
        }
    }

    /// Number of live blobs.
    pub fn len(&self) -> usize {
        self.alive.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }

    pub fn max_blobs(&self) -> usize {
        self.max_blobs
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Resync the canvas size. Live blobs keep their coordinates.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Iterate live blobs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Blob> {
        (0..ARENA_CAPACITY)
            .filter(|&slot| self.alive & (1 << slot) != 0)
            .map(|slot| &self.slots[slot])
    }

    /// Roll a candidate and insert it unless the field is full or it overlaps
    /// a live blob. A rejected candidate is dropped, not retried.
    pub fn try_spawn(&mut self) -> bool {
        if self.len() >= self.max_blobs || self.canvas.is_empty() {
            return false;
        }

        let candidate = Blob::spawn(&mut self.rng, self.canvas);
        self.insert(candidate)
    }

    /// Insert a blob into the first free slot, subject to the same cap and
    /// overlap rules as a spawn.
    pub fn insert(&mut self, blob: Blob) -> bool {
        if self.len() >= self.max_blobs {
            return false;
        }
        if self.iter().any(|live| live.overlaps(&blob)) {
            tracing::trace!(x = blob.x, y = blob.y, r = blob.radius, "blob spawn rejected");
            return false;
        }

        let slot = (!self.alive).trailing_zeros() as usize;
        if slot >= ARENA_CAPACITY {
            return false;
        }
        self.slots[slot] = blob;
        self.alive |= 1 << slot;
        true
    }

    /// Advance every live blob one frame, retire expired ones, then maybe
    /// spawn.
    pub fn step(&mut self) {
        for slot in 0..ARENA_CAPACITY {
            let bit = 1u64 << slot;
            if self.alive & bit == 0 {
                continue;
            }
            let blob = &mut self.slots[slot];
            blob.update();
            if blob.is_expired() {
                self.alive &= !bit;
            }
        }

        if self.len() < self.max_blobs && self.rng.f32() < SPAWN_CHANCE {
            self.try_spawn();
        }
    }
}
