//! Background animation state management.

use fervor_core::{AnimationSpeed, CELL_HEIGHT_PX, CELL_WIDTH_PX, ColorTheme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::animations::blob::Canvas;
use crate::animations::field::BlobField;
use crate::chars::{GRID_CROSS, GRID_HORIZONTAL, GRID_VERTICAL};
use crate::color::{Rgb, blend};

/// Default cap on concurrent blobs.
pub const DEFAULT_MAX_BLOBS: usize = 8;

/// Grid line spacing in canvas pixels.
const GRID_SPACING_PX: f32 = 50.0;

/// Grid line alpha.
const GRID_ALPHA: f32 = 0.04;

/// Most frames simulated in one redraw after a stall.
const MAX_CATCH_UP_FRAMES: u32 = 30;

/// Background animation state.
#[derive(Debug)]
pub struct BackgroundState {
    /// Live blobs.
    field: BlobField,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
    /// Last update time in milliseconds.
    last_update_ms: u64,
    /// Wall time not yet converted into whole frames.
    pending_ms: f32,
    /// Whether the initial population has been spawned.
    seeded: bool,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLOBS)
    }
}

impl BackgroundState {
    /// Create a new background state.
    pub fn new(max_blobs: usize) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(max_blobs, init_seed)
    }

    /// Create a background state with a fixed random seed.
    pub fn with_seed(max_blobs: usize, seed: u64) -> Self {
        Self {
            field: BlobField::new(Canvas::default(), max_blobs, seed),
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
            pending_ms: 0.0,
            seeded: false,
        }
    }

    /// Live blobs.
    pub fn field(&self) -> &BlobField {
        &self.field
    }

    /// Advance the simulation to `elapsed_ms` for a terminal area.
    ///
    /// Returns the number of frames simulated.
    pub fn advance(&mut self, area: Rect, elapsed_ms: u64, speed: AnimationSpeed) -> u32 {
        if area.width != self.last_width || area.height != self.last_height {
            self.field.resize(canvas_for(area));
            self.last_width = area.width;
            self.last_height = area.height;
            tracing::debug!(width = area.width, height = area.height, "background canvas resized");
        }

        if !self.seeded && !self.field.canvas().is_empty() {
            self.field.populate();
            self.seeded = true;
            self.last_update_ms = elapsed_ms;
            return 0;
        }

        // Convert wall time into whole display frames
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;
        self.pending_ms += delta_ms as f32;

        let frame_ms = speed.frame_ms();
        let mut frames = (self.pending_ms / frame_ms) as u32;
        if frames > MAX_CATCH_UP_FRAMES {
            frames = MAX_CATCH_UP_FRAMES;
            self.pending_ms = 0.0;
        } else {
            self.pending_ms -= frames as f32 * frame_ms;
        }

        for _ in 0..frames {
            self.field.step();
        }
        frames
    }

    /// Update and render the background to the frame.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        theme: ColorTheme,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.advance(area, elapsed_ms, speed);

        let accent = Rgb::from_u8(theme.rgb());
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| self.render_char(x, y, accent))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render a single background cell.
    fn render_char(&self, x: u16, y: u16, accent: Rgb) -> Span<'static> {
        let bg = self.cell_color(x, y, accent);
        let style = Style::new().bg(bg.to_color());

        let glyph = match (crosses_grid(x, CELL_WIDTH_PX), crosses_grid(y, CELL_HEIGHT_PX)) {
            (true, true) => GRID_CROSS,
            (true, false) => GRID_VERTICAL,
            (false, true) => GRID_HORIZONTAL,
            (false, false) => return Span::styled(" ", style),
        };
        let line = blend(bg, accent, GRID_ALPHA);
        Span::styled(glyph.to_string(), style.fg(line.to_color()))
    }

    /// Composite color of the cell at `(x, y)`: black, then every blob.
    pub fn cell_color(&self, x: u16, y: u16, accent: Rgb) -> Rgb {
        let px = (x as f32 + 0.5) * CELL_WIDTH_PX;
        let py = (y as f32 + 0.5) * CELL_HEIGHT_PX;

        self.field.iter().fold(Rgb::BLACK, |color, blob| {
            let alpha = blob.alpha_at(px, py);
            if alpha > 0.0 {
                blend(color, accent, alpha)
            } else {
                color
            }
        })
    }
}

fn canvas_for(area: Rect) -> Canvas {
    Canvas::new(
        area.width as f32 * CELL_WIDTH_PX,
        area.height as f32 * CELL_HEIGHT_PX,
    )
}

/// Whether the cell span `[i * cell, (i + 1) * cell)` contains a grid line.
fn crosses_grid(i: u16, cell_px: f32) -> bool {
    let start = i as f32 * cell_px;
    let next_line = (start / GRID_SPACING_PX).ceil() * GRID_SPACING_PX;
    next_line < start + cell_px
}
