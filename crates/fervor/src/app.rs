use std::time::{Duration, Instant};

use chrono::{DateTime, FixedOffset, Utc};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use fervor_background::BackgroundState;
use fervor_carousel::{CardDeck, Carousel, CarouselConfig, indicator_hit, indicator_line};
use fervor_config::{Config, ConfigError};
use fervor_core::{AnimationSpeed, CELL_WIDTH_PX, ColorTheme, Interval, TimeLeft};
use fervor_fonts::{GLYPH_HEIGHT, build_countdown_art, countdown_groups, group_width};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::content::{GalleryImage, SPEAKERS, Speaker};

/// Event poll timeout, roughly 30 redraws a second.
const POLL_TIMEOUT: Duration = Duration::from_millis(33);

/// Countdown refresh period.
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Labels under the countdown groups.
const COUNTDOWN_LABELS: [&str; 4] = ["DAYS", "HOURS", "MINUTES", "SECONDS"];

/// Width of the separator between countdown groups, padding included.
const SEPARATOR_WIDTH: usize = 5;

/// Which carousel has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Gallery,
    Speakers,
}

impl Section {
    pub fn next(self) -> Self {
        match self {
            Section::Gallery => Section::Speakers,
            Section::Speakers => Section::Gallery,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Gallery => "GALLERY",
            Section::Speakers => "SPEAKERS",
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    color_theme: ColorTheme,
    animation_speed: AnimationSpeed,
    show_background: bool,
    background: BackgroundState,
    gallery: Carousel<GalleryImage>,
    speakers: Carousel<Speaker>,
    /// Auto-advance period at medium speed.
    base_advance: Duration,
    section: Section,
    event_start: DateTime<FixedOffset>,
    time_left: TimeLeft,
    countdown: Interval,
    started: Instant,
    /// Where the deck was last drawn, for mouse hit tests.
    deck_area: Rect,
    /// Where the indicator dots were last drawn.
    dots_area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, images: Vec<GalleryImage>) -> Result<Self, ConfigError> {
        let event_start = config.event_start()?;
        let base_advance = Duration::from_secs(config.carousel.auto_advance_secs);

        let gallery_config = CarouselConfig {
            auto_advance: config.animation_speed.advance_period(base_advance),
            ..CarouselConfig::gallery()
        };
        let gallery =
            Carousel::new(images, gallery_config).with_start_index(config.carousel.start_index);
        let speakers = Carousel::new(SPEAKERS.to_vec(), CarouselConfig::speakers());

        Ok(Self {
            running: false,
            color_theme: config.color_theme,
            animation_speed: config.animation_speed,
            show_background: config.background,
            background: BackgroundState::new(config.max_blobs),
            gallery,
            speakers,
            base_advance,
            section: Section::default(),
            event_start,
            time_left: TimeLeft::between(&event_start, &Utc::now()),
            countdown: Interval::new(COUNTDOWN_PERIOD),
            started: Instant::now(),
            deck_area: Rect::default(),
            dots_area: Rect::default(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let now = self.elapsed_ms();
        self.countdown.start(now);
        self.gallery.start(now);
        tracing::info!(
            photos = self.gallery.len(),
            event_start = %self.event_start,
            "event screen started"
        );

        while self.running {
            self.tick(self.elapsed_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.countdown.stop();
        self.gallery.stop();
        tracing::info!("event screen closed");
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Fire due timers.
    fn tick(&mut self, now_ms: u64) {
        if self.countdown.poll(now_ms) > 0 {
            self.refresh_countdown();
        }
        if self.gallery.tick(now_ms) {
            tracing::debug!(index = self.gallery.current_index(), "gallery auto-advanced");
        }
    }

    fn refresh_countdown(&mut self) {
        let was_over = self.time_left.is_over();
        self.time_left = TimeLeft::between(&self.event_start, &Utc::now());
        if self.time_left.is_over() && !was_over {
            tracing::info!("countdown reached the event start");
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let color = self.color_theme.color();

        if self.show_background {
            let elapsed = self.elapsed_ms();
            self.background
                .render(frame, self.color_theme, elapsed, self.animation_speed);
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(GLYPH_HEIGHT as u16), // Countdown digits
            Constraint::Length(1), // Unit labels
            Constraint::Length(1), // Event date
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Section tabs
            Constraint::Min(6), // Card deck
            Constraint::Length(1), // Indicator dots
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let title = Line::from(vec!["FERVOR".bold().fg(color), " 2025".bold()]).centered();
        frame.render_widget(title, chunks[1]);

        // Render big countdown
        let art: Vec<Line> = build_countdown_art(&self.time_left)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect();
        frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[3]);

        let labels = Line::from(countdown_labels(&self.time_left)).dark_gray().centered();
        frame.render_widget(labels, chunks[4]);

        let tagline = if self.time_left.is_over() {
            Line::from("The event is happening now".bold().fg(color))
        } else {
            let date = self.event_start.format("%B %-d, %Y · %-I:%M %p");
            Line::from(Span::raw(date.to_string()).gray())
        };
        frame.render_widget(tagline.centered(), chunks[5]);

        frame.render_widget(self.tabs_line(), chunks[7]);

        self.deck_area = chunks[8];
        self.dots_area = chunks[9];
        let accent = self.color_theme.rgb();
        let (len, current) = match self.section {
            Section::Gallery => {
                if self.gallery.is_empty() {
                    let empty = Paragraph::new("No photos available")
                        .dark_gray()
                        .alignment(Alignment::Center);
                    frame.render_widget(empty, chunks[8]);
                } else {
                    frame.render_widget(CardDeck::new(&self.gallery, accent), chunks[8]);
                }
                (self.gallery.len(), self.gallery.current_index())
            }
            Section::Speakers => {
                frame.render_widget(CardDeck::new(&self.speakers, accent), chunks[8]);
                (self.speakers.len(), self.speakers.current_index())
            }
        };
        frame.render_widget(
            indicator_line(len, current, accent, chunks[9].width),
            chunks[9],
        );

        let caption = Line::from(self.caption()).gray().centered();
        frame.render_widget(caption, chunks[10]);

        // Render help text
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "←/→".bold().fg(color),
            " step  ".dark_gray(),
            "tab".bold().fg(color),
            " section  ".dark_gray(),
            "space".bold().fg(color),
            self.auto_advance_label().dark_gray(),
            "b".bold().fg(color),
            " background  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "s".bold().fg(color),
            " speed".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[11]);
    }

    /// Help text for the space key.
    fn auto_advance_label(&self) -> &'static str {
        if self.gallery.is_running() && !self.gallery.is_suspended() {
            " pause  "
        } else {
            " resume  "
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let color = self.color_theme.color();
        let tab = |section: Section| -> Span<'static> {
            let label = format!(" {} ", section.label());
            if section == self.section {
                Span::styled(label, Style::new().fg(color).bold().reversed())
            } else {
                Span::styled(label, Style::new().dark_gray())
            }
        };
        Line::from(vec![tab(Section::Gallery), "  ".into(), tab(Section::Speakers)]).centered()
    }

    /// One line describing the front card.
    fn caption(&self) -> String {
        match self.section {
            Section::Gallery => self
                .gallery
                .current()
                .map(|image| image.alt.clone())
                .unwrap_or_default(),
            Section::Speakers => self
                .speakers
                .current()
                .map(|s| format!("{} · {}", s.name, s.time))
                .unwrap_or_default(),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.release_drag(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Left) => self.step(false),
            (_, KeyCode::Right) => self.step(true),
            (_, KeyCode::Tab | KeyCode::BackTab) => self.switch_section(),
            (_, KeyCode::Char(ch @ '1'..='9')) => {
                if let Some(index) = ch.to_digit(10) {
                    self.select(index as usize - 1);
                }
            }
            (_, KeyCode::Char(' ')) => self.toggle_auto_advance(),
            (_, KeyCode::Char('b')) => self.show_background = !self.show_background,
            (_, KeyCode::Char('c')) => self.color_theme = self.color_theme.next(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Turns pointer events over the deck into drag gestures.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        let x = column_to_px(mouse.column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.deck_area.contains(position) {
                    match self.section {
                        Section::Gallery => self.gallery.press(x),
                        Section::Speakers => self.speakers.press(x),
                    }
                } else if self.dots_area.contains(position) {
                    let len = match self.section {
                        Section::Gallery => self.gallery.len(),
                        Section::Speakers => self.speakers.len(),
                    };
                    if let Some(index) = indicator_hit(self.dots_area, len, mouse.column) {
                        self.select(index);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.deck_area.contains(position) {
                    match self.section {
                        Section::Gallery => self.gallery.drag(x),
                        Section::Speakers => self.speakers.drag(x),
                    }
                } else {
                    self.release_drag();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.release_drag(),
            _ => {}
        }
    }

    fn step(&mut self, forward: bool) {
        let changed = match (self.section, forward) {
            (Section::Gallery, true) => self.gallery.advance(),
            (Section::Gallery, false) => self.gallery.retreat(),
            (Section::Speakers, true) => self.speakers.advance(),
            (Section::Speakers, false) => self.speakers.retreat(),
        };
        self.log_selection(changed);
    }

    fn select(&mut self, index: usize) {
        let changed = match self.section {
            Section::Gallery => self.gallery.select(index),
            Section::Speakers => self.speakers.select(index),
        };
        self.log_selection(changed);
    }

    fn release_drag(&mut self) {
        let changed = match self.section {
            Section::Gallery => self.gallery.release(),
            Section::Speakers => self.speakers.release(),
        };
        self.log_selection(changed);
    }

    fn log_selection(&self, changed: bool) {
        if !changed {
            return;
        }
        let index = match self.section {
            Section::Gallery => self.gallery.current_index(),
            Section::Speakers => self.speakers.current_index(),
        };
        tracing::debug!(section = self.section.label(), index, "card selected");
    }

    /// Switch focus, dropping any drag in progress.
    fn switch_section(&mut self) {
        self.release_drag();
        self.section = self.section.next();
    }

    fn toggle_auto_advance(&mut self) {
        let suspended = !self.gallery.is_suspended();
        self.gallery.set_suspended(suspended);
        tracing::debug!(suspended, "gallery auto-advance toggled");
    }

    /// Cycle animation speed, rescaling the auto-advance period.
    fn cycle_speed(&mut self) {
        self.animation_speed = self.animation_speed.next();
        let period = self.animation_speed.advance_period(self.base_advance);
        let now = self.elapsed_ms();
        self.gallery.set_auto_advance(period, now);
        tracing::debug!(speed = ?self.animation_speed, ?period, "animation speed changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Canvas x of the centre of a terminal column.
fn column_to_px(column: u16) -> f32 {
    (column as f32 + 0.5) * CELL_WIDTH_PX
}

/// Unit labels centred under each countdown group, matching the art's width.
fn countdown_labels(left: &TimeLeft) -> String {
    let groups = countdown_groups(left);
    let mut line = String::new();
    for (i, (group, label)) in groups.iter().zip(COUNTDOWN_LABELS).enumerate() {
        if i > 0 {
            line.push_str(&" ".repeat(SEPARATOR_WIDTH));
        }
        let width = group_width(group.len());
        line.push_str(&format!("{label:^width$}"));
    }
    line
}
