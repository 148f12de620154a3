//! Terminal rendering of a carousel as a stacked card deck.

use fervor_core::CELL_WIDTH_PX;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::carousel::{CardPosition, Carousel};

/// Smallest card, in cells, worth drawing.
const MIN_CARD_CELLS: i32 = 3;

/// Text shown on a card.
pub trait CardContent {
    /// Border title.
    fn title(&self) -> &str;

    /// Body lines.
    fn body(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Widget drawing every visible card of a carousel, back to front.
#[derive(Debug)]
pub struct CardDeck<'a, T> {
    carousel: &'a Carousel<T>,
    accent: (u8, u8, u8),
}

impl<'a, T> CardDeck<'a, T> {
    pub fn new(carousel: &'a Carousel<T>, accent: (u8, u8, u8)) -> Self {
        Self { carousel, accent }
    }
}

impl<T: CardContent> Widget for CardDeck<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.carousel.is_empty() {
            return;
        }

        let config = self.carousel.config();
        let centre = area.x as f32 + area.width as f32 / 2.0;

        for position in self.carousel.positions() {
            let t = position.transform;
            let width = (config.card_width_px * t.scale / CELL_WIDTH_PX).round();
            let height = (area.height as f32 * t.scale).round();
            let x = centre + t.translate_x / CELL_WIDTH_PX - width / 2.0;
            let y = area.y as f32 + (area.height as f32 - height) / 2.0;

            let Some(card_area) = clip(area, x, y, width, height) else {
                continue;
            };
            let Some(item) = self.carousel.items().get(position.index) else {
                continue;
            };
            self.render_card(item, &position, card_area, buf);
        }
    }
}

impl<T: CardContent> CardDeck<'_, T> {
    fn render_card(&self, item: &T, position: &CardPosition, area: Rect, buf: &mut Buffer) {
        let t = position.transform;
        let intensity = (t.opacity * t.brightness).clamp(0.0, 1.0);
        let border = scale_rgb(self.accent, intensity);
        let text = scale_rgb((235, 235, 235), intensity);

        // Cards lean towards the centre
        let alignment = match position.offset {
            0 => Alignment::Center,
            o if o > 0 => Alignment::Left,
            _ => Alignment::Right,
        };

        let mut text_style = Style::new().fg(text);
        if t.blur > 0.0 {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let block = Block::bordered()
            .border_type(if position.offset == 0 {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::new().fg(border))
            .title(Line::from(item.title().to_string()).style(Style::new().fg(border).bold()))
            .title_alignment(alignment)
            .style(Style::new().bg(Color::Black));

        let body: Vec<Line> = item
            .body()
            .into_iter()
            .map(|line| Line::from(line).style(text_style))
            .collect();

        Clear.render(area, buf);
        Paragraph::new(body)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Intersect a float rectangle with `area`, dropping slivers.
fn clip(area: Rect, x: f32, y: f32, width: f32, height: f32) -> Option<Rect> {
    let left = (x.round() as i32).max(area.left() as i32);
    let top = (y.round() as i32).max(area.top() as i32);
    let right = ((x + width).round() as i32).min(area.right() as i32);
    let bottom = ((y + height).round() as i32).min(area.bottom() as i32);

    if right - left < MIN_CARD_CELLS || bottom - top < MIN_CARD_CELLS {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn scale_rgb((r, g, b): (u8, u8, u8), factor: f32) -> Color {
    Color::Rgb(
        (r as f32 * factor).round() as u8,
        (g as f32 * factor).round() as u8,
        (b as f32 * factor).round() as u8,
    )
}

/// Cells taken by one indicator dot.
const DOT_CELLS: usize = 2;

/// Indicator dots, one per item, two cells each, for a row `width` cells
/// wide. The row is centred when it fits and left-aligned otherwise.
pub fn indicator_line(
    len: usize,
    current: usize,
    accent: (u8, u8, u8),
    width: u16,
) -> Line<'static> {
    let (r, g, b) = accent;
    let spans: Vec<Span> = (0..len)
        .map(|i| {
            if i == current {
                Span::styled("● ", Style::new().fg(Color::Rgb(r, g, b)).bold())
            } else {
                "· ".dark_gray()
            }
        })
        .collect();
    let line = Line::from(spans);
    if len.saturating_mul(DOT_CELLS) > width as usize {
        line.left_aligned()
    } else {
        line.centered()
    }
}

/// Which indicator dot, if any, sits under `column` when the dots are drawn
/// by [`indicator_line`] in `area`.
pub fn indicator_hit(area: Rect, len: usize, column: u16) -> Option<usize> {
    let total = len.saturating_mul(DOT_CELLS);
    let width = area.width as usize;
    let start = area.x as usize + width.saturating_sub(total) / 2;
    let end = start + total.min(width);
    let column = column as usize;
    if column < start || column >= end {
        return None;
    }
    let index = (column - start) / DOT_CELLS;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::CarouselConfig;

    struct Card(&'static str);

    impl CardContent for Card {
        fn title(&self) -> &str {
            self.0
        }

        fn body(&self) -> Vec<String> {
            vec![format!("about {}", self.0)]
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn deck() -> Carousel<Card> {
        Carousel::new(
            vec![Card("alpha"), Card("bravo"), Card("charlie")],
            CarouselConfig::speakers(),
        )
        .with_start_index(1)
    }

    #[test]
    fn test_front_card_drawn_on_top() {
        let area = Rect::new(0, 0, 120, 16);
        let mut buf = Buffer::empty(area);
        let carousel = deck();
        CardDeck::new(&carousel, (196, 255, 13)).render(area, &mut buf);

        let top = row(&buf, 0);
        assert!(top.contains("bravo"));
        assert!(top.contains('┏'));
        assert!(row(&buf, 1).contains("about bravo"));
    }

    #[test]
    fn test_side_cards_visible() {
        let area = Rect::new(0, 0, 160, 16);
        let mut buf = Buffer::empty(area);
        let carousel = deck();
        CardDeck::new(&carousel, (196, 255, 13)).render(area, &mut buf);

        let text: String = (0..16).map(|y| row(&buf, y)).collect();
        assert!(text.contains("alpha"));
        assert!(text.contains("charlie"));
    }

    #[test]
    fn test_empty_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        let carousel = deck();
        CardDeck::new(&carousel, (196, 255, 13)).render(area, &mut buf);
        assert_eq!(buf.area, area);
    }

    #[test]
    fn test_clip_drops_slivers() {
        let area = Rect::new(0, 0, 50, 10);
        assert_eq!(clip(area, -10.0, 0.0, 12.0, 10.0), None);
        assert_eq!(
            clip(area, -10.0, 0.0, 20.0, 10.0),
            Some(Rect::new(0, 0, 10, 10))
        );
        assert_eq!(clip(area, 45.0, 2.0, 20.0, 6.0), Some(Rect::new(45, 2, 5, 6)));
    }

    #[test]
    fn test_indicator_hit() {
        let area = Rect::new(0, 20, 20, 1);
        // 5 dots take 10 cells starting at column 5
        assert_eq!(indicator_hit(area, 5, 4), None);
        assert_eq!(indicator_hit(area, 5, 5), Some(0));
        assert_eq!(indicator_hit(area, 5, 6), Some(0));
        assert_eq!(indicator_hit(area, 5, 7), Some(1));
        assert_eq!(indicator_hit(area, 5, 14), Some(4));
        assert_eq!(indicator_hit(area, 5, 15), None);
    }

    #[test]
    fn test_indicator_hit_on_overflowing_row() {
        // 40 dots need 80 cells, only 30 are drawn from the left edge
        let area = Rect::new(10, 5, 30, 1);
        assert_eq!(indicator_hit(area, 40, 9), None);
        assert_eq!(indicator_hit(area, 40, 10), Some(0));
        assert_eq!(indicator_hit(area, 40, 39), Some(14));
        assert_eq!(indicator_hit(area, 40, 40), None);

        let line = indicator_line(40, 0, (196, 255, 13), area.width);
        assert_eq!(line.alignment, Some(Alignment::Left));

        let mut buf = Buffer::empty(area);
        line.render(area, &mut buf);
        assert_eq!(buf[(10, 5)].symbol(), "●");
    }

    #[test]
    fn test_indicator_hit_near_edge_of_screen() {
        let area = Rect::new(u16::MAX - 20, 0, 20, 1);
        assert_eq!(indicator_hit(area, usize::MAX, u16::MAX - 20), Some(0));
        assert_eq!(indicator_hit(area, 3, u16::MAX - 1), None);
        assert_eq!(indicator_hit(area, 3, u16::MAX - 13), Some(0));
    }

    #[test]
    fn test_indicator_line_marks_current() {
        let line = indicator_line(3, 1, (196, 255, 13), 20);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "· ● · ");
    }
}
