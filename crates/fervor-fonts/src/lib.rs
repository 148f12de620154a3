//! Block digit font for the fervor countdown.

use fervor_core::TimeLeft;

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Block digits (5 lines tall, 5 chars wide).
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

/// Group separator (5 lines tall, 3 chars wide).
pub const SEPARATOR: [&str; GLYPH_HEIGHT] = ["   ", " ▪ ", "   ", " ▪ ", "   "];

/// Append the glyph row for every digit of `digits`.
fn push_number(line: &mut String, digits: &str, row: usize) {
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let glyph = ch.to_digit(10).map_or("     ", |d| DIGITS[d as usize][row]);
        line.push_str(glyph);
    }
}

/// Zero-padded digit groups for days, hours, minutes and seconds.
///
/// Days widen past two digits when needed.
pub fn countdown_groups(left: &TimeLeft) -> [String; 4] {
    [
        format!("{:02}", left.days),
        format!("{:02}", left.hours),
        format!("{:02}", left.minutes),
        format!("{:02}", left.seconds),
    ]
}

/// Build the big `DD:HH:MM:SS` countdown.
///
/// Returns [`GLYPH_HEIGHT`] lines of equal width.
pub fn build_countdown_art(left: &TimeLeft) -> Vec<String> {
    let groups = countdown_groups(left);

    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                    line.push_str(SEPARATOR[row]);
                    line.push(' ');
                }
                push_number(&mut line, group, row);
            }
            line
        })
        .collect()
}

/// Display width in cells of a digit group.
pub fn group_width(digits: usize) -> usize {
    if digits == 0 { 0 } else { digits * 5 + (digits - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_are_five_wide() {
        for digit in DIGITS {
            for row in digit {
                assert_eq!(row.chars().count(), 5);
            }
        }
    }

    #[test]
    fn test_countdown_lines_have_equal_width() {
        let left = TimeLeft {
            days: 2,
            hours: 10,
            minutes: 5,
            seconds: 59,
            ..TimeLeft::default()
        };
        let art = build_countdown_art(&left);
        assert_eq!(art.len(), GLYPH_HEIGHT);

        // Four groups of two digits and three separators
        let expected = 4 * group_width(2) + 3 * 5;
        for line in &art {
            assert_eq!(line.chars().count(), expected);
        }
    }

    #[test]
    fn test_groups_are_zero_padded() {
        let left = TimeLeft {
            days: 123,
            hours: 1,
            minutes: 0,
            seconds: 9,
            ..TimeLeft::default()
        };
        assert_eq!(countdown_groups(&left), ["123", "01", "00", "09"]);
        let art = build_countdown_art(&left);
        let expected = group_width(3) + 3 * group_width(2) + 3 * 5;
        assert_eq!(art[0].chars().count(), expected);
    }

    #[test]
    fn test_first_row_of_zero_countdown() {
        let art = build_countdown_art(&TimeLeft::default());
        assert!(art[0].starts_with("█████ █████"));
        assert_eq!(art[1].matches('▪').count(), 3);
    }
}
