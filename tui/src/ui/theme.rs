//! Cell colours.

use ratatui::style::{Color, Modifier, Style};
use vimsweep_core::{Appearance, Tone};

const HIDDEN_BG: Color = Color::Rgb(46, 46, 46);
const FOCUS_BG: Color = Color::Rgb(105, 105, 105);
const MAROON: Color = Color::Rgb(128, 0, 0);

const fn number_color(count: u8) -> Color {
    match count {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::Magenta,
        5 => Color::White,
        6 => Color::Gray,
        7 => MAROON,
        _ => Color::Cyan,
    }
}

/// Style for one rendered cell.
pub fn cell_style(appearance: Appearance) -> Style {
    let base = match appearance.tone {
        Tone::Hidden => Style::default().bg(HIDDEN_BG),
        Tone::Flag => Style::default().fg(Color::Red).bg(HIDDEN_BG),
        Tone::Empty => Style::default(),
        Tone::Number(count) => Style::default()
            .fg(number_color(count))
            .add_modifier(Modifier::BOLD),
        Tone::Exploded => Style::default().fg(Color::Black).bg(Color::Red),
    };

    if appearance.focused {
        base.bg(FOCUS_BG)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimsweep_core::{MINE, Visibility, describe};

    #[test]
    fn numbers_get_distinct_colours() {
        let one = cell_style(describe(1, Visibility::Revealed, false));
        let three = cell_style(describe(3, Visibility::Revealed, false));

        assert_eq!(one.fg, Some(Color::Blue));
        assert_eq!(three.fg, Some(Color::Red));
    }

    #[test]
    fn focus_overrides_background() {
        let hidden = cell_style(describe(0, Visibility::Hidden, true));
        assert_eq!(hidden.bg, Some(FOCUS_BG));

        let flag = cell_style(describe(2, Visibility::Flagged, true));
        assert_eq!(flag.fg, Some(Color::Red));
        assert_eq!(flag.bg, Some(FOCUS_BG));
    }

    #[test]
    fn exploded_mine_stays_red_under_cursor() {
        let style = cell_style(describe(MINE, Visibility::Revealed, true));

        assert_eq!(style.bg, Some(Color::Red));
    }
}
