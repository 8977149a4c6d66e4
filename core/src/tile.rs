use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// Everything a presentation layer needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub coords: Coord2,
    pub value: CellValue,
    pub visibility: Visibility,
    pub is_cursor: bool,
}

impl CellView {
    pub fn appearance(&self) -> Appearance {
        describe(self.value, self.visibility, self.is_cursor)
    }
}

/// Colour class of a cell, left to the frontend to map onto real colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Hidden,
    Flag,
    Empty,
    Number(u8),
    Exploded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub glyph: char,
    pub tone: Tone,
    pub focused: bool,
}

/// Maps a cell to its glyph and tone. An exploded mine never shows focus so
/// the cursor cannot hide it.
pub const fn describe(value: CellValue, visibility: Visibility, focused: bool) -> Appearance {
    use Visibility::*;

    let (glyph, tone, focused) = match visibility {
        Hidden => (' ', Tone::Hidden, focused),
        Flagged => ('⚑', Tone::Flag, focused),
        Revealed if value == MINE => ('*', Tone::Exploded, false),
        Revealed if value == 0 => (' ', Tone::Empty, focused),
        Revealed => {
            let count = value as u8;
            ((b'0' + count) as char, Tone::Number(count), focused)
        }
    };

    Appearance {
        glyph,
        tone,
        focused,
    }
}
