use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Pending -> Playable
/// - Playable -> Won
/// - Playable -> Lost
///
/// Won and Lost are final for the grid they were reached on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No grid exists yet
    #[default]
    Pending,
    /// Safe cells remain to be revealed
    Playable,
    /// Every safe cell is revealed and no mine is
    Won,
    /// A mine was revealed
    Lost,
}

impl Status {
    /// Indicates the match has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn name(self) -> &'static str {
        use Status::*;
        match self {
            Pending => "pending",
            Playable => "playable",
            Won => "won",
            Lost => "lost",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a board. A revealed mine means [`Status::Lost`] no matter what
/// else is on the board; otherwise any safe cell that is not revealed keeps
/// the match [`Status::Playable`].
pub fn evaluate(grid: &Grid, visibility: &VisibilityBoard) -> Status {
    let mut has_unrevealed = false;

    for ((x, y), cell) in visibility.indexed_iter() {
        let is_mine = grid.is_mine((x as Coord, y as Coord));
        match (is_mine, cell.is_revealed()) {
            (true, true) => return Status::Lost,
            (false, false) => has_unrevealed = true,
            _ => {}
        }
    }

    if has_unrevealed {
        Status::Playable
    } else {
        Status::Won
    }
}
