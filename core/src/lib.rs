use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use error::*;
pub use evaluate::*;
pub use generator::*;
pub use reveal::*;
pub use scores::*;
pub use session::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod error;
mod evaluate;
mod generator;
mod reveal;
mod scores;
mod session;
mod tile;
mod timer;
mod types;

/// Per-cell integer: [`MINE`] or the number of mines among the 8 neighbours.
pub type CellValue = i8;

pub const MINE: CellValue = -1;

/// The three board presets a match can be played on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Beginner,
    Intermediate,
    Expert,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Beginner, Mode::Intermediate, Mode::Expert];

    pub const fn config(self) -> GameConfig {
        use Mode::*;
        match self {
            Beginner => GameConfig::new_unchecked((9, 9), 10),
            Intermediate => GameConfig::new_unchecked((16, 16), 40),
            Expert => GameConfig::new_unchecked((30, 16), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        use Mode::*;
        match self {
            Beginner => "beginner",
            Intermediate => "intermediate",
            Expert => "expert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode {0:?}, expected one of beginner, intermediate, expert")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

/// Dimensions and mine count of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that the board has at least one cell and room for every mine.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        if config.total_cells() == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines > config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(config)
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Cell values of a generated board. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<CellValue>,
    mine_count: CellCount,
}

impl Grid {
    /// Builds a grid by placing mines at `mine_coords` in order and
    /// incrementing every in-bounds non-mine neighbour once per mine.
    ///
    /// Duplicate coordinates are placed only once, so the resulting mine
    /// count may be lower than the number of coordinates given.
    pub(crate) fn with_mines(
        config: GameConfig,
        mine_coords: impl IntoIterator<Item = Coord2>,
    ) -> Self {
        let mut cells: Array2<CellValue> = Array2::zeros(config.size.to_nd_index());
        let mut mine_count: CellCount = 0;

        for coords in mine_coords {
            if cells[coords.to_nd_index()] == MINE {
                continue;
            }
            cells[coords.to_nd_index()] = MINE;
            mine_count += 1;

            for pos in NeighborIter::new(coords, config.size) {
                let value = &mut cells[pos.to_nd_index()];
                if *value != MINE {
                    *value += 1;
                }
            }
        }

        Self { cells, mine_count }
    }

    /// Builds a grid from explicit mine positions, validating every coordinate.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = GameConfig::new(size, mine_coords.len().try_into().unwrap_or(CellCount::MAX))?;
        if mine_coords
            .iter()
            .any(|&(x, y)| x >= config.width() || y >= config.height())
        {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::with_mines(config, mine_coords.iter().copied()))
    }

    pub fn size(&self) -> Coord2 {
        board_size(&self.cells)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn value(&self, coords: Coord2) -> CellValue {
        self[coords]
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self[coords] == MINE
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Every coordinate of the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl Index<Coord2> for Grid {
    type Output = CellValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
