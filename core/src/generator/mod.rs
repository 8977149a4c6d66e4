use crate::*;
use rand::Rng;
use rand::seq::SliceRandom;

pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of fresh grids for a session. Implementations decide where the
/// mines go; the session only asks for a grid matching its preset.
pub trait GridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid>;
}

/// Builds a `width` x `height` grid with `mine_count` mines placed uniformly at
/// random: every coordinate is listed, the list is shuffled with `rng` and the
/// first `mine_count` entries become mines.
pub fn generate<R: Rng + ?Sized>(
    width: Coord,
    height: Coord,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<Grid> {
    let config = GameConfig::new((width, height), mine_count)?;

    let mut coords: Vec<Coord2> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();
    coords.shuffle(rng);

    let grid = Grid::with_mines(config, coords.into_iter().take(mine_count.into()));
    log::debug!(
        "Generated {}x{} grid with {} mines",
        width,
        height,
        grid.mine_count()
    );
    Ok(grid)
}
