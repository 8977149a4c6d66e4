use super::*;

/// Places mines at a predetermined list of coordinates, every time.
///
/// Useful for replaying a known board and for deterministic tests. The mine
/// count requested by the config is ignored in favour of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGridGenerator {
    mines: Vec<Coord2>,
}

impl FixedGridGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl GridGenerator for FixedGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        if config.mines as usize != self.mines.len() {
            log::warn!(
                "Fixed layout has {} mines, config requested {}",
                self.mines.len(),
                config.mines
            );
        }
        Grid::from_mine_coords(config.size, &self.mines)
    }
}
