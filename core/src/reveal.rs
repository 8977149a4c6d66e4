use std::collections::{BTreeSet, VecDeque};

use ndarray::Array2;

use crate::*;

/// Visibility of every cell, indexed like the [`Grid`] it belongs to.
pub type VisibilityBoard = Array2<Visibility>;

/// Reveals `coords` and flood-fills outward from it.
///
/// Cells are processed breadth first. Every dequeued cell becomes
/// [`Visibility::Revealed`], even if it was flagged. Only cells with a value of
/// zero expand, and they only enqueue neighbours that are still
/// [`Visibility::Hidden`], so flags next to the flood are left alone. Each
/// cell is enqueued at most once.
///
/// The caller must make sure `coords` is on the board and not already revealed.
pub fn reveal(grid: &Grid, visibility: &mut VisibilityBoard, coords: Coord2) {
    let mut queued = BTreeSet::from([coords]);
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        visibility[visit_coords.to_nd_index()] = Visibility::Revealed;

        let value = grid.value(visit_coords);
        log::trace!("Revealed cell at {:?}, value: {}", visit_coords, value);

        // numbered cells and mines are the boundary of the flood
        if value != 0 {
            continue;
        }

        for pos in grid.iter_neighbors(visit_coords) {
            if visibility[pos.to_nd_index()] == Visibility::Hidden && queued.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }

    log::debug!("Reveal at {:?} opened {} cells", coords, queued.len());
}
