//! Border-seeded flood fill separating doomed space from territory

use crate::io::progress::SweepProgress;
use crate::spatial::board::{Board, BoundingBox, CellStatus};
use crate::spatial::neighbours::orthogonal_neighbours;
use bitvec::prelude::*;

/// Tracks which cells have already been pushed onto the flood stack
///
/// Popping an already-doomed cell is harmless, but the mask keeps the work
/// list from growing past the cell count on dense open regions.
#[derive(Clone, Debug)]
pub struct DoomMask {
    bits: BitVec,
}

impl DoomMask {
    /// Create a mask covering `cell_count` cells, all unseen
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Record a push, returning `false` when the cell was already seen
    ///
    /// Out-of-range indices count as already seen; the adjacency contract
    /// keeps real indices in range anyway.
    pub fn mark(&mut self, index: usize) -> bool {
        if self.bits.get(index).as_deref() == Some(&false) {
            self.bits.set(index, true);
            true
        } else {
            false
        }
    }
}

/// Flood outward from `seed`, marking every reachable open cell doomed
///
/// Explicit work-list traversal with stack semantics: pop a cell, mark it
/// doomed, push its open in-box neighbours that the mask has not seen.
/// Iterative on purpose; recursion depth would track region size on large
/// boards. Seeds that are no longer open are a no-op, which is what makes
/// repeated seeding from the box border idempotent.
pub fn flood_doomed(board: &mut Board, bounds: &BoundingBox, seed: usize, mask: &mut DoomMask) {
    if board.status(seed) != Some(CellStatus::Open) {
        return;
    }

    let mut work_list = vec![seed];
    mask.mark(seed);

    while let Some(current) = work_list.pop() {
        board.set_status(current, CellStatus::Doomed);

        for neighbour in orthogonal_neighbours(current, board.width(), board.height()) {
            let x = board.x_of(neighbour);
            let y = board.y_of(neighbour);
            if board.status(neighbour) == Some(CellStatus::Open)
                && bounds.contains(x, y)
                && mask.mark(neighbour)
            {
                work_list.push(neighbour);
            }
        }
    }
}

/// Seed the flood from every cell on the bounding box border
///
/// Sweeps the top and bottom rows across the full column range, then the
/// left and right columns across the full row range. Corners come up twice;
/// the second visit finds the cell no longer open and falls through. The
/// mask is shared across seeds, which is sound because every pushed cell is
/// doomed before its flood call returns.
pub fn doom_border_reachable(
    board: &mut Board,
    bounds: &BoundingBox,
    progress: &mut Option<SweepProgress>,
) {
    let mut mask = DoomMask::new(board.cell_count());

    for x in bounds.left..=bounds.right {
        let top = board.index_of(x, bounds.top);
        let bottom = board.index_of(x, bounds.bottom);
        flood_doomed(board, bounds, top, &mut mask);
        flood_doomed(board, bounds, bottom, &mut mask);
        if let Some(progress) = progress {
            progress.advance(2);
        }
    }

    for y in bounds.top..=bounds.bottom {
        let left = board.index_of(bounds.left, y);
        let right = board.index_of(bounds.right, y);
        flood_doomed(board, bounds, left, &mut mask);
        flood_doomed(board, bounds, right, &mut mask);
        if let Some(progress) = progress {
            progress.advance(2);
        }
    }
}

/// Promote the open cells the flood never reached into territory
///
/// Runs after the border sweep. Only cells inside the bounding box qualify;
/// open cells outside it stay open. Returns the number of promoted cells.
pub fn finalize_territory(board: &mut Board, bounds: &BoundingBox) -> usize {
    let mut promoted = 0;
    for y in bounds.top..=bounds.bottom {
        for x in bounds.left..=bounds.right {
            let index = board.index_of(x, y);
            if board.status(index) == Some(CellStatus::Open) {
                board.set_status(index, CellStatus::Territory);
                promoted += 1;
            }
        }
    }
    promoted
}
