//! Bounding box derivation over the occupied cells

use crate::io::error::{Result, SweepError};
use crate::spatial::board::{Board, BoundingBox};

/// Compute the minimal inclusive rectangle containing every taken cell
///
/// Folds the taken cells into running minima and maxima in a single pass.
///
/// # Errors
///
/// Returns [`SweepError::NoOccupiedCells`] when the board holds no stones,
/// so downstream stages never see garbage bounds.
pub fn occupied_bounding_box(board: &Board) -> Result<BoundingBox> {
    let mut top = usize::MAX;
    let mut left = usize::MAX;
    let mut right = 0;
    let mut bottom = 0;
    let mut found_stones = false;

    for cell in board.taken_cells() {
        found_stones = true;
        top = top.min(cell.y);
        left = left.min(cell.x);
        right = right.max(cell.x);
        bottom = bottom.max(cell.y);
    }

    if !found_stones {
        return Err(SweepError::NoOccupiedCells {
            width: board.width(),
            height: board.height(),
        });
    }

    Ok(BoundingBox {
        top,
        left,
        right,
        bottom,
    })
}
