//! Clustered stone scatter driven by a deterministic rng

use crate::io::progress::SweepProgress;
use crate::spatial::board::{Board, CellStatus};
use crate::spatial::neighbours::orthogonal_neighbours;
use rand::{Rng, rngs::StdRng};

/// Probabilities steering the scatter
#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    /// Chance a cell becomes the first stone while none exists yet
    pub seed_probability: f64,
    /// Chance a cell bordering an existing stone joins the cluster
    pub spread_probability: f64,
}

/// Scatter stones over a fresh board
///
/// Scans with x as the outer loop. Until the first stone lands, every cell
/// rolls against the seed probability; afterwards only cells with an occupied
/// orthogonal neighbour roll, against the spread probability, so stones grow
/// in clusters around the first one. Cells ahead of the scan still read as
/// open, which means growth only ever follows already-placed stones. The
/// scan order is part of the contract: a fixed rng seed reproduces the board
/// exactly.
pub fn scatter_stones(
    width: usize,
    height: usize,
    params: ScatterParams,
    rng: &mut StdRng,
    progress: &mut Option<SweepProgress>,
) -> Board {
    let mut board = Board::new(width, height);
    let mut has_first_stone = false;

    for x in 0..width {
        for y in 0..height {
            let index = board.index_of(x, y);
            if has_first_stone {
                let next_to_stone = orthogonal_neighbours(index, width, height)
                    .into_iter()
                    .any(|neighbour| board.status(neighbour) == Some(CellStatus::Taken));
                if next_to_stone && rng.random::<f64>() > 1.0 - params.spread_probability {
                    board.set_status(index, CellStatus::Taken);
                }
            } else if rng.random::<f64>() > 1.0 - params.seed_probability {
                board.set_status(index, CellStatus::Taken);
                has_first_stone = true;
            }
        }
        if let Some(progress) = progress {
            progress.advance(1);
        }
    }

    board
}
