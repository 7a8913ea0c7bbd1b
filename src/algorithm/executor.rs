//! Run orchestration for the territory sweep

use crate::algorithm::bounds::occupied_bounding_box;
use crate::algorithm::flood::{doom_border_reachable, finalize_territory};
use crate::generation::scatter::{ScatterParams, scatter_stones};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SweepProgress;
use crate::spatial::board::{Board, BoundingBox, CellStatus};
use rand::{SeedableRng, rngs::StdRng};
use std::time::{Duration, Instant};

/// Validated parameters for a full territory sweep
#[derive(Clone, Copy, Debug)]
pub struct SweepConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Probability that a cell seeds a stone before any stone exists
    pub seed_probability: f64,
    /// Probability that a cell next to a stone grows the cluster
    pub spread_probability: f64,
}

impl SweepConfig {
    /// Validate raw parameter values into a config
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidParameter`](crate::SweepError) for zero
    /// or oversized dimensions and for probabilities outside `[0, 1]`.
    pub fn new(
        width: usize,
        height: usize,
        seed_probability: f64,
        spread_probability: f64,
    ) -> Result<Self> {
        if width == 0 || width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if height == 0 || height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if !(0.0..=1.0).contains(&seed_probability) {
            return Err(invalid_parameter(
                "seed-probability",
                &seed_probability,
                &"must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&spread_probability) {
            return Err(invalid_parameter(
                "spread-probability",
                &spread_probability,
                &"must be within [0, 1]",
            ));
        }

        Ok(Self {
            width,
            height,
            seed_probability,
            spread_probability,
        })
    }
}

/// Counts of each classification after a sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    /// Stones on the board
    pub taken: usize,
    /// Empty cells reachable from the box border
    pub doomed: usize,
    /// Enclosed empty cells
    pub territory: usize,
    /// Empty cells outside the bounding box
    pub open: usize,
}

/// Count each classification across the board
pub fn tally_statuses(board: &Board) -> StatusTally {
    let mut tally = StatusTally::default();
    for cell in board.cells() {
        match cell.status {
            CellStatus::Open => tally.open += 1,
            CellStatus::Taken => tally.taken += 1,
            CellStatus::Doomed => tally.doomed += 1,
            CellStatus::Territory => tally.territory += 1,
        }
    }
    tally
}

/// Everything a sweep produces
#[derive(Debug)]
pub struct SweepOutcome {
    /// Board with every in-box cell in a terminal classification
    pub board: Board,
    /// Bounds of the occupied area
    pub bounds: BoundingBox,
    /// Elapsed time of the border sweep and finalization
    pub elapsed: Duration,
    /// Classification counts
    pub tally: StatusTally,
}

/// Driver for the scatter, box, border sweep, finalize pipeline
///
/// Owns the board for the duration of the run; the phases execute strictly
/// in sequence and only the flood mutates statuses after generation.
pub struct TerritorySweep {
    config: SweepConfig,
    rng: StdRng,
    // Present unless the run is quiet
    progress: Option<SweepProgress>,
}

impl TerritorySweep {
    /// Create a sweep driver with a deterministic rng
    pub fn new(config: SweepConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            progress: None,
        }
    }

    /// Attach a progress display for the long-running phases
    pub fn enable_progress(&mut self) {
        self.progress = Some(SweepProgress::new());
    }

    /// Run the full pipeline and return the classified board
    ///
    /// The timed span covers the border sweep and territory finalization,
    /// not generation or rendering.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::NoOccupiedCells`](crate::SweepError) when the
    /// scatter placed no stones, which a zero seed probability guarantees.
    pub fn execute(mut self) -> Result<SweepOutcome> {
        let params = ScatterParams {
            seed_probability: self.config.seed_probability,
            spread_probability: self.config.spread_probability,
        };

        if let Some(progress) = &mut self.progress {
            progress.start_phase("scatter", self.config.width);
        }
        let mut board = scatter_stones(
            self.config.width,
            self.config.height,
            params,
            &mut self.rng,
            &mut self.progress,
        );
        if let Some(progress) = &mut self.progress {
            progress.finish_phase();
        }

        let bounds = occupied_bounding_box(&board)?;

        if let Some(progress) = &mut self.progress {
            progress.start_phase("border sweep", 2 * (bounds.width() + bounds.height()));
        }
        let sweep_started = Instant::now();
        doom_border_reachable(&mut board, &bounds, &mut self.progress);
        finalize_territory(&mut board, &bounds);
        let elapsed = sweep_started.elapsed();
        if let Some(progress) = &mut self.progress {
            progress.finish_phase();
        }

        let tally = tally_statuses(&board);

        Ok(SweepOutcome {
            board,
            bounds,
            elapsed,
            tally,
        })
    }
}
