//! Command-line interface for running a territory sweep

use crate::algorithm::executor::{SweepConfig, TerritorySweep};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_SEED_PROBABILITY, DEFAULT_SPREAD_PROBABILITY,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_status_map_png;
use crate::io::render::write_status_map;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stoneflood")]
#[command(
    author,
    version,
    about = "Detect surrounded territory on a randomly scattered stone board"
)]
/// Command-line arguments for the territory sweep tool
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible boards
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Probability that an early cell seeds the first stone
    #[arg(long, default_value_t = DEFAULT_SEED_PROBABILITY)]
    pub seed_probability: f64,

    /// Probability that a cell adjacent to a stone joins the cluster
    #[arg(long, default_value_t = DEFAULT_SPREAD_PROBABILITY)]
    pub spread_probability: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also export the status map as a PNG
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one sweep according to CLI arguments and emits the results
pub struct BoardProcessor {
    cli: Cli,
}

impl BoardProcessor {
    /// Create a processor from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the sweep, write the status map, and run optional exports
    ///
    /// # Errors
    ///
    /// Returns an error when parameter validation fails, the generated board
    /// holds no stones, or an export target cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let config = SweepConfig::new(
            self.cli.width,
            self.cli.height,
            self.cli.seed_probability,
            self.cli.spread_probability,
        )?;

        let mut sweep = TerritorySweep::new(config, self.cli.seed);
        if self.cli.should_show_progress() {
            sweep.enable_progress();
        }

        let outcome = sweep.execute()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_status_map(&mut handle, &outcome.board, &outcome.bounds, outcome.elapsed)?;

        if let Some(png_path) = &self.cli.png {
            export_status_map_png(&outcome.board, &outcome.bounds, png_path)?;
        }

        Ok(())
    }
}
