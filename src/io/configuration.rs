//! Board constants and runtime configuration defaults

// Board dimensions of the classic scoring demo
/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 100;
/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Scatter probabilities: sparse isolated seeding, strong cluster growth
/// Chance an early cell seeds the first stone
pub const DEFAULT_SEED_PROBABILITY: f64 = 0.05;
/// Chance a cell adjacent to a stone joins the cluster
pub const DEFAULT_SPREAD_PROBABILITY: f64 = 0.7;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Status map glyphs
/// Glyph for a stone
pub const TAKEN_GLYPH: char = '+';
/// Glyph for enclosed territory
pub const TERRITORY_GLYPH: char = '*';
/// Glyph for doomed and out-of-box cells
pub const BLANK_GLYPH: char = ' ';

// Status map export colours (RGBA)
/// Stone colour
pub const TAKEN_COLOR: [u8; 4] = [33, 33, 33, 255];
/// Enclosed territory colour
pub const TERRITORY_COLOR: [u8; 4] = [76, 175, 80, 255];
/// Doomed cell colour
pub const DOOMED_COLOR: [u8; 4] = [236, 239, 241, 255];
/// Out-of-box open cell colour
pub const OPEN_COLOR: [u8; 4] = [255, 255, 255, 255];
