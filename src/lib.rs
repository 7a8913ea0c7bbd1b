//! Surrounded-territory detection over procedurally scattered stone boards
//!
//! The system scatters clustered stones across a rectangular board, derives the
//! bounding box of the occupied area, and flood-fills inward from the box border
//! to separate empty space that can still reach the border from the enclosed
//! pockets that count as territory.

#![forbid(unsafe_code)]

/// Bounding box derivation and the border-seeded enclosure flood
pub mod algorithm;
/// Clustered random stone placement
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Board state, coordinate mapping, and adjacency
pub mod spatial;

pub use io::error::{Result, SweepError};
