//! Spatial data structures and board bookkeeping
//!
//! This module contains everything coordinate-related:
//! - Board state and cell statuses
//! - Linear index to coordinate mapping
//! - Orthogonal adjacency with edge handling

/// Board state, cell statuses, and the bounding box type
pub mod board;
/// Orthogonal adjacency over linear indices
pub mod neighbours;

pub use board::Board;
