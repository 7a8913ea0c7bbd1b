/// Bounding box derivation over the occupied cells
pub mod bounds;
/// Driver for the scatter, box, sweep, finalize pipeline
pub mod executor;
/// Border-seeded enclosure flood and territory finalization
pub mod flood;
