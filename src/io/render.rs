//! Textual status map output

use crate::io::configuration::{BLANK_GLYPH, TAKEN_GLYPH, TERRITORY_GLYPH};
use crate::io::error::Result;
use crate::spatial::board::{Board, BoundingBox, CellStatus};
use std::io::Write;
use std::time::Duration;

/// Glyph for one cell of the status map
///
/// Open cells inside the box render as territory. The finalization pass
/// usually classifies them first, but the renderer does not depend on it
/// having run.
pub const fn status_glyph(status: CellStatus, within_box: bool) -> char {
    match status {
        CellStatus::Taken => TAKEN_GLYPH,
        CellStatus::Territory => TERRITORY_GLYPH,
        CellStatus::Open if within_box => TERRITORY_GLYPH,
        CellStatus::Open | CellStatus::Doomed => BLANK_GLYPH,
    }
}

/// Render the board as one space-separated row string per line
pub fn render_rows(board: &Board, bounds: &BoundingBox) -> Vec<String> {
    let mut rows = Vec::with_capacity(board.height());
    for y in 0..board.height() {
        let mut glyphs = Vec::with_capacity(board.width());
        for x in 0..board.width() {
            let status = board
                .status(board.index_of(x, y))
                .unwrap_or(CellStatus::Open);
            glyphs.push(status_glyph(status, bounds.contains(x, y)).to_string());
        }
        rows.push(glyphs.join(" "));
    }
    rows
}

/// Write the status map followed by the timing trailer
///
/// The trailer reports the elapsed milliseconds of the border sweep phase
/// as `TIMED <N>ms`.
///
/// # Errors
///
/// Returns an error when the writer fails.
pub fn write_status_map(
    writer: &mut impl Write,
    board: &Board,
    bounds: &BoundingBox,
    elapsed: Duration,
) -> Result<()> {
    for row in render_rows(board, bounds) {
        writeln!(writer, "{row}")?;
    }
    writeln!(writer, "TIMED {}ms", elapsed.as_millis())?;
    Ok(())
}
