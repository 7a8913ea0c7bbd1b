//! Status map PNG export, one pixel per cell

use crate::io::configuration::{DOOMED_COLOR, OPEN_COLOR, TAKEN_COLOR, TERRITORY_COLOR};
use crate::io::error::{Result, SweepError};
use crate::spatial::board::{Board, BoundingBox, CellStatus};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Colour for one cell of the exported map
///
/// Mirrors the glyph mapping of the textual renderer: open cells inside the
/// box share the territory colour.
const fn status_color(status: CellStatus, within_box: bool) -> [u8; 4] {
    match status {
        CellStatus::Taken => TAKEN_COLOR,
        CellStatus::Territory => TERRITORY_COLOR,
        CellStatus::Open if within_box => TERRITORY_COLOR,
        CellStatus::Doomed => DOOMED_COLOR,
        CellStatus::Open => OPEN_COLOR,
    }
}

/// Export the classified board as a PNG image
///
/// # Errors
///
/// Returns [`SweepError::ImageExport`] when the image cannot be written to
/// `path`.
pub fn export_status_map_png(board: &Board, bounds: &BoundingBox, path: &Path) -> Result<()> {
    let width = board.width() as u32;
    let height = board.height() as u32;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(OPEN_COLOR));

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let index = board.index_of(x as usize, y as usize);
        if let Some(status) = board.status(index) {
            *pixel = Rgba(status_color(status, bounds.contains(x as usize, y as usize)));
        }
    }

    img.save(path).map_err(|source| SweepError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
