//! Orthogonal adjacency over linear board indices

/// Collect the orthogonal neighbours of `index` on a `width` x `height` board
///
/// Candidates are `index - 1`, `index + 1`, `index + width`, and
/// `index - width`. A candidate survives only if it is in range and does not
/// wrap across a row boundary: the horizontal candidates must keep the row of
/// `index`, the vertical ones its column. Interior cells therefore get four
/// neighbours, corners two, and other edge cells three.
///
/// Status filtering is deliberately left to callers; this function knows
/// nothing about cell contents.
pub fn orthogonal_neighbours(index: usize, width: usize, height: usize) -> Vec<usize> {
    let span = (width * height) as i64;
    let row_len = width as i64;
    let position = index as i64;

    let mut kept = Vec::with_capacity(4);
    for candidate in [
        position - 1,
        position + 1,
        position + row_len,
        position - row_len,
    ] {
        if candidate < 0 || candidate >= span {
            continue;
        }
        let same_row = candidate / row_len == position / row_len;
        let same_column = candidate % row_len == position % row_len;
        if same_row || same_column {
            kept.push(candidate as usize);
        }
    }
    kept
}
