//! Validates bounding box derivation and the border-seeded enclosure flood

use stoneflood::SweepError;
use stoneflood::algorithm::bounds::occupied_bounding_box;
use stoneflood::algorithm::executor::{SweepConfig, TerritorySweep};
use stoneflood::algorithm::flood::{
    DoomMask, doom_border_reachable, finalize_territory, flood_doomed,
};
use stoneflood::spatial::Board;
use stoneflood::spatial::board::{BoundingBox, CellStatus};

fn board_with_stones(width: usize, height: usize, stones: &[(usize, usize)]) -> Board {
    let mut board = Board::new(width, height);
    for (x, y) in stones {
        let index = board.index_of(*x, *y);
        board.set_status(index, CellStatus::Taken);
    }
    board
}

#[test]
fn test_bounding_box_over_fixed_stone_set() {
    let board = board_with_stones(8, 8, &[(2, 3), (5, 5), (2, 5)]);
    let bounds = occupied_bounding_box(&board).ok();
    assert_eq!(
        bounds,
        Some(BoundingBox {
            top: 3,
            left: 2,
            right: 5,
            bottom: 5,
        })
    );
}

#[test]
fn test_bounding_box_on_empty_board_is_an_error() {
    let board = Board::new(4, 4);
    assert!(matches!(
        occupied_bounding_box(&board),
        Err(SweepError::NoOccupiedCells {
            width: 4,
            height: 4,
        })
    ));
}

// The cross-shaped gaps in this frame connect the centre to the box border,
// so the flood reaches every non-stone cell inside the box.
#[test]
fn test_five_by_five_frame_scenario() {
    use stoneflood::spatial::board::CellStatus::{Doomed, Open, Taken};

    let mut board = board_with_stones(5, 5, &[(1, 1), (3, 1), (1, 3), (3, 3)]);
    let bounds = match occupied_bounding_box(&board) {
        Ok(bounds) => bounds,
        Err(error) => unreachable!("stones were placed: {error}"),
    };
    assert_eq!(
        bounds,
        BoundingBox {
            top: 1,
            left: 1,
            right: 3,
            bottom: 3,
        }
    );

    doom_border_reachable(&mut board, &bounds, &mut None);
    finalize_territory(&mut board, &bounds);

    let expected = [
        Open, Open, Open, Open, Open, //
        Open, Taken, Doomed, Taken, Open, //
        Open, Doomed, Doomed, Doomed, Open, //
        Open, Taken, Doomed, Taken, Open, //
        Open, Open, Open, Open, Open,
    ];
    let actual: Vec<CellStatus> = board.cells().map(|cell| cell.status).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_enclosed_pocket_becomes_territory() {
    let stones = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    let mut board = board_with_stones(5, 5, &stones);
    let bounds = match occupied_bounding_box(&board) {
        Ok(bounds) => bounds,
        Err(error) => unreachable!("stones were placed: {error}"),
    };

    doom_border_reachable(&mut board, &bounds, &mut None);
    let promoted = finalize_territory(&mut board, &bounds);

    assert_eq!(promoted, 1);
    let centre = board.index_of(2, 2);
    assert_eq!(board.status(centre), Some(CellStatus::Territory));
    assert!(
        board.cells().all(|cell| cell.status != CellStatus::Doomed),
        "A closed ring leaves nothing for the border flood to reach"
    );
}

#[test]
fn test_border_sweep_is_idempotent() {
    let mut board = board_with_stones(5, 5, &[(1, 1), (3, 1), (1, 3), (3, 3)]);
    let bounds = match occupied_bounding_box(&board) {
        Ok(bounds) => bounds,
        Err(error) => unreachable!("stones were placed: {error}"),
    };

    doom_border_reachable(&mut board, &bounds, &mut None);
    let after_first = board.clone();

    doom_border_reachable(&mut board, &bounds, &mut None);
    assert_eq!(board, after_first);
}

#[test]
fn test_doomed_cells_stay_doomed() {
    let mut board = board_with_stones(5, 5, &[(1, 1), (3, 1), (1, 3), (3, 3)]);
    let bounds = match occupied_bounding_box(&board) {
        Ok(bounds) => bounds,
        Err(error) => unreachable!("stones were placed: {error}"),
    };
    doom_border_reachable(&mut board, &bounds, &mut None);

    // Re-seeding from a doomed cell must not revert any classification
    let doomed_seed = board.index_of(2, 1);
    assert_eq!(board.status(doomed_seed), Some(CellStatus::Doomed));
    let before = board.clone();

    let mut mask = DoomMask::new(board.cell_count());
    flood_doomed(&mut board, &bounds, doomed_seed, &mut mask);
    assert_eq!(board, before);
}

#[test]
fn test_doomed_cells_lie_within_bounding_box() {
    let config = match SweepConfig::new(30, 30, 0.05, 0.7) {
        Ok(config) => config,
        Err(error) => unreachable!("parameters are valid: {error}"),
    };
    let sweep = TerritorySweep::new(config, 42);
    let outcome = match sweep.execute() {
        Ok(outcome) => outcome,
        Err(error) => unreachable!("default probabilities place stones: {error}"),
    };

    for cell in outcome.board.cells() {
        if cell.status == CellStatus::Doomed {
            assert!(
                outcome.bounds.contains(cell.x, cell.y),
                "Doomed cell ({}, {}) escaped the bounding box",
                cell.x,
                cell.y
            );
        }
    }

    let tally = outcome.tally;
    assert_eq!(
        tally.taken + tally.doomed + tally.territory + tally.open,
        outcome.board.cell_count()
    );
}

#[test]
fn test_sweep_with_zero_seed_probability_errors() {
    let config = match SweepConfig::new(10, 10, 0.0, 0.7) {
        Ok(config) => config,
        Err(error) => unreachable!("parameters are valid: {error}"),
    };
    let sweep = TerritorySweep::new(config, 7);
    assert!(matches!(
        sweep.execute(),
        Err(SweepError::NoOccupiedCells {
            width: 10,
            height: 10,
        })
    ));
}
