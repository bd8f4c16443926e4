//! Board initializer module - zero-match initial fill
//!
//! Fills every cell column-major (left to right, bottom to top) from the
//! piece source. After placing a piece, only the leftward and downward runs
//! can have been completed by it: cells to the right and above are still
//! empty at that point in the fill order, so those two checks are sufficient.
//!
//! A cell that keeps regenerating into a match is retried up to
//! [`MAX_FILL_ATTEMPTS`] times and then accepted as-is: a board with a small
//! residual match beats a construction that never finishes. Callers can see
//! whether that happened via the return value.

use match_grid_types::{Coord, Direction, MAX_FILL_ATTEMPTS, MIN_MATCH_LEN};

use crate::detector::run_from;
use crate::grid::Grid;
use crate::source::PieceSource;

/// Would the piece just placed at `c` complete a run of [`MIN_MATCH_LEN`]?
///
/// Checks leftward and downward only; valid during column-major bottom-up
/// fill, where the other two directions are still unpopulated.
fn has_match_on_fill(grid: &Grid, c: Coord) -> bool {
    run_from(grid, c, Direction::Left, MIN_MATCH_LEN).is_some()
        || run_from(grid, c, Direction::Down, MIN_MATCH_LEN).is_some()
}

/// Fill the whole grid with fresh pieces, avoiding initial matches.
///
/// Returns `true` if the fill is match-free, `false` if some cell exhausted
/// its retries and the board was accepted with a residual match.
pub fn fill_board(grid: &mut Grid, source: &mut dyn PieceSource) -> bool {
    let mut clean = true;

    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            let c = Coord::new(x, y);
            grid.spawn(c, source.next_type());

            let mut attempts = 0;
            while attempts < MAX_FILL_ATTEMPTS && has_match_on_fill(grid, c) {
                grid.take(c);
                grid.spawn(c, source.next_type());
                attempts += 1;
            }

            if has_match_on_fill(grid, c) {
                clean = false;
            }
        }
    }

    clean
}
