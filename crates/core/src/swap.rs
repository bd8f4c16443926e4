//! Swap engine module - adjacency-gated swap with commit-or-rollback
//!
//! A swap is provisional: the two pieces are exchanged, the detector is asked
//! whether either end now sits in a match, and the exchange is kept only on a
//! hit. A miss restores both pieces to their original cells, so a rejected or
//! reverted attempt leaves the grid position-for-position untouched.

use match_grid_types::{Coord, SwapOutcome};

use crate::detector::matches_for_all;
use crate::grid::Grid;

/// Try to swap the pieces at `a` and `b`.
///
/// Rejected (no mutation) unless the cells are 4-adjacent and both occupied.
/// Otherwise the swap commits iff it creates at least one match; the match
/// set is returned as the cascade seed.
pub fn attempt_swap(grid: &mut Grid, a: Coord, b: Coord) -> SwapOutcome {
    if !a.is_adjacent(b) {
        return SwapOutcome::Rejected;
    }
    // Covers out-of-bounds as well; a settled grid has no empty cells, so an
    // empty end means the caller handed us a coordinate off the board
    if !grid.is_occupied(a) || !grid.is_occupied(b) {
        return SwapOutcome::Rejected;
    }

    grid.swap(a, b);

    let matches = matches_for_all(grid, [a, b]);
    if matches.is_empty() {
        grid.swap(a, b);
        return SwapOutcome::Reverted;
    }

    SwapOutcome::Matched(matches)
}
