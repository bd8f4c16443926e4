//! Match detector module - contiguous-run search over a grid snapshot
//!
//! Pure functions, no state: callers hand in a `&Grid` and get coordinate
//! runs/sets back. A "run" is a maximal straight line of alike pieces along
//! one axis; a "match" is a run (or the union of a horizontal and a vertical
//! run through one shared cell) of length >= [`MIN_MATCH_LEN`].
//!
//! The composite detectors use two-sided extension: from a seed cell, the run
//! is collected separately in each direction of an axis (minimum length 2,
//! seed included) and the two halves are unioned. Scanning a single direction
//! with minimum length 3 would miss matches that straddle the seed, e.g. the
//! middle cell of a 3-run.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use match_grid_types::{Coord, Direction, MAX_BOARD_DIM, MIN_MATCH_LEN};

use crate::grid::Grid;

/// Upper bound on run length: a run cannot outgrow the longer board axis
pub const MAX_RUN: usize = MAX_BOARD_DIM as usize;

/// Collected run of alike pieces starting at a seed cell
pub type Run = ArrayVec<Coord, MAX_RUN>;

/// Collect the contiguous run of pieces alike the origin, walking from
/// `origin` in direction `dir`.
///
/// Returns `None` when the origin is out of bounds or empty, or when the run
/// (origin included) is shorter than `min_len`. The walk stops at the first
/// out-of-bounds cell, empty cell, or unlike piece; it never wraps or turns.
pub fn run_from(grid: &Grid, origin: Coord, dir: Direction, min_len: usize) -> Option<Run> {
    let origin_type = grid.type_at(origin)?;

    let mut run = Run::new();
    run.push(origin);

    // Enough steps to reach a board edge from any cell
    let max_steps = grid.width().max(grid.height()).saturating_sub(1) as usize;

    let mut cursor = origin;
    for _ in 0..max_steps {
        cursor = cursor.step(dir);
        match grid.type_at(cursor) {
            Some(t) if t == origin_type => run.push(cursor),
            _ => break,
        }
    }

    if run.len() >= min_len {
        Some(run)
    } else {
        None
    }
}

/// All coordinates matched through `coord`: the horizontal axis-union and the
/// vertical axis-union, each kept only if it reaches [`MIN_MATCH_LEN`].
///
/// Empty result when the cell is empty or belongs to no match.
pub fn matches_through(grid: &Grid, coord: Coord) -> HashSet<Coord> {
    let axes = [
        [Direction::Left, Direction::Right],
        [Direction::Down, Direction::Up],
    ];

    let mut matched = HashSet::new();
    for axis in axes {
        let mut axis_cells: HashSet<Coord> = HashSet::new();
        for dir in axis {
            // min 2 per side: origin plus at least one neighbor
            if let Some(run) = run_from(grid, coord, dir, 2) {
                axis_cells.extend(run);
            }
        }
        // The two sides share the origin, so the union length is the real
        // combined run length
        if axis_cells.len() >= MIN_MATCH_LEN {
            matched.extend(axis_cells);
        }
    }
    matched
}

/// Deduplicated union of [`matches_through`] over every seed coordinate
pub fn matches_for_all<I>(grid: &Grid, seeds: I) -> HashSet<Coord>
where
    I: IntoIterator<Item = Coord>,
{
    let mut matched = HashSet::new();
    for seed in seeds {
        matched.extend(matches_through(grid, seed));
    }
    matched
}
