//! Cascade engine module - the clear -> collapse -> refill resolution loop
//!
//! Given a seed match set, one round clears those cells, compacts every
//! affected column downward, refills the emptied top cells from the piece
//! source, and re-detects matches among the cells that changed. Rounds repeat
//! until a round produces no new match; the grid is then settled (fully
//! occupied, match-free).
//!
//! Each round yields one [`CascadeEvent`] for the external animation layer.
//! The loop carries no iteration cap: every round re-seeds only from freshly
//! moved or spawned cells, and a source without pathological correlation
//! settles after a handful of rounds.

use std::collections::{BTreeSet, HashSet};

use match_grid_types::{CascadeEvent, Coord, PieceMove, PieceSpawn};

use crate::detector::matches_for_all;
use crate::grid::Grid;
use crate::source::PieceSource;

/// Compact the given columns downward, one bottom-up pass each.
///
/// For every empty cell (scanning from row 0) the nearest occupied cell above
/// it falls down to fill the gap. A single pass per column leaves no gap
/// below an occupied cell. Returns the pieces that fell, each recorded once
/// with its from/to coordinates.
pub fn collapse_columns<I>(grid: &mut Grid, columns: I) -> Vec<PieceMove>
where
    I: IntoIterator<Item = i8>,
{
    let mut moved = Vec::new();
    let height = grid.height() as i8;

    for x in columns {
        for y in 0..height {
            let dst = Coord::new(x, y);
            if !grid.is_empty_cell(dst) {
                continue;
            }
            // Nearest occupied cell above the gap falls into it
            for src_y in (y + 1)..height {
                let src = Coord::new(x, src_y);
                if let Some(piece) = grid.move_piece(src, dst) {
                    moved.push(PieceMove {
                        id: piece.id,
                        piece_type: piece.piece_type,
                        from: src,
                        to: dst,
                    });
                    break;
                }
            }
        }
    }

    moved
}

/// Fill every empty cell with a fresh piece from the source.
///
/// After a collapse the empties sit at the top of their columns; the scan is
/// column-major bottom-up like the initial fill. Returns the spawns in scan
/// order.
pub fn refill(grid: &mut Grid, source: &mut dyn PieceSource) -> Vec<PieceSpawn> {
    let mut spawned = Vec::new();

    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            let at = Coord::new(x, y);
            if !grid.is_empty_cell(at) {
                continue;
            }
            if let Some(piece) = grid.spawn(at, source.next_type()) {
                spawned.push(PieceSpawn {
                    id: piece.id,
                    piece_type: piece.piece_type,
                    at,
                });
            }
        }
    }

    spawned
}

/// Run one clear -> collapse -> refill -> re-detect round.
///
/// Returns the round's event and the match set the round itself produced;
/// an empty set means the board is settled.
pub fn resolve_round(
    grid: &mut Grid,
    seeds: &HashSet<Coord>,
    source: &mut dyn PieceSource,
) -> (CascadeEvent, HashSet<Coord>) {
    // Clear, in sorted order so the event is deterministic
    let mut ordered: Vec<Coord> = seeds.iter().copied().collect();
    ordered.sort();

    let mut cleared = Vec::with_capacity(ordered.len());
    let mut columns: BTreeSet<i8> = BTreeSet::new();
    for c in ordered {
        if grid.take(c).is_some() {
            cleared.push(c);
            columns.insert(c.x);
        }
    }

    let moved = collapse_columns(grid, columns);
    let spawned = refill(grid, source);

    // Only cells that changed this round can host a new match; everything
    // else was already match-free before the round
    let mut touched: HashSet<Coord> = HashSet::new();
    touched.extend(moved.iter().map(|m| m.to));
    touched.extend(spawned.iter().map(|s| s.at));
    let next = matches_for_all(grid, touched);

    (
        CascadeEvent {
            cleared,
            moved,
            spawned,
        },
        next,
    )
}

/// Resolve a full cascade: rounds until no new match remains
pub fn resolve(
    grid: &mut Grid,
    mut seeds: HashSet<Coord>,
    source: &mut dyn PieceSource,
) -> Vec<CascadeEvent> {
    let mut events = Vec::new();

    while !seeds.is_empty() {
        let (event, next) = resolve_round(grid, &seeds, source);
        events.push(event);
        seeds = next;
    }

    events
}
