//! Headless board runner (default binary).
//!
//! Builds a seeded session, probes for a swap that produces a match, plays
//! the full select/drag/release gesture, and prints each cascade round as
//! text. This is the consumer contract in miniature: the engine hands back
//! one event per round and the caller decides pacing and presentation.

use anyhow::{bail, Result};

use match_grid::core::{attempt_swap, BoardSession, Grid};
use match_grid::types::{
    Coord, Direction, PieceType, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CATALOG,
};

fn main() -> Result<()> {
    let mut session = BoardSession::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, 20_260_807)?;

    println!("initial board:");
    print_grid(session.grid());

    let Some((a, b)) = find_matching_swap(session.grid()) else {
        println!("no matching swap available on this board");
        return Ok(());
    };
    println!("swapping ({},{}) and ({},{})", a.x, a.y, b.x, b.y);

    session.select(a);
    session.drag_to(b);
    let outcome = session.release();
    if !outcome.is_matched() {
        bail!("probed swap did not match: {:?}", outcome);
    }

    let mut round = 0;
    while let Some(event) = session.step_cascade() {
        round += 1;
        println!(
            "round {}: cleared {}, fell {}, spawned {}",
            round,
            event.cleared.len(),
            event.moved.len(),
            event.spawned.len()
        );
        print_grid(session.grid());
    }

    println!("settled after {} round(s)", round);
    Ok(())
}

/// First adjacent pair whose swap would match, probing a scratch copy
fn find_matching_swap(grid: &Grid) -> Option<(Coord, Coord)> {
    for y in 0..grid.height() as i8 {
        for x in 0..grid.width() as i8 {
            let c = Coord::new(x, y);
            for dir in [Direction::Right, Direction::Up] {
                let n = c.step(dir);
                if !grid.in_bounds(n) {
                    continue;
                }
                let mut probe = grid.clone();
                if attempt_swap(&mut probe, c, n).is_matched() {
                    return Some((c, n));
                }
            }
        }
    }
    None
}

/// One letter per catalog entry, top row first
fn print_grid(grid: &Grid) {
    for y in (0..grid.height() as i8).rev() {
        let row: String = (0..grid.width() as i8)
            .map(|x| match grid.type_at(Coord::new(x, y)) {
                Some(t) => type_char(t),
                None => '.',
            })
            .collect();
        println!("  {}", row);
    }
}

fn type_char(t: PieceType) -> char {
    match DEFAULT_CATALOG.iter().position(|entry| *entry == t) {
        Some(i) => (b'A' + i as u8) as char,
        None => '?',
    }
}
