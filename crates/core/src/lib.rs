//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the whole match-three simulation: board state, match
//! detection, swap validation, and cascade resolution. It has **zero
//! dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: same seed (or scripted source) produces the same
//!   boards and cascades
//! - **Testable**: every rule is exercised without a frame loop
//! - **Portable**: runs headless, in a terminal front end, or behind a GUI
//!
//! # Module Structure
//!
//! - [`grid`]: the `width x height` cell field, piece placement and identity
//! - [`source`]: piece generation (seeded uniform default, scripted for tests)
//! - [`detector`]: contiguous-run search and match-set computation
//! - [`initializer`]: zero-match initial fill with bounded retry
//! - [`swap`]: adjacency-gated swap with commit-or-rollback
//! - [`cascade`]: the clear -> collapse -> refill -> re-detect loop
//! - [`session`]: the Idle/Selecting/Locked interaction state machine
//! - [`snapshot`]: plain-data board copies for external observers
//!
//! # Game Rules
//!
//! - Two pieces are alike iff kind **and** color agree; only alike pieces
//!   form runs
//! - A run of 3 or more along a row or column is a match; a cell can match on
//!   both axes at once and is cleared once
//! - A swap must be between 4-adjacent cells and must produce a match, or it
//!   is undone
//! - Cleared cells pull the pieces above them down (row 0 is the bottom);
//!   emptied top cells refill from the piece source
//! - Resolution repeats until a round produces no new match; the settled
//!   board is fully occupied and match-free
//!
//! # Example
//!
//! ```
//! use match_grid_core::BoardSession;
//! use match_grid_types::Coord;
//!
//! let mut session = BoardSession::new(8, 8, 12345).unwrap();
//!
//! // A full gesture: select, drag to a neighbor, release
//! session.select(Coord::new(3, 3));
//! session.drag_to(Coord::new(3, 4));
//! let outcome = session.release();
//!
//! // On a match the session locks; drain the cascade round by round
//! if outcome.is_matched() {
//!     for event in session.resolve() {
//!         let _ = (event.cleared, event.moved, event.spawned);
//!     }
//! }
//! assert!(session.grid().is_full());
//! ```

pub mod cascade;
pub mod detector;
pub mod grid;
pub mod initializer;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod swap;

pub use match_grid_types as types;

// Re-export commonly used items for convenience
pub use cascade::{collapse_columns, refill, resolve, resolve_round};
pub use detector::{matches_for_all, matches_through, run_from, Run, MAX_RUN};
pub use grid::Grid;
pub use initializer::fill_board;
pub use session::BoardSession;
pub use snapshot::BoardSnapshot;
pub use source::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use swap::attempt_swap;
