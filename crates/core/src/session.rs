//! Board session module - the interaction state machine
//!
//! Ties the components together: owns the grid and the piece source,
//! sequences select -> drag -> release -> swap -> cascade, and refuses input
//! while a cascade is in flight.
//!
//! The session never sleeps or waits: `release` applies the swap and stops,
//! and each `step_cascade` call applies exactly one resolution round and
//! returns its event. The calling layer decides whether to animate between
//! rounds or drain them all at once with `resolve`.
//!
//! Invalid commands (selecting while locked, dragging to a far cell,
//! releasing with nothing selected) are expected input races: they are
//! absorbed silently and change nothing.

use std::collections::HashSet;

use anyhow::{bail, Result};

use match_grid_types::{
    CascadeEvent, Coord, InputPhase, PieceType, SessionCommand, SwapOutcome, MAX_BOARD_DIM,
};

use crate::cascade::resolve_round;
use crate::grid::Grid;
use crate::initializer::fill_board;
use crate::snapshot::BoardSnapshot;
use crate::source::{PieceSource, UniformSource};
use crate::swap::attempt_swap;

/// One playable board: grid, piece source, and interaction state
pub struct BoardSession {
    grid: Grid,
    source: Box<dyn PieceSource>,
    phase: InputPhase,
    anchor: Option<Coord>,
    target: Option<Coord>,
    /// Seeds for the next resolution round while `Locked`
    pending: HashSet<Coord>,
    /// Whether the initial fill satisfied the zero-match invariant
    clean_fill: bool,
}

impl BoardSession {
    /// Create a session over the default catalog with the given seed
    pub fn new(width: u8, height: u8, seed: u32) -> Result<Self> {
        Self::with_source(width, height, Box::new(UniformSource::from_seed(seed)))
    }

    /// Create a session over a custom catalog with the given seed
    pub fn with_catalog(
        width: u8,
        height: u8,
        catalog: Vec<PieceType>,
        seed: u32,
    ) -> Result<Self> {
        Self::with_source(width, height, Box::new(UniformSource::new(catalog, seed)?))
    }

    /// Create a session with an injected piece source
    pub fn with_source(width: u8, height: u8, mut source: Box<dyn PieceSource>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("board dimensions must be positive, got {}x{}", width, height);
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            bail!(
                "board dimensions must be at most {}, got {}x{}",
                MAX_BOARD_DIM,
                width,
                height
            );
        }

        let mut grid = Grid::new(width, height);
        let clean_fill = fill_board(&mut grid, source.as_mut());

        Ok(Self {
            grid,
            source,
            phase: InputPhase::Idle,
            anchor: None,
            target: None,
            pending: HashSet::new(),
            clean_fill,
        })
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// The live grid (read-only; mutation goes through commands)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    /// The currently selected anchor cell, if any
    pub fn anchor(&self) -> Option<Coord> {
        self.anchor
    }

    /// Whether the initial fill avoided all matches (it almost always does;
    /// see the initializer's retry bound)
    pub fn initial_fill_clean(&self) -> bool {
        self.clean_fill
    }

    /// Select the first cell of a swap. Effective only while `Idle` and in
    /// bounds.
    pub fn select(&mut self, coord: Coord) -> bool {
        if self.phase != InputPhase::Idle || !self.grid.in_bounds(coord) {
            return false;
        }
        self.anchor = Some(coord);
        self.phase = InputPhase::Selecting;
        true
    }

    /// Choose the swap target. Effective only while `Selecting` and for a
    /// cell 4-adjacent to the anchor.
    pub fn drag_to(&mut self, coord: Coord) -> bool {
        if self.phase != InputPhase::Selecting {
            return false;
        }
        let Some(anchor) = self.anchor else {
            return false;
        };
        if !self.grid.in_bounds(coord) || !anchor.is_adjacent(coord) {
            return false;
        }
        self.target = Some(coord);
        true
    }

    /// Commit the gesture: swap anchor and target if both are set.
    ///
    /// On a match the session locks and the match set becomes the pending
    /// cascade seed; drive it with [`step_cascade`](Self::step_cascade) or
    /// [`resolve`](Self::resolve). Selection is cleared on every path.
    pub fn release(&mut self) -> SwapOutcome {
        if self.phase == InputPhase::Locked {
            return SwapOutcome::Rejected;
        }

        let anchor = self.anchor.take();
        let target = self.target.take();
        self.phase = InputPhase::Idle;

        let (Some(a), Some(b)) = (anchor, target) else {
            return SwapOutcome::Rejected;
        };

        let outcome = attempt_swap(&mut self.grid, a, b);
        if let SwapOutcome::Matched(ref matches) = outcome {
            self.phase = InputPhase::Locked;
            self.pending = matches.clone();
        }
        outcome
    }

    /// Run one cascade round; `None` unless a cascade is in flight.
    ///
    /// Returns the round's event; when the round produces no follow-up match
    /// the session unlocks.
    pub fn step_cascade(&mut self) -> Option<CascadeEvent> {
        if self.phase != InputPhase::Locked {
            return None;
        }

        let seeds = std::mem::take(&mut self.pending);
        let (event, next) = resolve_round(&mut self.grid, &seeds, self.source.as_mut());
        self.pending = next;

        if self.pending.is_empty() {
            self.phase = InputPhase::Idle;
        }
        Some(event)
    }

    /// Drain the pending cascade to settlement, one event per round
    pub fn resolve(&mut self) -> Vec<CascadeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step_cascade() {
            events.push(event);
        }
        events
    }

    /// Route an inbound command. For `Release`, reports whether the swap
    /// matched (the cascade is then pending).
    pub fn apply_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Select(coord) => self.select(coord),
            SessionCommand::DragTo(coord) => self.drag_to(coord),
            SessionCommand::Release => self.release().is_matched(),
        }
    }

    /// Plain-data copy of the current board for the rendering layer
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.grid)
    }
}

impl std::fmt::Debug for BoardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSession")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("phase", &self.phase)
            .field("anchor", &self.anchor)
            .field("target", &self.target)
            .field("pending", &self.pending.len())
            .finish()
    }
}
