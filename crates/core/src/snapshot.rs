//! Snapshot module - plain-data board copy for external observers
//!
//! The rendering layer joins its presentation records (sprites, transforms)
//! against piece ids and coordinates; it never reaches into the live grid.
//! A snapshot is that join surface: dimensions plus a per-cell copy of the
//! occupants at capture time.

use match_grid_types::{Cell, Coord};

use crate::grid::Grid;

/// Point-in-time copy of a grid's occupancy
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl BoardSnapshot {
    /// Copy the grid's current occupancy
    pub fn capture(grid: &Grid) -> Self {
        let cells = grid.coords().map(|c| grid.piece_at(c)).collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at a coordinate; `None` if out of bounds
    pub fn get(&self, c: Coord) -> Option<Cell> {
        if c.x < 0 || c.x >= self.width as i8 || c.y < 0 || c.y >= self.height as i8 {
            return None;
        }
        let idx = (c.y as usize) * (self.width as usize) + (c.x as usize);
        Some(self.cells[idx])
    }

    /// True iff every cell was occupied at capture time
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}
