//! Grid module - owns the board's coordinate-to-occupant mapping
//!
//! The grid is a `width x height` field of cells, each holding at most one
//! piece. Flat `Vec` storage in row-major order (y * width + x); dimensions
//! are fixed at construction and never change for the session's lifetime.
//! Row 0 is the bottom row: gravity moves pieces toward decreasing `y`.
//!
//! The grid is also the allocator of piece identity: every piece enters the
//! board through [`Grid::spawn`], which hands out monotonically increasing
//! [`PieceId`]s. A piece that falls or is swapped keeps its id; only clearing
//! destroys it.

use match_grid_types::{Cell, Coord, Piece, PieceId, PieceType};

/// The game board - runtime-sized grid of optional pieces
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    /// Monotonic id for spawned pieces (increments only on spawn)
    next_piece_id: u32,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// Dimension validation lives at the session boundary; the grid itself
    /// accepts any size that fits its coordinate type.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            next_piece_id: 0,
        }
    }

    /// Calculate flat index from a coordinate; `None` if out of bounds
    #[inline(always)]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.x < 0 || c.x >= self.width as i8 || c.y < 0 || c.y >= self.height as i8 {
            return None;
        }
        Some((c.y as usize) * (self.width as usize) + (c.x as usize))
    }

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if a coordinate is on the board
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// Get cell at a coordinate; `None` if out of bounds
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// The piece at a coordinate, if the cell is in bounds and occupied
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.get(c).flatten()
    }

    /// The piece type at a coordinate, if occupied
    pub fn type_at(&self, c: Coord) -> Option<PieceType> {
        self.piece_at(c).map(|p| p.piece_type)
    }

    /// Check if a coordinate is in bounds and occupied
    pub fn is_occupied(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(Some(_)))
    }

    /// Check if a coordinate is in bounds and empty
    pub fn is_empty_cell(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(None))
    }

    /// Set cell at a coordinate; returns false if out of bounds
    pub fn set(&mut self, c: Coord, cell: Cell) -> bool {
        match self.index(c) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Remove and return the piece at a coordinate
    pub fn take(&mut self, c: Coord) -> Option<Piece> {
        let idx = self.index(c)?;
        self.cells[idx].take()
    }

    /// Create a fresh piece of the given type at a coordinate.
    ///
    /// Allocates the next piece id. Any previous occupant of the cell is
    /// overwritten. Returns `None` only when the coordinate is out of bounds.
    pub fn spawn(&mut self, c: Coord, piece_type: PieceType) -> Option<Piece> {
        let idx = self.index(c)?;
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        let piece = Piece {
            id: PieceId(self.next_piece_id),
            piece_type,
        };
        self.cells[idx] = Some(piece);
        Some(piece)
    }

    /// Move the piece at `from` into the empty cell at `to`.
    ///
    /// Returns the moved piece, or `None` (no mutation) if `from` is empty,
    /// `to` is occupied, or either coordinate is out of bounds.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        if self.cells[to_idx].is_some() {
            return None;
        }
        let piece = self.cells[from_idx].take()?;
        self.cells[to_idx] = Some(piece);
        Some(piece)
    }

    /// Exchange the occupants of two cells; returns false if either is out of
    /// bounds
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Check that every cell is occupied (a settled board is always full)
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterate all in-bounds coordinates, row-major from the bottom row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width as i8;
        let height = self.height as i8;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_grid_types::DEFAULT_CATALOG;

    #[test]
    fn test_grid_new_empty() {
        let grid = Grid::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.coords().count(), 64);
        for c in grid.coords() {
            assert_eq!(grid.get(c), Some(None));
        }
        assert!(!grid.is_full());
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(8, 6);

        assert!(grid.in_bounds(Coord::new(0, 0)));
        assert!(grid.in_bounds(Coord::new(7, 5)));
        assert!(!grid.in_bounds(Coord::new(-1, 0)));
        assert!(!grid.in_bounds(Coord::new(0, -1)));
        assert!(!grid.in_bounds(Coord::new(8, 0)));
        assert!(!grid.in_bounds(Coord::new(0, 6)));

        assert_eq!(grid.get(Coord::new(8, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 6)), None);
    }

    #[test]
    fn test_spawn_allocates_increasing_ids() {
        let mut grid = Grid::new(4, 4);

        let a = grid.spawn(Coord::new(0, 0), DEFAULT_CATALOG[0]).unwrap();
        let b = grid.spawn(Coord::new(1, 0), DEFAULT_CATALOG[1]).unwrap();

        assert!(b.id > a.id);
        assert_eq!(grid.piece_at(Coord::new(0, 0)), Some(a));
        assert_eq!(grid.piece_at(Coord::new(1, 0)), Some(b));
    }

    #[test]
    fn test_spawn_out_of_bounds() {
        let mut grid = Grid::new(4, 4);
        assert_eq!(grid.spawn(Coord::new(4, 0), DEFAULT_CATALOG[0]), None);
        assert_eq!(grid.spawn(Coord::new(0, -1), DEFAULT_CATALOG[0]), None);
    }

    #[test]
    fn test_take_empties_cell() {
        let mut grid = Grid::new(4, 4);
        let c = Coord::new(2, 2);
        let piece = grid.spawn(c, DEFAULT_CATALOG[2]).unwrap();

        assert_eq!(grid.take(c), Some(piece));
        assert_eq!(grid.get(c), Some(None));
        assert_eq!(grid.take(c), None);
    }

    #[test]
    fn test_move_piece_keeps_identity() {
        let mut grid = Grid::new(4, 6);
        let from = Coord::new(2, 5);
        let to = Coord::new(2, 2);
        let piece = grid.spawn(from, DEFAULT_CATALOG[0]).unwrap();

        let moved = grid.move_piece(from, to).unwrap();
        assert_eq!(moved.id, piece.id);
        assert_eq!(grid.get(from), Some(None));
        assert_eq!(grid.piece_at(to), Some(piece));
    }

    #[test]
    fn test_move_piece_refuses_occupied_target() {
        let mut grid = Grid::new(4, 4);
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        grid.spawn(a, DEFAULT_CATALOG[0]);
        grid.spawn(b, DEFAULT_CATALOG[1]);

        assert_eq!(grid.move_piece(b, a), None);
        assert!(grid.is_occupied(a));
        assert!(grid.is_occupied(b));
    }

    #[test]
    fn test_swap_exchanges_cells() {
        let mut grid = Grid::new(4, 4);
        let a = Coord::new(0, 0);
        let b = Coord::new(1, 0);
        let pa = grid.spawn(a, DEFAULT_CATALOG[0]).unwrap();
        let pb = grid.spawn(b, DEFAULT_CATALOG[1]).unwrap();

        assert!(grid.swap(a, b));
        assert_eq!(grid.piece_at(a), Some(pb));
        assert_eq!(grid.piece_at(b), Some(pa));

        // Out of bounds swap is refused
        assert!(!grid.swap(a, Coord::new(9, 9)));
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(2, 2);
        for c in grid.coords().collect::<Vec<_>>() {
            grid.spawn(c, DEFAULT_CATALOG[0]);
        }
        assert!(grid.is_full());

        grid.take(Coord::new(1, 1));
        assert!(!grid.is_full());
    }

    #[test]
    fn test_coords_order_bottom_up() {
        let grid = Grid::new(3, 2);
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[2], Coord::new(2, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
        assert_eq!(coords.len(), 6);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(3, 3);
        for c in grid.coords().collect::<Vec<_>>() {
            grid.spawn(c, DEFAULT_CATALOG[1]);
        }
        grid.clear();
        assert!(grid.coords().all(|c| grid.get(c) == Some(None)));
    }
}
