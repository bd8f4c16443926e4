//! Grid tests - bounds, occupancy, and piece identity

use match_grid::core::Grid;
use match_grid::types::{Coord, DEFAULT_CATALOG};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(8, 8);
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 8);

    for y in 0..8 {
        for x in 0..8 {
            let c = Coord::new(x, y);
            assert!(grid.in_bounds(c), "({}, {}) should be in bounds", x, y);
            assert_eq!(grid.get(c), Some(None));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(8, 6);

    assert_eq!(grid.get(Coord::new(-1, 0)), None);
    assert_eq!(grid.get(Coord::new(0, -1)), None);
    assert_eq!(grid.get(Coord::new(8, 0)), None);
    assert_eq!(grid.get(Coord::new(0, 6)), None);
}

#[test]
fn test_grid_spawn_and_take() {
    let mut grid = Grid::new(8, 8);
    let c = Coord::new(5, 2);

    let piece = grid.spawn(c, DEFAULT_CATALOG[0]).unwrap();
    assert!(grid.is_occupied(c));
    assert_eq!(grid.type_at(c), Some(DEFAULT_CATALOG[0]));

    assert_eq!(grid.take(c), Some(piece));
    assert!(grid.is_empty_cell(c));
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new(8, 8);

    assert!(!grid.set(Coord::new(-1, 0), None));
    assert!(!grid.set(Coord::new(8, 0), None));
    assert_eq!(grid.spawn(Coord::new(0, 8), DEFAULT_CATALOG[0]), None);
}

#[test]
fn test_piece_identity_stable_across_moves() {
    let mut grid = Grid::new(4, 8);
    let piece = grid.spawn(Coord::new(2, 5), DEFAULT_CATALOG[3]).unwrap();

    // Falling from (2,5) to (2,2) keeps the same piece, not a new one
    let moved = grid.move_piece(Coord::new(2, 5), Coord::new(2, 2)).unwrap();
    assert_eq!(moved.id, piece.id);
    assert_eq!(moved.piece_type, piece.piece_type);
    assert_eq!(grid.piece_at(Coord::new(2, 2)), Some(piece));
    assert!(grid.is_empty_cell(Coord::new(2, 5)));
}

#[test]
fn test_piece_never_in_two_cells() {
    let mut grid = Grid::new(4, 4);
    let from = Coord::new(1, 3);
    let to = Coord::new(1, 0);
    grid.spawn(from, DEFAULT_CATALOG[1]);
    grid.move_piece(from, to);

    let occupied: Vec<Coord> = (0..4)
        .flat_map(|y| (0..4).map(move |x| Coord::new(x, y)))
        .filter(|&c| grid.is_occupied(c))
        .collect();
    assert_eq!(occupied, vec![to]);
}

#[test]
fn test_ids_unique_across_spawns() {
    let mut grid = Grid::new(8, 8);
    let mut ids = std::collections::HashSet::new();

    for y in 0..8 {
        for x in 0..8 {
            let piece = grid
                .spawn(Coord::new(x, y), DEFAULT_CATALOG[(x + y) as usize % 6])
                .unwrap();
            assert!(ids.insert(piece.id), "duplicate id {:?}", piece.id);
        }
    }
    assert!(grid.is_full());
}
