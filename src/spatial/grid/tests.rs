use super::*;

#[test]
fn test_fresh_grid_returns_default_everywhere() {
    let grid = SparseGrid2D::new(-1i32);

    for &(x, y) in &[(0, 0), (i32::MIN, i32::MAX), (i32::MAX, i32::MIN), (-17, 42)] {
        assert_eq!(*grid.get(x, y), -1, "Unset cell ({}, {}) should read as default", x, y);
    }
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
}

#[test]
fn test_set_then_get_returns_value() {
    let mut grid = SparseGrid2D::new(0u32);

    grid.set(3, -4, 99);
    grid.set(i32::MIN, i32::MAX, 7);

    assert_eq!(*grid.get(3, -4), 99);
    assert_eq!(*grid.get(i32::MIN, i32::MAX), 7);
    assert_eq!(*grid.get(4, -4), 0, "Neighbor of a set cell stays default");
    assert_eq!(grid.len(), 2);
}

#[test]
fn test_set_overwrites_and_returns_previous() {
    let mut grid = SparseGrid2D::new(0u32);

    assert_eq!(grid.set(1, 1, 5), None);
    assert_eq!(grid.set(1, 1, 6), Some(5));
    assert_eq!(*grid.get(1, 1), 6);
    assert_eq!(grid.len(), 1);
}

#[test]
fn test_random_set_get_matches_reference() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut grid = SparseGrid2D::new(0u64);
    let mut reference = std::collections::HashMap::new();

    for _ in 0..2_000 {
        let x = rng.i32(-50..50);
        let y = rng.i32(-50..50);
        let value = rng.u64(1..u64::MAX);
        grid.set(x, y, value);
        reference.insert((x, y), value);
    }

    for (&(x, y), &value) in &reference {
        assert_eq!(*grid.get(x, y), value);
    }
    assert_eq!(grid.len(), reference.len());
}

#[test]
fn test_clearing_only_cell_reclaims_row() {
    let mut grid = SparseGrid2D::new(false);

    grid.set(10, 20, true);
    assert_eq!(grid.row_count(), 1);

    assert_eq!(grid.clear_cell(10, 20), Some(true));
    assert!(grid.is_empty(), "Row should be deallocated once its last cell is cleared");
    assert_eq!(grid.row_count(), 0);
    assert!(!*grid.get(10, 20));
}

#[test]
fn test_clear_cell_keeps_non_empty_rows() {
    let mut grid = SparseGrid2D::new(0u8);

    grid.set(0, 5, 1);
    grid.set(1, 5, 2);
    grid.set(0, 6, 3);

    grid.clear_cell(0, 5);
    assert_eq!(grid.row_count(), 2, "Row 5 still has a cell");
    assert_eq!(*grid.get(1, 5), 2);

    grid.clear_cell(1, 5);
    assert_eq!(grid.row_count(), 1);
    assert!(!grid.is_empty());
    assert_eq!(grid.len(), 1);
}

#[test]
fn test_clear_cell_on_unset_cell_is_noop() {
    let mut grid = SparseGrid2D::new(0u8);
    grid.set(0, 0, 1);

    assert_eq!(grid.clear_cell(5, 0), None, "Unset column in existing row");
    assert_eq!(grid.clear_cell(0, 9), None, "Missing row");
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.row_count(), 1);
}

#[test]
fn test_clear_removes_everything() {
    let mut grid = SparseGrid2D::new(0i16);
    for i in -10..10 {
        grid.set(i, i * 3, i as i16);
    }

    grid.clear();

    assert!(grid.is_empty());
    assert_eq!(*grid.get(2, 6), 0);
}

#[test]
fn test_set_to_default_value_counts_as_set() {
    let mut grid = SparseGrid2D::new(0u8);
    grid.set(2, 2, 0);

    assert!(grid.contains(2, 2));
    assert!(!grid.is_empty());
    assert_eq!(grid.clear_cell(2, 2), Some(0));
    assert!(grid.is_empty());
}

#[test]
fn test_get_mut_does_not_allocate_rows() {
    let mut grid = SparseGrid2D::new(0u32);

    assert!(grid.get_mut(1, 1).is_none());
    assert!(grid.is_empty());

    grid.set(1, 1, 10);
    if let Some(cell) = grid.get_mut(1, 1) {
        *cell += 5;
    }
    assert_eq!(*grid.get(1, 1), 15);
}

#[test]
fn test_iter_visits_each_set_cell_once() {
    let mut grid = SparseGrid2D::new(' ');
    grid.set(0, 0, 'a');
    grid.set(-3, 0, 'b');
    grid.set(7, 12, 'c');

    let mut cells: Vec<_> = grid.iter().map(|(x, y, v)| (x, y, *v)).collect();
    cells.sort();

    assert_eq!(cells, vec![(-3, 0, 'b'), (0, 0, 'a'), (7, 12, 'c')]);
}

#[test]
fn test_default_trait_uses_type_default() {
    let grid: SparseGrid2D<u16> = SparseGrid2D::default();
    assert_eq!(*grid.default_value(), 0);
    assert_eq!(*grid.get(1, 2), 0);
}

// ============================================================================
// SparseGrid3D
// ============================================================================

#[test]
fn test_3d_fresh_grid_returns_default() {
    let grid = SparseGrid3D::new(255u8);
    assert_eq!(*grid.get(0, 0, 0), 255);
    assert_eq!(*grid.get(-9, 4, i32::MAX), 255);
    assert!(grid.is_empty());
}

#[test]
fn test_3d_set_then_get_returns_value() {
    let mut grid = SparseGrid3D::new(0i32);

    grid.set(1, 2, 3, 42);
    grid.set(1, 2, -3, 43);

    assert_eq!(*grid.get(1, 2, 3), 42);
    assert_eq!(*grid.get(1, 2, -3), 43);
    assert_eq!(*grid.get(1, 2, 0), 0);
    assert_eq!(grid.layer_count(), 2);
    assert_eq!(grid.len(), 2);
}

#[test]
fn test_3d_clearing_only_cell_reclaims_layer() {
    let mut grid = SparseGrid3D::new(0u8);

    grid.set(5, 5, 5, 1);
    assert_eq!(grid.clear_cell(5, 5, 5), Some(1));

    assert!(grid.is_empty(), "Layer should be deallocated once its last cell is cleared");
    assert_eq!(grid.layer_count(), 0);
    assert!(grid.layer(5).is_none());
}

#[test]
fn test_3d_layer_reclaims_rows_recursively() {
    let mut grid = SparseGrid3D::new(0u8);

    grid.set(0, 0, 1, 1);
    grid.set(0, 1, 1, 2);
    grid.clear_cell(0, 0, 1);

    let layer = grid.layer(1).expect("Layer 1 still has a cell");
    assert_eq!(layer.row_count(), 1, "Emptied row inside the layer must be reclaimed");

    grid.clear_cell(0, 1, 1);
    assert!(grid.is_empty());
}

#[test]
fn test_3d_new_layers_inherit_default() {
    let mut grid = SparseGrid3D::new(9u8);
    grid.set(0, 0, 2, 1);

    let layer = grid.layer(2).expect("Layer should exist after set");
    assert_eq!(*layer.default_value(), 9);
    assert_eq!(*layer.get(100, 100), 9);
}

#[test]
fn test_3d_iter_and_contains() {
    let mut grid = SparseGrid3D::new(0u8);
    grid.set(1, 2, 3, 4);
    grid.set(-1, -2, -3, 5);

    assert!(grid.contains(1, 2, 3));
    assert!(!grid.contains(1, 2, 4));

    let mut cells: Vec<_> = grid.iter().map(|(x, y, z, v)| (x, y, z, *v)).collect();
    cells.sort();
    assert_eq!(cells, vec![(-1, -2, -3, 5), (1, 2, 3, 4)]);

    if let Some(cell) = grid.get_mut(1, 2, 3) {
        *cell = 8;
    }
    assert_eq!(*grid.get(1, 2, 3), 8);

    grid.clear();
    assert!(grid.is_empty());
}
