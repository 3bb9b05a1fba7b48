//! PlayField tests - occupancy, writes, and row clearing

use falling_blocks::core::PlayField;
use falling_blocks::types::{Cell, PieceColor, COLUMNS, ROWS};

fn fill_row(field: &mut PlayField, y: i8, color: PieceColor) {
    for x in 0..COLUMNS as i8 {
        field.set_cell(x, y, color);
    }
}

fn rows_of(field: &PlayField) -> Vec<Vec<Cell>> {
    (0..ROWS as usize).map(|y| field.row(y).to_vec()).collect()
}

#[test]
fn test_field_new_empty() {
    let field = PlayField::new();
    assert_eq!(field.width(), COLUMNS);
    assert_eq!(field.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLUMNS as i8 {
            assert!(!field.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(field.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = PlayField::new();

    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);
    assert_eq!(field.get(COLUMNS as i8, 0), None);
    assert_eq!(field.get(0, ROWS as i8), None);
}

#[test]
fn test_set_cell_and_is_occupied() {
    let mut field = PlayField::new();

    field.set_cell(5, 10, PieceColor::Yellow);
    assert!(field.is_occupied(5, 10));
    assert_eq!(field.get(5, 10), Some(Some(PieceColor::Yellow)));

    // Neighbours untouched
    assert!(!field.is_occupied(4, 10));
    assert!(!field.is_occupied(5, 11));

    // Out of bounds is never occupied
    assert!(!field.is_occupied(-1, 10));
    assert!(!field.is_occupied(5, ROWS as i8));
}

#[test]
fn test_is_row_full() {
    let mut field = PlayField::new();
    for x in 0..COLUMNS as i8 - 1 {
        field.set_cell(x, 19, PieceColor::Red);
    }
    assert!(!field.is_row_full(19));

    field.set_cell(COLUMNS as i8 - 1, 19, PieceColor::Red);
    assert!(field.is_row_full(19));
    assert!(!field.is_row_full(ROWS as usize));
}

#[test]
fn test_clear_single_bottom_row_shifts_stack_down() {
    let mut field = PlayField::new();
    field.set_cell(2, 17, PieceColor::Green);
    field.set_cell(7, 18, PieceColor::Blue);
    fill_row(&mut field, 19, PieceColor::Red);

    let cleared = field.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    assert_eq!(field.get(2, 18), Some(Some(PieceColor::Green)));
    assert_eq!(field.get(7, 19), Some(Some(PieceColor::Blue)));
    assert!(!field.is_occupied(2, 17));
    assert!(!field.is_row_full(19));
}

#[test]
fn test_clear_rows_three_and_five_keeps_order() {
    let mut field = PlayField::new();
    // Every row gets a marker in a distinct column so rows are distinguishable.
    for y in 0..ROWS as i8 {
        field.set_cell(y % COLUMNS as i8, y, PieceColor::Orange);
    }
    fill_row(&mut field, 3, PieceColor::Red);
    fill_row(&mut field, 5, PieceColor::Red);
    let before = rows_of(&field);

    let cleared = field.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    let after = rows_of(&field);
    assert_eq!(after.len(), ROWS as usize);
    assert!(after[0].iter().all(|c| c.is_none()));
    assert!(after[1].iter().all(|c| c.is_none()));

    let survivors: Vec<_> = before
        .iter()
        .enumerate()
        .filter(|(y, _)| *y != 3 && *y != 5)
        .map(|(_, row)| row.clone())
        .collect();
    assert_eq!(&after[2..], &survivors[..]);
}

#[test]
fn test_clear_leaves_no_full_rows() {
    let mut field = PlayField::new();
    for y in [0, 7, 8, 19] {
        fill_row(&mut field, y, PieceColor::Blue);
    }
    assert_eq!(field.clear_full_rows().len(), 4);
    assert!((0..ROWS as usize).all(|y| !field.is_row_full(y)));
    assert_eq!(field, PlayField::new());
}
