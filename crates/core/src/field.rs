//! Field module - manages the playfield grid
//!
//! The field is a 10x20 grid where each cell is either empty or holds the color
//! of the piece that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceColor, COLUMNS, ROWS};

/// Total number of cells on the field
const FIELD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// Row indices removed by a single [`PlayField::clear_full_rows`] call
pub type ClearedRows = ArrayVec<usize, { ROWS as usize }>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct PlayField {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; FIELD_SIZE],
}

impl PlayField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLUMNS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLUMNS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLUMNS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Fill cell (x, y) with `color`.
    ///
    /// Callers keep (x, y) in bounds; a write outside the field is dropped.
    pub fn set_cell(&mut self, x: i8, y: i8, color: PieceColor) {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = Some(color),
            None => tracing::warn!(x, y, ?color, "ignoring write outside the field"),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`, left to right.
    ///
    /// Panics if `y` is not a valid row.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLUMNS as usize;
        &self.cells[start..start + COLUMNS as usize]
    }

    /// Remove every full row at once and compact the rest downwards.
    ///
    /// Non-full rows keep their relative order and empty rows are inserted at the
    /// top, so the field always has exactly `ROWS` rows. Returns the indices of
    /// the removed rows (pre-clear numbering, top to bottom); its length is the
    /// number of cleared lines.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let cleared: ClearedRows = (0..ROWS as usize).filter(|&y| self.is_row_full(y)).collect();
        if cleared.is_empty() {
            return cleared;
        }

        // Survivors sink onto the floor in their original order; `dst` is the
        // lowest row not yet filled by a survivor.
        let width = COLUMNS as usize;
        let mut dst = ROWS as usize;
        for src in (0..ROWS as usize).rev().filter(|y| !cleared.contains(y)) {
            dst -= 1;
            if dst != src {
                self.cells
                    .copy_within(src * width..(src + 1) * width, dst * width);
            }
        }

        // One fresh row on top per removed row.
        debug_assert_eq!(dst, cleared.len());
        self.cells[..dst * width].fill(None);

        tracing::info!(rows = ?cleared.as_slice(), "cleared full rows");
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire field
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a field from rows of cells, top row first (for testing)
    #[cfg(test)]
    pub fn from_rows(rows: &[[Cell; COLUMNS as usize]; ROWS as usize]) -> Self {
        let mut cells = [None; FIELD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y * COLUMNS as usize..(y + 1) * COLUMNS as usize].copy_from_slice(row);
        }
        Self { cells }
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = COLUMNS as usize;
    const H: usize = ROWS as usize;

    fn fill_row(field: &mut PlayField, y: i8, color: PieceColor) {
        for x in 0..COLUMNS as i8 {
            field.set_cell(x, y, color);
        }
    }

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(PlayField::index(0, 0), Some(0));
        assert_eq!(PlayField::index(9, 0), Some(9));
        assert_eq!(PlayField::index(0, 1), Some(10));
        assert_eq!(PlayField::index(9, 19), Some(199));
        assert_eq!(PlayField::index(-1, 0), None);
        assert_eq!(PlayField::index(10, 0), None);
        assert_eq!(PlayField::index(0, 20), None);
    }

    #[test]
    fn test_set_cell_writes_flat_array() {
        let mut field = PlayField::new();
        field.set_cell(0, 0, PieceColor::Red);
        field.set_cell(5, 10, PieceColor::Blue);

        assert_eq!(field.cells[0], Some(PieceColor::Red));
        assert_eq!(field.cells[10 * W + 5], Some(PieceColor::Blue));
    }

    #[test]
    fn test_set_cell_out_of_bounds_is_dropped() {
        let mut field = PlayField::new();
        field.set_cell(-1, 0, PieceColor::Red);
        field.set_cell(0, -1, PieceColor::Red);
        field.set_cell(COLUMNS as i8, 0, PieceColor::Red);
        field.set_cell(0, ROWS as i8, PieceColor::Red);
        assert_eq!(field, PlayField::new());
    }

    #[test]
    fn test_clear_rows_three_and_five() {
        let mut rows = [[None; W]; H];
        for (y, row) in rows.iter_mut().enumerate() {
            // Mark every non-full row with a single distinguishable cell.
            row[y % W] = Some(PieceColor::Green);
        }
        rows[3] = [Some(PieceColor::Red); W];
        rows[5] = [Some(PieceColor::Blue); W];
        let mut field = PlayField::from_rows(&rows);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[3, 5]);

        assert!(field.row(0).iter().all(|c| c.is_none()));
        assert!(field.row(1).iter().all(|c| c.is_none()));

        let survivors: Vec<usize> = (0..H).filter(|y| *y != 3 && *y != 5).collect();
        for (offset, old_y) in survivors.iter().enumerate() {
            assert_eq!(field.row(offset + 2), &rows[*old_y][..], "old row {old_y}");
        }
    }

    #[test]
    fn test_cleared_rows_are_reported_top_to_bottom() {
        let mut field = PlayField::new();
        field.set_cell(0, 1, PieceColor::Yellow);
        field.set_cell(1, 10, PieceColor::Orange);
        for y in [17, 2, 9] {
            fill_row(&mut field, y, PieceColor::Red);
        }

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[2, 9, 17]);

        // Row 1 sits above all three removed rows, row 10 above one of them.
        assert_eq!(field.get(0, 4), Some(Some(PieceColor::Yellow)));
        assert_eq!(field.get(1, 11), Some(Some(PieceColor::Orange)));
        assert_eq!(field.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_full_rows_without_full_rows_is_noop() {
        let mut field = PlayField::new();
        field.set_cell(3, 19, PieceColor::Yellow);
        field.set_cell(4, 12, PieceColor::Orange);
        let before = field.clone();

        assert!(field.clear_full_rows().is_empty());
        assert_eq!(field, before);
    }

    #[test]
    fn test_clear_whole_field() {
        let mut field = PlayField::new();
        for y in 0..ROWS as i8 {
            fill_row(&mut field, y, PieceColor::Red);
        }
        assert_eq!(field.clear_full_rows().len(), H);
        assert_eq!(field, PlayField::new());
    }

    #[test]
    fn test_clear_resets_field() {
        let mut field = PlayField::new();
        fill_row(&mut field, 19, PieceColor::Green);
        field.clear();
        assert!(field.cells().iter().all(|c| c.is_none()));
    }
}
