//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! The playfield is a 300x600 pixel area split into 30 pixel cells:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Gravity cadence (10 ticks per second) |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{GameAction, PieceColor, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::I));
//! assert_eq!(PieceColor::from_index(4), Some(PieceColor::Orange));
//! assert_eq!(GameAction::MoveLeft.delta(), Some((-1, 0)));
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Field width in cells (10 columns)
pub const COLUMNS: u8 = 10;

/// Field height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Gravity interval in milliseconds (10 ticks per second)
pub const TICK_MS: u32 = 100;

/// The seven tetromino shape variants, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    Z,
    S,
    L,
    J,
}

impl ShapeKind {
    /// Every shape, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Position of this shape in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a shape by catalog index.
    ///
    /// ```
    /// use falling_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(2), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Piece colors.
///
/// A locked cell remembers the color of the piece that filled it; the core
/// treats the value as opaque and only the renderer maps it to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
}

impl PieceColor {
    /// The palette, in selection order.
    pub const ALL: [PieceColor; 5] = [
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Yellow,
        PieceColor::Orange,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// RGB triple used when drawing this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceColor::Red => (255, 0, 0),
            PieceColor::Green => (0, 255, 0),
            PieceColor::Blue => (0, 0, 255),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Orange => (255, 165, 0),
        }
    }
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell filled by a locked piece of that color
pub type Cell = Option<PieceColor>;

/// Actions the game loop can apply to a session.
///
/// Each movement action translates to exactly one move of the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks it if blocked)
    SoftDrop,
    /// Clear the field and start over
    Restart,
}

impl GameAction {
    /// Translation `(dx, dy)` applied by a movement action.
    ///
    /// Returns `None` for actions that do not move the piece.
    pub fn delta(self) -> Option<(i8, i8)> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::SoftDrop => Some((0, 1)),
            GameAction::Restart => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_field_dimensions() {
        // 300x600 pixels at 30 pixels per cell, 10 frames per second.
        assert_eq!(COLUMNS as u32, 300 / 30);
        assert_eq!(ROWS as u32, 600 / 30);
        assert_eq!(TICK_MS, 1000 / 10);
    }

    #[test]
    fn shape_index_roundtrip() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeKind::from_index(i), Some(*kind));
        }
    }

    #[test]
    fn palette_has_five_colors() {
        assert_eq!(PieceColor::ALL.len(), 5);
        assert_eq!(PieceColor::from_index(5), None);
        assert_eq!(PieceColor::Orange.rgb(), (255, 165, 0));
    }

    #[test]
    fn restart_has_no_delta() {
        assert_eq!(GameAction::Restart.delta(), None);
        assert_eq!(GameAction::SoftDrop.delta(), Some((0, 1)));
        assert_eq!(GameAction::MoveRight.delta(), Some((1, 0)));
    }
}
