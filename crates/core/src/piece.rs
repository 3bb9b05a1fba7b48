//! Piece module - the falling piece and its interaction with the field
//!
//! A piece is a shared catalog [`Shape`], a color, and the field position of
//! the shape's local origin. It moves only by whole-cell translations and
//! stays `Falling` until a blocked downward move locks it into the field.

use arrayvec::ArrayVec;

use crate::error::LockError;
use crate::field::PlayField;
use crate::rng::PieceSource;
use crate::shapes::{shape, Shape};
use crate::types::{PieceColor, ShapeKind, COLUMNS, ROWS};

/// Result of a single [`ActivePiece::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece was translated
    Moved,
    /// The move collided and was absorbed; nothing changed
    Blocked,
    /// A downward move collided: the piece is now part of the field
    Locked {
        /// Number of full rows removed by the lock
        lines_cleared: usize,
    },
}

impl MoveOutcome {
    /// True when the piece is retired and a new one should spawn
    pub fn locked(&self) -> bool {
        matches!(self, MoveOutcome::Locked { .. })
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    shape: &'static Shape,
    color: PieceColor,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn position: horizontally centered, row 0
    pub fn new(kind: ShapeKind, color: PieceColor) -> Self {
        let shape = shape(kind);
        Self {
            shape,
            color,
            x: (COLUMNS / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Spawn a piece whose shape and color are drawn from `source`, in that order
    pub fn spawn(source: &mut impl PieceSource) -> Self {
        let shape_idx = source.next_index(ShapeKind::ALL.len());
        let color_idx = source.next_index(PieceColor::ALL.len());
        // next_index is bounded, so both lookups succeed.
        let kind = ShapeKind::from_index(shape_idx).unwrap_or(ShapeKind::I);
        let color = PieceColor::from_index(color_idx).unwrap_or(PieceColor::Red);
        let piece = Self::new(kind, color);
        tracing::debug!(?kind, ?color, x = piece.x, y = piece.y, "spawned piece");
        piece
    }

    /// Place a piece at an arbitrary position (for setting up scenarios)
    pub fn at(kind: ShapeKind, color: PieceColor, x: i8, y: i8) -> Self {
        Self {
            shape: shape(kind),
            color,
            x,
            y,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Absolute field coordinates of every filled cell, offset by (dx, dy).
    ///
    /// Rows may be negative while the piece is partly above the field.
    fn cells_at(&self, dx: i8, dy: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c)| (self.x + c as i8 + dx, self.y + r as i8 + dy))
    }

    /// Absolute field coordinates of every filled cell
    pub fn cells(&self) -> ArrayVec<(i8, i8), 16> {
        self.cells_at(0, 0).collect()
    }

    /// Check whether translating by (dx, dy) would hit a wall, the floor, or a filled cell.
    ///
    /// Cells above row 0 never collide on their own.
    pub fn collides(&self, field: &PlayField, dx: i8, dy: i8) -> bool {
        self.cells_at(dx, dy).any(|(x, y)| {
            x < 0 || x >= COLUMNS as i8 || y >= ROWS as i8 || (y >= 0 && field.is_occupied(x, y))
        })
    }

    /// Check whether the piece already overlaps the field where it stands
    pub fn overlaps(&self, field: &PlayField) -> bool {
        self.collides(field, 0, 0)
    }

    /// Translate by (dx, dy) if nothing is in the way.
    ///
    /// A blocked downward move locks the piece into `field`; blocked sideways
    /// or upward moves leave everything untouched.
    pub fn try_move(
        &mut self,
        field: &mut PlayField,
        dx: i8,
        dy: i8,
    ) -> Result<MoveOutcome, LockError> {
        if !self.collides(field, dx, dy) {
            self.x += dx;
            self.y += dy;
            return Ok(MoveOutcome::Moved);
        }

        if dy > 0 {
            let lines_cleared = self.lock(field)?;
            return Ok(MoveOutcome::Locked { lines_cleared });
        }

        Ok(MoveOutcome::Blocked)
    }

    /// Write the piece's cells into `field` and clear any completed rows.
    ///
    /// Returns the number of cleared rows. A piece with any cell above row 0
    /// is rejected with [`LockError::Overflow`] before anything is written.
    pub fn lock(&self, field: &mut PlayField) -> Result<usize, LockError> {
        if let Some((x, y)) = self.cells_at(0, 0).find(|&(_, y)| y < 0) {
            tracing::debug!(x, y, kind = ?self.kind(), "lock rejected above the field");
            return Err(LockError::Overflow { x, y });
        }

        for (x, y) in self.cells_at(0, 0) {
            field.set_cell(x, y, self.color);
        }
        tracing::debug!(kind = ?self.kind(), x = self.x, y = self.y, "locked piece");

        Ok(field.clear_full_rows().len())
    }
}
