//! Shapes module - the fixed tetromino catalog
//!
//! Each shape is a literal 0/1 matrix in its own local frame: row 0 is the top
//! of the bounding box and column 0 its left edge. Shapes never change after
//! creation and pieces share them by reference.

use crate::types::ShapeKind;

/// Immutable rectangular occupancy matrix of a piece variant
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    matrix: &'static [&'static [u8]],
}

impl Shape {
    const fn new(kind: ShapeKind, matrix: &'static [&'static [u8]]) -> Self {
        Self { kind, matrix }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Height of the bounding box
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    /// Width of the bounding box
    pub fn cols(&self) -> usize {
        self.matrix[0].len()
    }

    /// The literal matrix, top row first
    pub fn matrix(&self) -> &'static [&'static [u8]] {
        self.matrix
    }

    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        self.matrix
            .get(r)
            .and_then(|row| row.get(c))
            .is_some_and(|&v| v != 0)
    }

    /// Local `(row, col)` of every filled cell, row-major
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(move |(c, _)| (r, c))
        })
    }
}

/// All seven shapes, indexed by [`ShapeKind::index`]
pub static SHAPES: [Shape; 7] = [
    Shape::new(ShapeKind::I, &[&[1, 1, 1, 1]]),
    Shape::new(ShapeKind::O, &[&[1, 1], &[1, 1]]),
    Shape::new(ShapeKind::T, &[&[0, 1, 0], &[1, 1, 1]]),
    Shape::new(ShapeKind::Z, &[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new(ShapeKind::S, &[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new(ShapeKind::L, &[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new(ShapeKind::J, &[&[0, 0, 1], &[1, 1, 1]]),
];

/// Get the catalog shape for a piece kind
pub fn shape(kind: ShapeKind) -> &'static Shape {
    &SHAPES[kind.index()]
}
