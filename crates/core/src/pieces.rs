//! Pieces module - piece templates, shape matrices and rotation
//!
//! Every piece kind has one hand-authored template: a rectangular 0/1 matrix
//! plus a color tag. The active piece owns a copy of its matrix, so rotating
//! it never touches the template.
//!
//! Rotation is a pure quarter turn of the matrix (transpose, then reverse the
//! row order). There is no kick table: a blocked rotation is simply rejected
//! by the caller.

use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Largest side of any template.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Rectangular occupancy matrix of at most 4x4 cells.
///
/// Cells outside `width x height` are always empty, so two shapes compare
/// equal exactly when their matrices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    width: u8,
    height: u8,
    /// Indexed `[row][col]`.
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// The width is the longest row; anything past 4x4 is dropped.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let height = rows.len().min(MAX_SHAPE_SIZE);
        let mut width = 0;

        for (r, row) in rows.iter().take(height).enumerate() {
            let row_width = row.len().min(MAX_SHAPE_SIZE);
            width = width.max(row_width);
            for (c, &v) in row.iter().take(row_width).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (`row`, `col`) is filled. False outside the matrix.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Filled cells as `(dx, dy)` offsets from the top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).flat_map(move |r| {
            (0..w)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Quarter turn: transpose, then reverse the row order.
    ///
    /// Returns a new shape; `self` is untouched so the caller can validate
    /// the candidate before committing it.
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[c][w - 1 - r];
            }
        }

        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Matrix as rows of 0/1, mainly for tests and debugging output.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| u8::from(self.is_filled(r, c)))
                    .collect()
            })
            .collect()
    }
}

/// Immutable template of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceDefinition {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

/// Template matrix rows for a piece kind
pub fn template(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    }
}

/// Get the template for a piece kind
pub fn definition(kind: PieceKind) -> PieceDefinition {
    PieceDefinition {
        kind,
        shape: Shape::from_rows(template(kind)),
        color: kind.color(),
    }
}

/// The falling piece: its own copy of the shape, a color, and the board
/// coordinate of the matrix's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub color: Color,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` on the top row, horizontally centered.
    pub fn spawn(kind: PieceKind) -> Self {
        let def = definition(kind);
        Self {
            kind,
            color: def.color,
            shape: def.shape,
            x: spawn_x(&def.shape),
            y: 0,
        }
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The same piece translated by (dx, dy).
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// The same piece with a different shape at the same anchor.
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}

/// Spawn column: `floor(cols / 2) - ceil(width / 2)`.
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - shape.width().div_ceil(2) as i8
}
