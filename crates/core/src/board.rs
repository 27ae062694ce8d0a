//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color tag of
//! the piece that was fixed there. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of columns as a `usize`.
pub const WIDTH: usize = BOARD_WIDTH as usize;

/// Number of rows as a `usize`.
pub const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// A row removed by a line clear, with the color tags it held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearedRow {
    /// Row index at the time it was detected as full.
    pub y: u8,
    pub cells: [Cell; WIDTH],
}

/// Rows cleared by a single fixing event, top to bottom.
pub type ClearedRows = ArrayVec<ClearedRow, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a piece cell may not go here: outside the walls or floor, or filled.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(None))
    }

    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Cells of row `y`, left to right. Empty slice when out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= HEIGHT {
            return &[];
        }
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift all rows above it down by one and leave an empty row on top.
    /// Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);

        true
    }

    /// Clear every full row, scanning top to bottom.
    ///
    /// Each reported row carries its index at detection time and the color tags
    /// it held. Rows below a cleared row are untouched by the shift, so the
    /// reported indices match the board as it was before the call.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();

        for y in 0..HEIGHT {
            if !self.is_row_full(y) {
                continue;
            }
            let mut cells = [None; WIDTH];
            cells.copy_from_slice(self.row(y));
            self.clear_row(y);
            cleared.push(ClearedRow { y: y as u8, cells });
        }

        cleared
    }

    /// Write `color` into every filled cell of `shape` anchored at (x, y).
    ///
    /// Cells falling outside the board are skipped. Existing cells are
    /// overwritten; callers check placement with [`crate::collision::collides`].
    pub fn lock_shape(&mut self, shape: &Shape, x: i8, y: i8, color: Color) {
        for (dx, dy) in shape.cells() {
            self.set(x.saturating_add(dx), y.saturating_add(dy), Some(color));
        }
    }

    /// Any cell in the top row filled (game over condition)
    pub fn is_top_row_occupied(&self) -> bool {
        self.row(0).iter().any(|cell| cell.is_some())
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, color: Color) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_blocked_covers_walls_and_floor() {
        let mut board = Board::new();
        assert!(board.is_blocked(-1, 5));
        assert!(board.is_blocked(10, 5));
        assert!(board.is_blocked(3, 20));
        assert!(!board.is_blocked(3, 19));

        board.set(3, 19, Some(Color::Red));
        assert!(board.is_blocked(3, 19));
        assert!(board.is_occupied(3, 19));
        assert!(!board.is_occupied(3, 20));
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(0, 17, Some(Color::Blue));
        fill_row(&mut board, 18, Color::Cyan);
        board.set(4, 19, Some(Color::Green));

        let before = board.filled_count();
        assert!(board.clear_row(18));

        assert_eq!(board.filled_count(), before - WIDTH);
        assert_eq!(board.get(0, 18), Some(Some(Color::Blue)));
        assert_eq!(board.get(0, 17), Some(None));
        assert_eq!(board.get(4, 19), Some(Some(Color::Green)));
        assert!(board.row(0).iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_row_zero_and_out_of_range() {
        let mut board = Board::new();
        fill_row(&mut board, 0, Color::Red);
        assert!(board.clear_row(0));
        assert_eq!(board.filled_count(), 0);
        assert!(!board.clear_row(HEIGHT));
    }

    #[test]
    fn test_clear_full_rows_reports_prior_cells() {
        let mut board = Board::new();
        fill_row(&mut board, 17, Color::Orange);
        board.set(2, 18, Some(Color::Yellow));
        fill_row(&mut board, 19, Color::Purple);
        board.set(5, 19, Some(Color::Cyan));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        assert_eq!(cleared[0].y, 17);
        assert_eq!(cleared[0].cells, [Some(Color::Orange); WIDTH]);
        assert_eq!(cleared[1].y, 19);
        assert_eq!(cleared[1].cells[5], Some(Color::Cyan));

        // Only the partial row survives, now at the bottom.
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.get(2, 19), Some(Some(Color::Yellow)));
    }

    #[test]
    fn test_lock_shape_writes_exactly_the_shape_cells() {
        use crate::pieces::definition;
        use crate::types::PieceKind;

        for kind in PieceKind::ALL {
            let def = definition(kind);
            let mut shape = def.shape;
            for _ in 0..4 {
                let (x, y) = (3, 12);
                let mut board = Board::new();
                board.lock_shape(&shape, x, y, def.color);

                let mut expected: Vec<(i8, i8)> =
                    shape.cells().map(|(dx, dy)| (x + dx, y + dy)).collect();
                expected.sort_unstable();
                let mut filled: Vec<(i8, i8)> = (0..HEIGHT as i8)
                    .flat_map(|cy| (0..WIDTH as i8).map(move |cx| (cx, cy)))
                    .filter(|&(cx, cy)| board.is_occupied(cx, cy))
                    .collect();
                filled.sort_unstable();

                assert_eq!(filled, expected, "{:?}", kind);
                assert!(filled
                    .iter()
                    .all(|&(cx, cy)| board.get(cx, cy) == Some(Some(def.color))));
                shape = shape.rotated();
            }
        }
    }

    #[test]
    fn test_top_row_detection() {
        let mut board = Board::new();
        assert!(!board.is_top_row_occupied());
        board.set(9, 1, Some(Color::Red));
        assert!(!board.is_top_row_occupied());
        board.set(9, 0, Some(Color::Red));
        assert!(board.is_top_row_occupied());

        board.clear();
        assert!(!board.is_top_row_occupied());
        assert_eq!(board.to_cells(), vec![vec![None; WIDTH]; HEIGHT]);
    }

    #[test]
    fn test_write_grid_matches_rows() {
        let mut board = Board::new();
        board.set(1, 2, Some(Color::Green));
        let mut grid = [[None; WIDTH]; HEIGHT];
        board.write_grid(&mut grid);
        assert_eq!(grid[2][1], Some(Color::Green));
        assert_eq!(grid[1][2], None);
    }
}
