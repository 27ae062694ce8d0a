//! Collision checks for proposed placements.
//!
//! A placement collides when any filled shape cell lands outside the side
//! walls, below the floor, or on a filled board cell. Rows above the top are
//! never produced by the engine since anchors start at row 0 and only move down.

use crate::board::Board;
use crate::pieces::{ActivePiece, Shape};

/// Whether `shape` anchored at (x, y) overlaps the board or leaves its bounds.
pub fn collides(board: &Board, x: i8, y: i8, shape: &Shape) -> bool {
    shape
        .cells()
        .any(|(dx, dy)| board.is_blocked(x.saturating_add(dx), y.saturating_add(dy)))
}

/// Whether the piece sits entirely on empty, in-bounds cells.
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    !collides(board, piece.x, piece.y, &piece.shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::definition;
    use crate::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_walls_and_floor_always_collide() {
        let mut full = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                full.set(x, y, Some(Color::Red));
            }
        }

        for board in [Board::new(), full] {
            for kind in PieceKind::ALL {
                let shape = definition(kind).shape;
                let w = shape.width() as i8;
                let h = shape.height() as i8;
                assert!(collides(&board, -1, 0, &shape));
                assert!(collides(&board, BOARD_WIDTH as i8 - w + 1, 0, &shape));
                assert!(collides(&board, 0, BOARD_HEIGHT as i8 - h + 1, &shape));
            }
        }
    }

    #[test]
    fn test_empty_board_accepts_inside_placements() {
        let board = Board::new();
        let shape = definition(PieceKind::I).shape;
        assert!(!collides(&board, 0, 0, &shape));
        assert!(!collides(&board, 6, 19, &shape));
        assert!(collides(&board, 7, 19, &shape));
    }

    #[test]
    fn test_only_filled_shape_cells_count() {
        let mut board = Board::new();
        // T's top corners are empty, so a block there does not collide.
        board.set(3, 10, Some(Color::Blue));
        let t = definition(PieceKind::T).shape;
        assert!(!collides(&board, 3, 10, &t));

        board.set(4, 10, Some(Color::Blue));
        assert!(collides(&board, 3, 10, &t));
    }

    #[test]
    fn test_fits_uses_piece_anchor() {
        let board = Board::new();
        let piece = ActivePiece::spawn(PieceKind::O);
        assert!(fits(&board, &piece));
        assert!(!fits(&board, &piece.moved(0, 19)));
    }
}
