//! Geometric move generation.
//!
//! [`moves_for`] maps the piece on a square to the set of squares its
//! movement pattern reaches, ignoring king safety. One rule per piece kind,
//! dispatched over the closed [`PieceKind`] set; bishops, rooks, and queens
//! share the ray walker in `sliding`.
//!
//! Castling and en passant are never generated here. Both depend on
//! cross-board state (rook position, intervening emptiness, the previous
//! move) that no single piece's local rule can see; they live in `castling`
//! and `en_passant` and are unioned in by the legality filter. The attack
//! test in `attack` reuses these rules, which is what keeps it free of
//! recursion.

mod attack;
mod bishop;
mod castling;
mod en_passant;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};
pub use castling::{apply_castling, castling_moves, is_castling_move};
pub use en_passant::{apply_en_passant, en_passant_moves, is_en_passant_move};

use crate::board::Board;
use crate::types::{PieceColor, PieceKind, Square};

/// Geometric destinations for the piece on `from`.
///
/// Pure: never mutates the board, never includes off-board squares or
/// squares held by a same-color piece. Empty when `from` is empty.
pub fn moves_for(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.color, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, piece.color, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, piece.color, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, piece.color, &mut moves),
        PieceKind::King => king::generate_king_moves(board, from, piece.color, &mut moves),
    }
    moves
}

/// On the board and not occupied by `color`'s own piece.
pub(crate) fn can_move_to(board: &Board, to: Square, color: PieceColor) -> bool {
    if !to.is_on_board() {
        return false;
    }
    match board.get(to) {
        Some(piece) => piece.color != color,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new();
        assert!(moves_for(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn test_opening_pawn_has_two_moves() {
        let board = Board::new();
        let moves = moves_for(&board, Square::new(6, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Square::new(5, 4)));
        assert!(moves.contains(&Square::new(4, 4)));
    }

    #[test]
    fn test_opening_knight_has_two_moves() {
        let board = Board::new();
        let moves = moves_for(&board, Square::new(7, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Square::new(5, 0)));
        assert!(moves.contains(&Square::new(5, 2)));
    }

    #[test]
    fn test_boxed_in_sliders_have_no_moves() {
        let board = Board::new();
        assert!(moves_for(&board, Square::new(7, 0)).is_empty());
        assert!(moves_for(&board, Square::new(7, 2)).is_empty());
        assert!(moves_for(&board, Square::new(7, 3)).is_empty());
    }

    #[test]
    fn test_rook_rays_stop_at_first_piece() {
        let mut board = Board::empty();
        board.set(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::Rook, PieceColor::White)),
        );
        board.set(
            Square::new(4, 6),
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black)),
        );
        board.set(
            Square::new(2, 4),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White)),
        );

        let moves = moves_for(&board, Square::new(4, 4));

        // Capture square included, the ray stops there.
        assert!(moves.contains(&Square::new(4, 6)));
        assert!(!moves.contains(&Square::new(4, 7)));
        // Own piece blocks without being included.
        assert!(moves.contains(&Square::new(3, 4)));
        assert!(!moves.contains(&Square::new(2, 4)));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        let center = Square::new(4, 4);
        board.set(
            center,
            Some(Piece::new(PieceKind::Queen, PieceColor::White)),
        );

        let queen_moves = moves_for(&board, center);
        assert_eq!(queen_moves.len(), 27);

        board.set(center, Some(Piece::new(PieceKind::Rook, PieceColor::White)));
        let rook_moves = moves_for(&board, center);
        board.set(
            center,
            Some(Piece::new(PieceKind::Bishop, PieceColor::White)),
        );
        let bishop_moves = moves_for(&board, center);

        assert_eq!(queen_moves.len(), rook_moves.len() + bishop_moves.len());
        for square in rook_moves.iter().chain(bishop_moves.iter()) {
            assert!(queen_moves.contains(square));
        }
    }

    #[test]
    fn test_king_in_corner_has_three_moves() {
        let mut board = Board::empty();
        board.set(
            Square::new(0, 0),
            Some(Piece::new(PieceKind::King, PieceColor::Black)),
        );
        assert_eq!(moves_for(&board, Square::new(0, 0)).len(), 3);
    }

    #[test]
    fn test_pawn_diagonal_is_capture_only() {
        let mut board = Board::empty();
        board.set(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White)),
        );
        board.set(
            Square::new(3, 5),
            Some(Piece::new(PieceKind::Knight, PieceColor::Black)),
        );
        board.set(
            Square::new(3, 3),
            Some(Piece::new(PieceKind::Knight, PieceColor::White)),
        );

        let moves = moves_for(&board, Square::new(4, 4));
        assert!(moves.contains(&Square::new(3, 5)), "enemy diagonal taken");
        assert!(!moves.contains(&Square::new(3, 3)), "own diagonal refused");
        assert!(moves.contains(&Square::new(3, 4)), "forward push open");
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let mut board = Board::new();
        board.set(
            Square::new(5, 4),
            Some(Piece::new(PieceKind::Knight, PieceColor::Black)),
        );

        let moves = moves_for(&board, Square::new(6, 4));
        assert!(!moves.contains(&Square::new(4, 4)));
        assert!(!moves.contains(&Square::new(5, 4)));
    }
}
