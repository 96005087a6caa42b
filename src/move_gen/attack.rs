//! Attack detection and check queries.
//!
//! A square counts as attacked when any opposing piece's geometric moves
//! include it. Reusing [`moves_for`](super::moves_for) cannot recurse:
//! castling and en passant are never generated there. A pawn's diagonal is
//! a capture move, so only an occupied square registers as pawn-attacked.

use crate::board::Board;
use crate::move_gen::moves_for;
use crate::types::{PieceColor, Square};

/// Whether `square` is attacked by the opponent of `defending_color`.
pub fn is_square_attacked(board: &Board, square: Square, defending_color: PieceColor) -> bool {
    let attacker = defending_color.opposite();
    for (from, _) in board.pieces_of(attacker) {
        if moves_for(board, from).contains(&square) {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked. A color with no king on the board
/// is never in check.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    match board.find_king(color) {
        Some(king_square) => is_square_attacked(board, king_square, color),
        None => false,
    }
}
