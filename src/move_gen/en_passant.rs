//! En passant: detection, the single candidate square, and the handler.
//!
//! The capture is only open on the move immediately after an enemy pawn
//! double-stepped to the adjacent file, which is why eligibility reads the
//! last-move record instead of the board alone. The captured pawn leaves
//! from its own square, not the destination.

use crate::board::Board;
use crate::types::{MoveRecord, PieceKind, Square};

/// A pawn stepping one column diagonally into an empty square, immediately
/// after an enemy pawn double-stepped to land beside it.
pub fn is_en_passant_move(
    board: &Board,
    last_move: Option<&MoveRecord>,
    from: Square,
    to: Square,
) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.kind != PieceKind::Pawn {
        return false;
    }
    if (to.col - from.col).abs() != 1 || to.row - from.row != piece.color.forward() {
        return false;
    }
    if board.get(to).is_some() {
        return false;
    }

    let Some(last) = last_move else {
        return false;
    };
    last.is_double_pawn_step()
        && last.piece.color != piece.color
        && last.to.row == from.row
        && last.to.col == to.col
}

/// The en passant destination for the pawn on `pawn_square`, if any.
/// At most one square: the passed pawn's file, one rank forward.
pub fn en_passant_moves(
    board: &Board,
    last_move: Option<&MoveRecord>,
    pawn_square: Square,
) -> Vec<Square> {
    let Some(pawn) = board.get(pawn_square) else {
        return Vec::new();
    };
    if pawn.kind != PieceKind::Pawn {
        return Vec::new();
    }
    let Some(last) = last_move else {
        return Vec::new();
    };
    if !last.is_double_pawn_step() || last.piece.color == pawn.color {
        return Vec::new();
    }
    // The double-stepped pawn must stand right beside the capturer.
    if last.to.row != pawn_square.row || (last.to.col - pawn_square.col).abs() != 1 {
        return Vec::new();
    }

    vec![Square::new(pawn_square.row + pawn.color.forward(), last.to.col)]
}

/// Remove the passed pawn from its own square, then move the capturer.
pub fn apply_en_passant(board: &mut Board, from: Square, to: Square) {
    board.set(Square::new(from.row, to.col), None);
    board.move_piece(from, to);
}
