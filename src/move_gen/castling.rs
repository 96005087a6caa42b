//! Castling: detection, candidate generation, and the two-piece handler.
//!
//! A castling request shows up as a king move of exactly two columns on its
//! own row. Candidates are offered only while the king is unmoved and not
//! in check, the squares over to the rook are empty, an unmoved same-color
//! rook stands on its corner, and no square the king starts on, crosses, or
//! lands on is attacked. All attack checks run against the current board,
//! start square inclusive; the king's partial advance is not simulated.

use crate::board::Board;
use crate::constants::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
};
use crate::move_gen::attack::{is_in_check, is_square_attacked};
use crate::types::{PieceColor, PieceKind, Square};

/// A king displacing exactly two columns along its own row.
pub fn is_castling_move(board: &Board, from: Square, to: Square) -> bool {
    match board.get(from) {
        Some(piece) if piece.kind == PieceKind::King => {
            from.row == to.row && (to.col - from.col).abs() == 2
        }
        _ => false,
    }
}

/// Castling destinations currently open to the king on `king_square`;
/// empty when the occupant is not an eligible king.
pub fn castling_moves(board: &Board, king_square: Square) -> Vec<Square> {
    let Some(king) = board.get(king_square) else {
        return Vec::new();
    };
    if king.kind != PieceKind::King || king.has_moved || is_in_check(board, king.color) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    if can_castle_kingside(board, king_square, king.color) {
        moves.push(king_square.offset(0, 2));
    }
    if can_castle_queenside(board, king_square, king.color) {
        moves.push(king_square.offset(0, -2));
    }
    moves
}

fn can_castle_kingside(board: &Board, king_square: Square, color: PieceColor) -> bool {
    for dc in 1..=2 {
        if board.get(king_square.offset(0, dc)).is_some() {
            return false;
        }
    }

    let rook_square = Square::new(king_square.row, KINGSIDE_ROOK_COL);
    if !rook_ready(board, rook_square, color) {
        return false;
    }

    // King path: start, crossed square, destination.
    for dc in 0..=2 {
        if is_square_attacked(board, king_square.offset(0, dc), color) {
            return false;
        }
    }
    true
}

fn can_castle_queenside(board: &Board, king_square: Square, color: PieceColor) -> bool {
    // Three squares to the rook on the queenside.
    for dc in 1..=3 {
        if board.get(king_square.offset(0, -dc)).is_some() {
            return false;
        }
    }

    let rook_square = Square::new(king_square.row, QUEENSIDE_ROOK_COL);
    if !rook_ready(board, rook_square, color) {
        return false;
    }

    for dc in 0..=2 {
        if is_square_attacked(board, king_square.offset(0, -dc), color) {
            return false;
        }
    }
    true
}

/// An unmoved rook of the castling color on its corner square.
fn rook_ready(board: &Board, rook_square: Square, color: PieceColor) -> bool {
    matches!(
        board.get(rook_square),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    )
}

/// Relocate king and rook together. The rook comes over from its corner to
/// the column next to the king's landing square; both pieces are marked as
/// moved by the relocation.
pub fn apply_castling(board: &mut Board, from: Square, to: Square) {
    let kingside = to.col > from.col;
    let rook_from_col = if kingside {
        KINGSIDE_ROOK_COL
    } else {
        QUEENSIDE_ROOK_COL
    };
    let rook_to_col = if kingside {
        KINGSIDE_ROOK_TARGET_COL
    } else {
        QUEENSIDE_ROOK_TARGET_COL
    };

    board.move_piece(from, to);
    board.move_piece(
        Square::new(from.row, rook_from_col),
        Square::new(from.row, rook_to_col),
    );
}
