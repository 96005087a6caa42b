//! King move generation: the eight adjacent squares.
//!
//! Castling is not generated here. It needs the rook, the squares between,
//! and attack checks along the king's path, all of which live in `castling`.

use crate::board::Board;
use crate::constants::KING_DIRS;
use crate::move_gen::can_move_to;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_king_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in &KING_DIRS {
        let to = from.offset(dr, dc);
        if can_move_to(board, to, color) {
            moves.push(to);
        }
    }
}
