//! Rook move generation: the four orthogonal rays.

use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::move_gen::sliding::generate_sliding_moves;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_rook_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}
