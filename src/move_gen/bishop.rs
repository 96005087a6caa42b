//! Bishop move generation: the four diagonal rays.

use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::move_gen::sliding::generate_sliding_moves;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_bishop_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
