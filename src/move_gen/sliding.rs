//! Shared ray walker for the sliding pieces.

use crate::board::Board;
use crate::types::{PieceColor, Square};

/// Extend each direction square by square until the board edge, an own
/// piece, or an enemy piece. The enemy square is included and the ray
/// stops there.
pub(crate) fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from.offset(dr, dc);
        while current.is_on_board() {
            match board.get(current) {
                None => moves.push(current),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(current);
                    }
                    break;
                }
            }
            current = current.offset(dr, dc);
        }
    }
}
