//! Board geometry and movement direction tables.
//!
//! Directions are (row, col) deltas. Row 0 is Black's home rank, so White
//! pawns advance with a negative row delta. The castling columns describe
//! the standard arrangement: king on column 4, rooks on columns 0 and 7.

pub const BOARD_SIZE: i8 = 8;

/// Orthogonal ray directions for rooks.
pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions for bishops.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight adjacent-square offsets for kings.
pub const KING_DIRS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1),
    (-1, -2), (-1, 2),
    (1, -2), (1, 2),
    (2, -1), (2, 1),
];

pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_COL: i8 = 0;

/// Columns the rook lands on after castling, next to the king.
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;
