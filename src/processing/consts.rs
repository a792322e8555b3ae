pub type MyVal = i16;

pub const RANK_CNT: usize = 8;
pub const FILE_CNT: usize = 8;

//SEARCH CONSTANTS
pub const MAX_DEPTH: u8 = 4;

/// Base mate score, divided by the depth the mate was found at so
/// shallower mates win out over deeper ones.
pub const MATE: MyVal = 1000;

pub const INFINITE: MyVal = 25_000;
pub const NEG_INFINITE: MyVal = -25_000;

//PIECE EVALUATION CONSTANTS
pub const PAWN_VALUE: MyVal = 1;
pub const KNIGHT_VALUE: MyVal = 3;
pub const BISHOP_VALUE: MyVal = 3;
pub const ROOK_VALUE: MyVal = 5;
pub const QUEEN_VALUE: MyVal = 9;
/// Sentinel, effectively infinite. A successor reporting this capture
/// value has just taken a king.
pub const KING_VALUE: MyVal = 10_000;

/// Knight offsets as (col, row) deltas
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (-2, -1),
    (2, 1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
];

/// Slider directions as (col, row) deltas
pub const STRAIGHT_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
