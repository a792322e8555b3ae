use super::board::{Board, Piece, PieceType, Position, ReturnState, Side};
use super::consts::{DIAGONAL_DIRS, KNIGHT_OFFSETS, MyVal, STRAIGHT_DIRS};

/// One legal move, already applied. Carries the board it leads to plus
/// the metrics the search cares about: how many squares the piece
/// traversed and the value of whatever it captured (0 for a quiet move).
#[derive(Debug, Clone)]
pub struct Successor {
    pub board: Board,
    pub distance: MyVal,
    pub captured: MyVal,
}

impl Piece {
    pub fn can_capture_position(&self, position: &Position, board: &Board) -> bool {
        self.can_capture_grid(position.col, position.row, board)
    }

    pub fn can_capture_grid(&self, col: i32, row: i32, board: &Board) -> bool {
        match board.get_piece(row, col) {
            Some(piece) => self.can_capture(&piece),
            None => false,
        }
    }

    /// Every board reachable by one legal move of this piece from
    /// `position`. Offsets that leave the board are skipped, friendly
    /// squares block, enemy squares capture.
    pub fn get_valid_moves(&self, board: &Board, position: Position) -> Vec<Successor> {
        let mut moves: Vec<Successor> = Vec::new();

        match self.kind {
            PieceType::Pawn => {
                let forward = match self.color {
                    Side::White => -1,
                    Side::Black => 1,
                };

                //One step ahead, never a capture
                let ahead = position.move_to(0, forward);
                if board.square_empty_grid(ahead.col, ahead.row) {
                    moves.push(self.successor(board, position, ahead, 1));
                }
                //Diagonal steps only when they take something
                let right = position.move_to(1, forward);
                if self.can_capture_position(&right, board) {
                    moves.push(self.successor(board, position, right, 1));
                }
                let left = position.move_to(-1, forward);
                if self.can_capture_position(&left, board) {
                    moves.push(self.successor(board, position, left, 1));
                }
            }
            PieceType::Knight => {
                for (col_delta, row_delta) in KNIGHT_OFFSETS {
                    let new_pos = position.move_to(col_delta, row_delta);
                    if board.validate_position(&new_pos, self.color) != ReturnState::False {
                        moves.push(self.successor(board, position, new_pos, 1));
                    }
                }
            }
            PieceType::Rook => {
                self.get_sliding_moves(board, position, &STRAIGHT_DIRS, &mut moves);
            }
            PieceType::Bishop => {
                self.get_sliding_moves(board, position, &DIAGONAL_DIRS, &mut moves);
            }
            PieceType::Queen => {
                self.get_sliding_moves(board, position, &STRAIGHT_DIRS, &mut moves);
                self.get_sliding_moves(board, position, &DIAGONAL_DIRS, &mut moves);
            }
            PieceType::King => {
                for col in -1..=1 {
                    for row in -1..=1 {
                        if col == 0 && row == 0 {
                            continue;
                        }
                        let new_pos = position.move_to(col, row);
                        if board.validate_position(&new_pos, self.color) != ReturnState::False {
                            moves.push(self.successor(board, position, new_pos, 1));
                        }
                    }
                }
            }
        }
        moves
    }

    fn get_sliding_moves(
        &self,
        board: &Board,
        start_position: Position,
        directions: &[(i32, i32)],
        moves: &mut Vec<Successor>,
    ) {
        for &(col_delta, row_delta) in directions {
            self.get_valid_moves_in_direction(
                board,
                start_position,
                |col: i32, row: i32| -> (i32, i32) { (col + col_delta, row + row_delta) },
                moves,
            );
        }
    }

    /// Walks one ray, emitting a successor per empty landing in ray order.
    /// The first enemy square is emitted as the last successor of the ray.
    fn get_valid_moves_in_direction<F: Fn(i32, i32) -> (i32, i32)>(
        &self,
        board: &Board,
        start_position: Position,
        f: F,
        moves: &mut Vec<Successor>,
    ) {
        let mut curr_col = start_position.col;
        let mut curr_row = start_position.row;
        let mut distance: MyVal = 0;

        loop {
            (curr_col, curr_row) = f(curr_col, curr_row);
            distance += 1;
            let landing = Position::from_grid(curr_col, curr_row);
            match board.validate_grid_position(curr_col, curr_row, self.color) {
                ReturnState::True => {
                    moves.push(self.successor(board, start_position, landing, distance));
                }
                ReturnState::TrueExit => {
                    moves.push(self.successor(board, start_position, landing, distance));
                    break;
                }
                ReturnState::False => break,
            }
        }
    }

    fn successor(&self, board: &Board, from: Position, to: Position, distance: MyVal) -> Successor {
        let captured = board
            .get_piece(to.row, to.col)
            .map_or(0, |piece| piece.kind.value());
        Successor {
            board: board.apply_move(from, to),
            distance,
            captured,
        }
    }
}
