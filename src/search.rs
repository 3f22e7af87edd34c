//! Depth-limited negamax search with alpha-beta pruning

use crate::board::{Board, Player};
use crate::eval::{evaluate, WIN_SCORE};
use crate::WIDTH;

/// The fixed search horizon in plies
pub const MAX_DEPTH: u32 = 7;

/// A bound strictly outside every reachable score
pub const INF_SCORE: i32 = 2_000_000;

/// Candidate columns from the centre outwards; central columns prune more
/// branches sooner under alpha-beta
pub const MOVE_ORDER: [usize; WIDTH] = [3, 2, 4, 1, 5, 0, 6];

/// One search over one snapshot
///
/// The snapshot is owned by the search and mutated in place via drop/undrop
/// as the recursion walks the tree; every frame restores the board before
/// returning, so the caller's view never changes.
pub struct Search {
    board: Board,
    engine: Player,

    /// The number of frames entered by this search (for diagnostics only)
    pub node_count: usize,
}

impl Search {
    pub fn new(board: Board, engine: Player) -> Self {
        Self {
            board,
            engine,
            node_count: 0,
        }
    }

    // drop, run the closure, undrop. Keeping the undo on this one exit path
    // is what makes the stack discipline structural instead of a convention
    // every call site has to re-earn.
    fn with_drop<T>(&mut self, column: usize, player: Player, f: impl FnOnce(&mut Self) -> T) -> T {
        self.board.drop_piece(column, player);
        let result = f(self);
        self.board.undrop(column);
        result
    }

    fn terminal(&self) -> bool {
        self.board.is_full()
            || self.board.has_four_in_line(Player::One)
            || self.board.has_four_in_line(Player::Two)
    }

    /// Performs game tree search
    ///
    /// Each frame scores the position from `to_move`'s perspective and the
    /// parent negates the child's result, so `sign` tracks whether the
    /// frame's view agrees with the engine's.
    fn negamax(&mut self, depth: u32, mut alpha: i32, beta: i32, sign: i32, to_move: Player) -> i32 {
        self.node_count += 1;

        if depth == 0 || self.terminal() {
            return sign * evaluate(&self.board, self.engine);
        }

        let mut best = -INF_SCORE;

        for &column in MOVE_ORDER.iter() {
            if !self.board.playable(column) {
                continue;
            }

            let score = self.with_drop(column, to_move, |search| {
                if search.board.has_four_in_line(to_move) {
                    // immediate win: score it directly, shifted so that
                    // faster forced wins beat slower ones
                    sign * (WIN_SCORE - 100 * (MAX_DEPTH - depth) as i32)
                } else {
                    // the search window is flipped for the other player
                    -search.negamax(depth - 1, -beta, -alpha, -sign, to_move.other())
                }
            });

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                // prune the remaining siblings
                break;
            }
        }

        best
    }

    /// Runs the root frame of the search with the engine to move, returning
    /// the best column found
    ///
    /// Returns `None` if the position is already terminal (the board is full
    /// or somebody has already won), in which case there is nothing to play.
    pub fn best_column(&mut self) -> Option<usize> {
        self.node_count += 1;

        if self.terminal() {
            return None;
        }

        let mut alpha = -INF_SCORE;
        let beta = INF_SCORE;
        let mut best = -INF_SCORE;
        let mut best_column = None;
        let engine = self.engine;

        for &column in MOVE_ORDER.iter() {
            if !self.board.playable(column) {
                continue;
            }

            let score = self.with_drop(column, engine, |search| {
                if search.board.has_four_in_line(engine) {
                    WIN_SCORE
                } else {
                    -search.negamax(MAX_DEPTH - 1, -beta, -alpha, -1, engine.other())
                }
            });

            if score > best {
                best = score;
                best_column = Some(column);
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        best_column
    }
}
