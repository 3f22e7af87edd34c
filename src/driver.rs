//! Orchestrates one full decision against the host game

use crate::board::{Board, Cell, Player};
use crate::search::Search;
use crate::WIDTH;

/// The narrow capability interface onto the host game collaborator.
///
/// The engine only ever reads cell ownership and the side to move, and
/// issues at most one placement per decision; turn bookkeeping after the
/// placement stays with the host.
pub trait Host {
    /// The owner of the cell at (column, row), row 0 at the top
    fn owner_at(&self, column: usize, row: usize) -> Cell;

    /// Which player the engine is deciding for this call
    fn to_move(&self) -> Player;

    /// Place a piece for the player to move in the given column
    fn place(&mut self, column: usize);
}

/// Copies the host's 42 cells into a private snapshot
pub fn snapshot(host: &dyn Host) -> Board {
    Board::from_fn(|row, column| host.owner_at(column, row))
}

/// The decision driver: tactic pre-checks first, full search otherwise
pub struct Engine {
    /// Frames entered by searches run through this engine (diagnostics only)
    pub node_count: usize,
}

impl Engine {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Picks a column for `engine` to play on `board`.
    ///
    /// An immediate winning drop is always taken and an immediate opponent
    /// win is always blocked, both checked in natural column order before
    /// any search runs; only then does the depth-limited negamax decide.
    /// Returns `None` when the position is already terminal.
    pub fn choose_column(&mut self, mut board: Board, engine: Player) -> Option<usize> {
        let opponent = engine.other();

        // never miss a one-move win, whatever the deeper search would say
        for column in 0..WIDTH {
            if board.is_winning_drop(column, engine) {
                return Some(column);
            }
        }

        // block a one-move win for the opponent
        for column in 0..WIDTH {
            if board.is_winning_drop(column, opponent) {
                return Some(column);
            }
        }

        let mut search = Search::new(board, engine);
        let best = search.best_column();
        self.node_count += search.node_count;
        best
    }

    /// Runs one full decision: snapshot, choose, place.
    ///
    /// Issues exactly one placement on the host when a column is found and
    /// none at all when the position is terminal. Returns the column played.
    pub fn take_turn(&mut self, host: &mut dyn Host) -> Option<usize> {
        let board = snapshot(host);
        let player = host.to_move();

        let column = self.choose_column(board, player);
        if let Some(column) = column {
            host.place(column);
        }
        column
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
