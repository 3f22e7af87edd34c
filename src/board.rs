use anyhow::{anyhow, Result};

use std::fmt;

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// One of the two playing roles. Which role the engine takes is decided
/// per decision from whoever is to move, never baked in.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A private snapshot of the board occupancy, row 0 at the top.
///
/// The snapshot is a plain value: the engine copies the live board into one
/// of these at the start of a decision and only ever mutates the copy. All
/// mutation inside the search is drop/undrop in strict stack discipline, so
/// within any column the empty cells stay contiguous from row 0 down.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board by querying a cell value for every (row, column)
    pub fn from_fn(mut cell_at: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut board = Self::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                board.cells[row][column] = cell_at(row, column);
            }
        }
        board
    }

    /// Builds a board from a sequence of 1-indexed column digits, players
    /// alternating from player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !board.playable(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    board.drop_piece(column, player);
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from the host game's text encoding: 42 digits of
    /// '0'/'1'/'2', top row first, whitespace ignored
    pub fn from_state<S: AsRef<str>>(state: S) -> Result<Self> {
        let mut board = Self::new();
        let mut cells = state.as_ref().chars().filter(|c| !c.is_whitespace());

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let cell = match cells.next() {
                    Some('0') => Cell::Empty,
                    Some('1') => Cell::PlayerOne,
                    Some('2') => Cell::PlayerTwo,
                    Some(other) => {
                        return Err(anyhow!("invalid cell digit '{}' in state string", other))
                    }
                    None => return Err(anyhow!("state string too short, expected 42 digits")),
                };
                board.cells[row][column] = cell;
            }
        }
        if cells.next().is_some() {
            return Err(anyhow!("state string too long, expected 42 digits"));
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// True iff `column` is in range and its top cell is empty
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// The lowest empty row of a column, or `None` if the column is full.
    /// Scans from the bottom row upward, which is what enforces gravity.
    pub fn open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())
    }

    /// Places a piece at the lowest empty row of the column. A full column
    /// is a caller error; the board is left untouched in that case.
    pub fn drop_piece(&mut self, column: usize, player: Player) {
        if let Some(row) = self.open_row(column) {
            self.cells[row][column] = player.cell();
        }
    }

    /// Removes the topmost piece of a column, the exact inverse of the most
    /// recent `drop_piece` there. Only ever called right after a matching
    /// drop within the same search frame.
    pub fn undrop(&mut self, column: usize) {
        for row in 0..HEIGHT {
            if !self.cells[row][column].is_empty() {
                self.cells[row][column] = Cell::Empty;
                return;
            }
        }
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.cells[0][column].is_empty())
    }

    /// Full-board scan for four in a row in any of the four directions
    pub fn has_four_in_line(&self, player: Player) -> bool {
        let p = player.cell();
        let b = &self.cells;

        // horizontal
        for y in 0..HEIGHT {
            for x in 0..=WIDTH - 4 {
                if b[y][x] == p && b[y][x + 1] == p && b[y][x + 2] == p && b[y][x + 3] == p {
                    return true;
                }
            }
        }

        // vertical
        for x in 0..WIDTH {
            for y in 0..=HEIGHT - 4 {
                if b[y][x] == p && b[y + 1][x] == p && b[y + 2][x] == p && b[y + 3][x] == p {
                    return true;
                }
            }
        }

        // diagonal \
        for y in 0..=HEIGHT - 4 {
            for x in 0..=WIDTH - 4 {
                if b[y][x] == p && b[y + 1][x + 1] == p && b[y + 2][x + 2] == p && b[y + 3][x + 3] == p
                {
                    return true;
                }
            }
        }

        // diagonal /
        for y in 0..=HEIGHT - 4 {
            for x in 3..WIDTH {
                if b[y][x] == p && b[y + 1][x - 1] == p && b[y + 2][x - 2] == p && b[y + 3][x - 3] == p
                {
                    return true;
                }
            }
        }

        false
    }

    /// Would dropping `player` here win on the spot? Trial drop, check,
    /// undrop; false for an unplayable column.
    pub fn is_winning_drop(&mut self, column: usize, player: Player) -> bool {
        if !self.playable(column) {
            return false;
        }
        self.drop_piece(column, player);
        let won = self.has_four_in_line(player);
        self.undrop(column);
        won
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let digit = match self.cells[row][column] {
                    Cell::Empty => '0',
                    Cell::PlayerOne => '1',
                    Cell::PlayerTwo => '2',
                };
                write!(f, "{}", digit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
