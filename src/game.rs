use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::board::{Board, Cell, Player};
use connect4_engine::driver::Host;
use connect4_engine::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// The live game owned by the binary: board, turn bookkeeping and win/draw
/// detection for every move, human or engine
pub struct Game {
    board: Board,
    to_move: Player,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            state: GameState::Playing,
        }
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.board.drop_piece(column, self.to_move);

        self.state = if self.board.has_four_in_line(self.to_move) {
            match self.to_move {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };

        self.to_move = self.to_move.other();
        Ok(self.state)
    }

    /// The digit-grid text encoding of the board, top row first
    pub fn state_string(&self) -> String {
        self.board.to_string()
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Host for Game {
    fn owner_at(&self, column: usize, row: usize) -> Cell {
        self.board.get(row, column)
    }

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn place(&mut self, column: usize) {
        // the engine only picks playable columns
        self.play_checked(column + 1)
            .expect("engine chose an unplayable column");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn play_all(game: &mut Game, moves: &str) -> Result<GameState> {
        let mut state = game.state;
        for column_char in moves.chars() {
            let column = column_char.to_digit(10).unwrap() as usize;
            state = game.play_checked(column)?;
        }
        Ok(state)
    }

    #[test]
    fn turns_alternate() -> Result<()> {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::One);
        game.play_checked(4)?;
        assert_eq!(game.to_move(), Player::Two);
        game.play_checked(4)?;
        assert_eq!(game.to_move(), Player::One);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_and_full_columns() -> Result<()> {
        let mut game = Game::new();
        assert!(game.play_checked(0).is_err());
        assert!(game.play_checked(WIDTH + 1).is_err());

        // six alternating pieces fill column 1 without a win
        let state = play_all(&mut game, "111111")?;
        assert!(matches!(state, GameState::Playing));
        assert!(game.play_checked(1).is_err());
        // the failed move must not steal the turn
        assert_eq!(game.to_move(), Player::One);
        Ok(())
    }

    #[test]
    fn win_ends_the_game() -> Result<()> {
        let mut game = Game::new();
        // player one stacks column 1 while player two trails in column 2
        let state = play_all(&mut game, "1212121")?;
        assert!(matches!(state, GameState::PlayerOneWin));
        assert!(matches!(game.state, GameState::PlayerOneWin));
        Ok(())
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() -> Result<()> {
        let mut game = Game::new();
        // fills every column without ever lining up four: columns 1, 2 and
        // 5..=7 stack 1,2,1,2,1,2 from the bottom and columns 3, 4 the
        // inverse, so every window of four stays mixed
        let state = play_all(
            &mut game,
            "111111233223322332544554455445666666777777",
        )?;
        assert!(matches!(state, GameState::Draw));
        Ok(())
    }

    #[test]
    fn state_string_tracks_the_grid() -> Result<()> {
        let mut game = Game::new();
        play_all(&mut game, "44")?;
        assert_eq!(
            game.state_string(),
            "0000000\n0000000\n0000000\n0000000\n0002000\n0001000\n"
        );
        Ok(())
    }
}
