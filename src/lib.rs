//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited negamax search with alpha-beta pruning
//! and a positional/pattern heuristic to pick a strong move in any position.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::board::{Board, Player};
//! use connect4_engine::driver::Engine;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has just opened in the centre, player two to move
//! let board = Board::from_moves("4")?;
//! let column = Engine::new().choose_column(board, Player::Two);
//!
//! assert!(column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;

pub mod driver;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that a window of four cells fits in both board directions
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
