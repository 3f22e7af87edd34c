//! Positional and pattern scoring of non-terminal positions

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH};

/// Scores at or beyond this magnitude denote a forced win or loss
pub const WIN_SCORE: i32 = 1_000_000;

// classic centre-preference weights, symmetric in both axes
const POSITION_WEIGHTS: [[i32; WIDTH]; HEIGHT] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 7, 11, 13, 11, 7, 5],
    [5, 7, 11, 13, 11, 7, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

/// Reward/penalty for one 4-cell window, classified by how many cells each
/// side holds. Mixed windows are dead and score nothing. The opponent
/// penalties are deliberately a little heavier than the matching rewards,
/// so blocking edges out building when the rest of the score ties.
fn window_score(own: u32, opp: u32, empty: u32) -> i32 {
    if own == 4 {
        return 100_000;
    }
    if own == 3 && empty == 1 {
        return 6_000;
    }
    if own == 2 && empty == 2 {
        return 500;
    }

    if opp == 4 {
        return -100_000;
    }
    if opp == 3 && empty == 1 {
        return -7_000;
    }
    if opp == 2 && empty == 2 {
        return -600;
    }
    0
}

fn count_window<I>(board: &Board, engine: Player, cells: I) -> i32
where
    I: Iterator<Item = (usize, usize)>,
{
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for (row, column) in cells {
        match board.get(row, column).player() {
            Some(p) if p == engine => own += 1,
            Some(_) => opp += 1,
            None => empty += 1,
        }
    }
    window_score(own, opp, empty)
}

fn score_windows(board: &Board, engine: Player) -> i32 {
    let mut score = 0;

    // horizontal
    for y in 0..HEIGHT {
        for x in 0..=WIDTH - 4 {
            score += count_window(board, engine, (0..4).map(|d| (y, x + d)));
        }
    }

    // vertical
    for x in 0..WIDTH {
        for y in 0..=HEIGHT - 4 {
            score += count_window(board, engine, (0..4).map(|d| (y + d, x)));
        }
    }

    // diagonal \
    for y in 0..=HEIGHT - 4 {
        for x in 0..=WIDTH - 4 {
            score += count_window(board, engine, (0..4).map(|d| (y + d, x + d)));
        }
    }

    // diagonal /
    for y in 0..=HEIGHT - 4 {
        for x in 3..WIDTH {
            score += count_window(board, engine, (0..4).map(|d| (y + d, x - d)));
        }
    }

    score
}

/// Scores a position from the engine player's point of view.
///
/// A completed line returns a flat `±WIN_SCORE` as a fallback; the search's
/// own terminal test normally catches those positions first. Otherwise the
/// score is the signed positional-weight sum plus the window score, which
/// makes the whole function antisymmetric in the two players.
pub fn evaluate(board: &Board, engine: Player) -> i32 {
    let opponent = engine.other();

    if board.has_four_in_line(engine) {
        return WIN_SCORE;
    }
    if board.has_four_in_line(opponent) {
        return -WIN_SCORE;
    }

    let mut score = 0;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            match board.get(y, x).player() {
                Some(p) if p == engine => score += POSITION_WEIGHTS[y][x],
                Some(_) => score -= POSITION_WEIGHTS[y][x],
                None => {}
            }
        }
    }

    score + score_windows(board, engine)
}
