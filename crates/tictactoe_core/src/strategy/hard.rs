//! Exhaustive minimax search.

use super::MoveStrategy;
use crate::{Board, Coord, Symbol};
use tracing::{debug, instrument, warn};

/// Score of a position the AI has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Perfect play: searches every continuation to the end of the game.
///
/// Cells are tried in row-major order and the first one reaching a new
/// best score is kept, so the choice for a given position is always the
/// same.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardStrategy;

impl MoveStrategy for HardStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, ai: Symbol, human: Symbol) -> Option<Coord> {
        let mut scratch = board.clone();
        let mut best: Option<(Coord, i32)> = None;

        for coord in board.empty_cells() {
            if scratch.place(coord, ai).is_err() {
                continue;
            }
            let score = minimax(&mut scratch, false, ai, human);
            scratch.clear(coord);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((coord, score));
            }
        }

        match best {
            Some((coord, score)) => {
                debug!(%coord, score, "Hard AI selected move");
                Some(coord)
            }
            None => {
                warn!("Hard AI asked to move on a full board");
                None
            }
        }
    }
}

/// Scores `board` from `ai`'s point of view with both sides playing on.
///
/// Terminal positions score [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`];
/// otherwise every empty cell is tried for the side to move (`ai` when
/// `maximizing`) and the best child for that side is returned. The board
/// is restored before returning.
pub fn minimax(board: &mut Board, maximizing: bool, ai: Symbol, human: Symbol) -> i32 {
    match board.check_winner() {
        Some(winner) if winner == ai => return WIN_SCORE,
        Some(winner) if winner == human => return LOSS_SCORE,
        _ => {}
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mover = if maximizing { ai } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for coord in Coord::ALL {
        if board.place(coord, mover).is_err() {
            continue;
        }
        let score = minimax(board, !maximizing, ai, human);
        board.clear(coord);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
