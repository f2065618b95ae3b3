//! Participants: human players and the AI.

use super::strategy::{Difficulty, MoveStrategy, Strategy};
use super::{Board, Coord, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display name used for the AI in results.
pub const AI_NAME: &str = "AI";

/// A human participant.
///
/// The name is taken as given; validation belongs to whoever collects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Player {
    /// Mark this player places.
    symbol: Symbol,
    /// Display name.
    #[new(into)]
    name: String,
}

/// AI participant: its own mark, the opponent's mark and a strategy.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    symbol: Symbol,
    opponent: Symbol,
    strategy: Strategy,
}

impl AiPlayer {
    /// Creates an AI playing `symbol` against `opponent` at `difficulty`.
    #[instrument]
    pub fn new(symbol: Symbol, opponent: Symbol, difficulty: Difficulty) -> Self {
        Self::with_strategy(symbol, opponent, Strategy::for_difficulty(difficulty))
    }

    /// Creates an AI from a difficulty label; unknown labels play Easy.
    pub fn from_label(symbol: Symbol, opponent: Symbol, label: &str) -> Self {
        Self::new(symbol, opponent, Difficulty::from_label(label))
    }

    /// Creates an AI bound to an explicit strategy.
    pub fn with_strategy(symbol: Symbol, opponent: Symbol, strategy: Strategy) -> Self {
        debug!(%symbol, %opponent, difficulty = %strategy.difficulty(), "Creating AI player");
        Self {
            symbol,
            opponent,
            strategy,
        }
    }

    /// The AI's mark.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Symbol {
        self.opponent
    }

    /// The bound difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    /// Asks the strategy for a move on `board`.
    pub fn best_move(&mut self, board: &Board) -> Option<Coord> {
        self.strategy.select_move(board, self.symbol, self.opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_board() -> Board {
        let mut board = Board::new();
        board.attempt_move(0, 0, Symbol::X);
        board.attempt_move(1, 1, Symbol::O);
        board.attempt_move(2, 2, Symbol::X);
        board
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new(Symbol::X, "Alice");
        assert_eq!(*player.symbol(), Symbol::X);
        assert_eq!(player.name(), "Alice");
    }

    #[test]
    fn test_ai_symbols() {
        let ai = AiPlayer::new(Symbol::X, Symbol::O, Difficulty::Easy);
        assert_eq!(ai.symbol(), Symbol::X);
        assert_eq!(ai.opponent(), Symbol::O);
    }

    #[test]
    fn test_easy_ai_picks_empty_cell() {
        let board = partial_board();
        let mut ai = AiPlayer::from_label(Symbol::X, Symbol::O, "Easy");
        let coord = ai.best_move(&board).unwrap();
        assert!(board.is_empty(coord));
    }

    #[test]
    fn test_hard_ai_picks_empty_cell() {
        let board = partial_board();
        let mut ai = AiPlayer::from_label(Symbol::O, Symbol::X, "Hard");
        let coord = ai.best_move(&board).unwrap();
        assert!(board.is_empty(coord));
    }

    #[test]
    fn test_empty_board_move() {
        let board = Board::new();
        let mut ai = AiPlayer::from_label(Symbol::X, Symbol::O, "Easy");
        assert!(board.is_empty(ai.best_move(&board).unwrap()));
    }

    #[test]
    fn test_unknown_label_plays_easy() {
        let ai = AiPlayer::from_label(Symbol::O, Symbol::X, "Impossible");
        assert_eq!(ai.difficulty(), Difficulty::Easy);
    }
}
