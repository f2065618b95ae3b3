//! Turn-taking state machine for one game.
//!
//! A [`GameState`] is either waiting for a move from one of the human
//! players or finished with an [`Outcome`]. In player-vs-AI games the AI's
//! reply is folded into the human's `make_move` call, so the AI never owns
//! the turn from the outside.

use super::action::{Move, MoveError};
use super::events::{GameEvent, Outcome};
use super::player::{AI_NAME, AiPlayer, Player};
use super::strategy::Difficulty;
use super::{Board, Coord, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Construction-time configuration of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSettings {
    /// Player two is the computer.
    vs_ai: bool,
    /// AI difficulty; ignored in player-vs-player games.
    difficulty: Difficulty,
    /// Name of player one (X).
    player1_name: String,
    /// Name of player two (O); ignored against the AI.
    player2_name: String,
}

impl GameSettings {
    /// Builds settings from the raw mode flag and difficulty label.
    ///
    /// Labels other than `"Easy"` and `"Hard"` play Easy.
    pub fn new(
        vs_ai: bool,
        difficulty: &str,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self {
            vs_ai,
            difficulty: Difficulty::from_label(difficulty),
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
        }
    }

    /// Two humans.
    pub fn player_vs_player(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            vs_ai: false,
            difficulty: Difficulty::default(),
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
        }
    }

    /// One human against the computer.
    pub fn player_vs_ai(player1_name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            vs_ai: true,
            difficulty,
            player1_name: player1_name.into(),
            player2_name: AI_NAME.to_string(),
        }
    }
}

/// Which human holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Player one (X).
    Player1,
    /// Player two (O), player-vs-player only.
    Player2,
}

/// Second participant: exactly one of a human or the AI.
#[derive(Debug, Clone)]
pub enum Opponent {
    /// Player-vs-player.
    Human(Player),
    /// Player-vs-AI.
    Ai(AiPlayer),
}

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the given player to move.
    AwaitingMove(Turn),
    /// Finished; never left once entered.
    Terminal(Outcome),
}

/// State of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player1: Player,
    opponent: Opponent,
    phase: Phase,
    history: Vec<Move>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates a game from settings; player one moves first.
    ///
    /// The opening status event is queued and returned by the first
    /// [`make_move`](Self::make_move) or [`drain_events`](Self::drain_events).
    #[instrument(skip(settings), fields(vs_ai = settings.vs_ai, difficulty = %settings.difficulty))]
    pub fn new(settings: GameSettings) -> Self {
        info!(
            player1 = %settings.player1_name,
            player2 = %settings.player2_name,
            "Creating new game state"
        );
        let opponent = if settings.vs_ai {
            Opponent::Ai(AiPlayer::new(Symbol::O, Symbol::X, settings.difficulty))
        } else {
            Opponent::Human(Player::new(Symbol::O, settings.player2_name))
        };
        Self::start(Player::new(Symbol::X, settings.player1_name), opponent)
    }

    /// Creates a player-vs-AI game with an already built AI.
    pub fn with_ai(player1_name: impl Into<String>, ai: AiPlayer) -> Self {
        Self::start(Player::new(Symbol::X, player1_name), Opponent::Ai(ai))
    }

    fn start(player1: Player, opponent: Opponent) -> Self {
        let mut game = Self {
            board: Board::new(),
            player1,
            opponent,
            phase: Phase::AwaitingMove(Turn::Player1),
            history: Vec::new(),
            events: Vec::new(),
        };
        game.announce_turn();
        game
    }

    /// Plays the current player's mark at (`row`, `col`).
    ///
    /// Invalid coordinates, occupied cells and moves after the game has
    /// ended are ignored. In player-vs-AI games the AI answers within the
    /// same call. Returns every event queued since the last drain.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Vec<GameEvent> {
        let turn = match self.phase {
            Phase::AwaitingMove(turn) => turn,
            Phase::Terminal(_) => {
                warn!(row, col, "Move attempted after game over");
                return self.drain_events();
            }
        };

        let (symbol, name) = self.participant(turn);
        info!(player = %name, row, col, "Player attempting move");
        if let Err(e) = self.apply(Coord::new(row, col), symbol) {
            warn!(error = %e, "Invalid move attempt");
            return self.drain_events();
        }

        if self.conclude() {
            return self.drain_events();
        }

        let next = match (&self.opponent, turn) {
            (Opponent::Human(_), Turn::Player1) => Turn::Player2,
            (Opponent::Human(_), Turn::Player2) => Turn::Player1,
            (Opponent::Ai(_), _) => {
                self.play_ai_turn();
                if self.conclude() {
                    return self.drain_events();
                }
                Turn::Player1
            }
        };

        self.phase = Phase::AwaitingMove(next);
        self.announce_turn();
        self.drain_events()
    }

    /// Takes every queued event.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Lets the AI choose and place its mark.
    fn play_ai_turn(&mut self) {
        let Opponent::Ai(ai) = &mut self.opponent else {
            return;
        };
        let symbol = ai.symbol();
        let Some(coord) = ai.best_move(&self.board) else {
            error!("AI found no move on a non-terminal board");
            return;
        };
        info!(%coord, "AI plays");
        if let Err(e) = self.apply(coord, symbol) {
            error!(error = %e, "AI chose an illegal move");
        }
    }

    /// Places a mark, records it and queues the board update.
    fn apply(&mut self, coord: Coord, symbol: Symbol) -> Result<(), MoveError> {
        self.board.place(coord, symbol)?;
        self.history.push(Move::new(symbol, coord));
        debug!(%coord, %symbol, moves = self.history.len(), "Move applied");
        self.events.push(GameEvent::BoardUpdated(self.board.snapshot()));
        Ok(())
    }

    /// Enters the terminal phase if the board is won or full.
    ///
    /// Only called while awaiting a move, so game-over is queued at most once.
    fn conclude(&mut self) -> bool {
        let outcome = if let Some(symbol) = self.board.check_winner() {
            Outcome::Winner {
                name: self.name_for(symbol).to_string(),
                symbol,
            }
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            return false;
        };

        info!(result = %outcome, "Game over");
        self.events.push(GameEvent::GameOver(outcome.clone()));
        self.phase = Phase::Terminal(outcome);
        true
    }

    fn announce_turn(&mut self) {
        if let Some(status) = self.status_line() {
            debug!(%status, "Status update");
            self.events.push(GameEvent::StatusChanged(status));
        }
    }

    fn status_line(&self) -> Option<String> {
        let Phase::AwaitingMove(turn) = self.phase else {
            return None;
        };
        let (symbol, name) = self.participant(turn);
        Some(format!("{}'s turn ({})", name, symbol))
    }

    fn participant(&self, turn: Turn) -> (Symbol, &str) {
        match (turn, &self.opponent) {
            (Turn::Player2, Opponent::Human(player2)) => (*player2.symbol(), player2.name().as_str()),
            _ => (*self.player1.symbol(), self.player1.name().as_str()),
        }
    }

    /// Display name for whoever plays `symbol`.
    fn name_for(&self, symbol: Symbol) -> &str {
        if symbol == *self.player1.symbol() {
            return self.player1.name().as_str();
        }
        match &self.opponent {
            Opponent::Ai(_) => AI_NAME,
            Opponent::Human(player2) => player2.name().as_str(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Player one.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// The second participant.
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Returns true for player-vs-AI games.
    pub fn is_vs_ai(&self) -> bool {
        matches!(self.opponent, Opponent::Ai(_))
    }

    /// The player whose move it is, or `None` once finished.
    pub fn current_player(&self) -> Option<&Player> {
        match (&self.phase, &self.opponent) {
            (Phase::Terminal(_), _) => None,
            (Phase::AwaitingMove(Turn::Player2), Opponent::Human(player2)) => Some(player2),
            (Phase::AwaitingMove(_), _) => Some(&self.player1),
        }
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Terminal(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Every placement so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Text for the status line: whose turn, or the result.
    pub fn status(&self) -> String {
        match &self.phase {
            Phase::Terminal(outcome) => outcome.message(),
            Phase::AwaitingMove(_) => self.status_line().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{EasyStrategy, Strategy};

    fn game_over_messages(events: &[GameEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameOver(outcome) => Some(outcome.message()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_status_names_player1() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::StatusChanged("Alice's turn (X)".to_string())]
        );
        assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Alice"));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        game.drain_events();

        let events = game.make_move(0, 0);
        assert!(matches!(events[0], GameEvent::BoardUpdated(_)));
        assert_eq!(events[1], GameEvent::StatusChanged("Bob's turn (O)".to_string()));

        game.make_move(1, 1);
        assert_eq!(game.current_player().map(|p| *p.symbol()), Some(Symbol::X));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_invalid_move_changes_nothing() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        game.make_move(0, 0);

        let before = game.board().clone();
        assert!(game.make_move(0, 0).is_empty());
        assert!(game.make_move(5, 0).is_empty());
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Bob"));
    }

    #[test]
    fn test_game_over_fires_once() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        let mut all = game.drain_events();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            all.extend(game.make_move(row, col));
        }
        all.extend(game.make_move(2, 2));

        assert_eq!(game_over_messages(&all), vec!["Alice wins!"]);
        assert!(game.is_over());
        assert_eq!(game.board().cell(Coord::new(2, 2)), Some(crate::Cell::Empty));
        assert!(game.current_player().is_none());
    }

    #[test]
    fn test_player2_win_uses_player2_name() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        let mut all = Vec::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)] {
            all.extend(game.make_move(row, col));
        }
        assert_eq!(game_over_messages(&all), vec!["Bob wins!"]);
    }

    #[test]
    fn test_draw() {
        let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
        let mut all = Vec::new();
        // X O X / X O O / O X X
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            all.extend(game.make_move(row, col));
        }
        assert_eq!(game_over_messages(&all), vec!["It's a draw!"]);
        assert_eq!(game.outcome(), Some(&Outcome::Draw));
        assert!(game.board().is_full());
        assert_eq!(game.board().check_winner(), None);
    }

    #[test]
    fn test_ai_replies_in_same_call() {
        let ai = AiPlayer::with_strategy(
            Symbol::O,
            Symbol::X,
            Strategy::Easy(EasyStrategy::with_seed(3)),
        );
        let mut game = GameState::with_ai("Alice", ai);
        game.drain_events();

        let events = game.make_move(1, 1);
        let boards = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BoardUpdated(_)))
            .count();
        assert_eq!(boards, 2);
        assert_eq!(
            events.last(),
            Some(&GameEvent::StatusChanged("Alice's turn (X)".to_string()))
        );
        assert_eq!(game.board().occupied(), 2);
        assert_eq!(game.history()[1].symbol, Symbol::O);
    }

    #[test]
    fn test_settings_label_fallback() {
        let settings = GameSettings::new(true, "Nightmare", "Alice", "AI");
        assert_eq!(*settings.difficulty(), Difficulty::Easy);
        assert!(*settings.vs_ai());
    }
}
