//! End-to-end games driven through the public state machine API.

use tictactoe_core::{
    AiPlayer, Board, Coord, Difficulty, EasyStrategy, GameEvent, GameObserver, GameSettings,
    GameState, Grid, HardStrategy, MoveStrategy, Outcome, Strategy, Symbol,
};

#[derive(Default)]
struct Transcript {
    boards: Vec<Grid>,
    statuses: Vec<String>,
    game_over: Vec<String>,
}

impl GameObserver for Transcript {
    fn on_board_update(&mut self, grid: &Grid) {
        self.boards.push(*grid);
    }

    fn on_status_update(&mut self, status: &str) {
        self.statuses.push(status.to_string());
    }

    fn on_game_over(&mut self, message: &str) {
        self.game_over.push(message.to_string());
    }
}

fn play(game: &mut GameState, moves: &[(usize, usize)], transcript: &mut Transcript) {
    for event in game.drain_events() {
        event.dispatch(transcript);
    }
    for &(row, col) in moves {
        for event in game.make_move(row, col) {
            event.dispatch(transcript);
        }
    }
}

#[test]
fn test_alice_wins_top_row() {
    let mut game = GameState::new(GameSettings::new(false, "Easy", "Alice", "Bob"));
    let mut transcript = Transcript::default();
    play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        &mut transcript,
    );

    assert_eq!(transcript.game_over, vec!["Alice wins!"]);
    assert_eq!(transcript.boards.len(), 5);
    assert_eq!(
        transcript.statuses,
        vec![
            "Alice's turn (X)",
            "Bob's turn (O)",
            "Alice's turn (X)",
            "Bob's turn (O)",
            "Alice's turn (X)",
        ]
    );
    assert_eq!(game.status(), "Alice wins!");
}

#[test]
fn test_moves_after_game_over_ignored() {
    let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
    let mut transcript = Transcript::default();
    play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2), (2, 1)],
        &mut transcript,
    );

    assert_eq!(transcript.game_over.len(), 1);
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.board().occupied(), 5);
}

#[test]
fn test_invalid_moves_emit_nothing() {
    let mut game = GameState::new(GameSettings::player_vs_player("Alice", "Bob"));
    game.drain_events();
    game.make_move(1, 1);

    assert!(game.make_move(1, 1).is_empty());
    assert!(game.make_move(3, 0).is_empty());
    assert!(game.make_move(0, 7).is_empty());
    assert_eq!(game.status(), "Bob's turn (O)");
}

#[test]
fn test_hard_ai_answers_center_with_corner() {
    for _ in 0..3 {
        let mut game = GameState::new(GameSettings::player_vs_ai("Alice", Difficulty::Hard));
        game.drain_events();
        let events = game.make_move(1, 1);

        let last_board = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::BoardUpdated(grid) => Some(*grid),
                _ => None,
            })
            .last()
            .expect("AI move should update the board");
        assert_eq!(last_board[0][0].symbol(), Some(Symbol::O));
        assert_eq!(game.history()[1].coord, Coord::new(0, 0));
    }
}

#[test]
fn test_hard_ai_never_loses_to_first_free_cell() {
    let mut game = GameState::new(GameSettings::player_vs_ai("Alice", Difficulty::Hard));
    let mut transcript = Transcript::default();
    let mut attempts = Coord::ALL.iter();
    for event in game.drain_events() {
        event.dispatch(&mut transcript);
    }
    while !game.is_over() {
        let Some(coord) = attempts.next() else { break };
        for event in game.make_move(coord.row, coord.col) {
            event.dispatch(&mut transcript);
        }
    }

    assert!(game.is_over());
    assert_eq!(transcript.game_over.len(), 1);
    match game.outcome() {
        Some(Outcome::Winner { name, symbol }) => {
            assert_eq!(name, "AI");
            assert_eq!(*symbol, Symbol::O);
        }
        Some(Outcome::Draw) => {}
        None => panic!("game should be over"),
    }
}

#[test]
fn test_easy_ai_game_runs_to_completion() {
    let ai = AiPlayer::with_strategy(
        Symbol::O,
        Symbol::X,
        Strategy::Easy(EasyStrategy::with_seed(42)),
    );
    let mut game = GameState::with_ai("Alice", ai);
    let mut transcript = Transcript::default();
    for event in game.drain_events() {
        event.dispatch(&mut transcript);
    }

    for coord in Coord::ALL {
        if game.is_over() {
            break;
        }
        for event in game.make_move(coord.row, coord.col) {
            event.dispatch(&mut transcript);
        }
    }

    assert!(game.is_over());
    assert_eq!(transcript.game_over.len(), 1);
    assert!(game.current_player().is_none());
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut board = Board::new();
    let mut hard = HardStrategy;
    let mut mover = Symbol::X;

    while board.check_winner().is_none() && !board.is_full() {
        let coord = hard
            .select_move(&board, mover, mover.opponent())
            .expect("non-full board has a move");
        board.place(coord, mover).expect("strategy picks empty cells");
        mover = mover.opponent();
    }

    assert_eq!(board.check_winner(), None);
    assert!(board.is_full());
}

#[test]
fn test_outcome_serializes() {
    let outcome = Outcome::Winner {
        name: "Alice".to_string(),
        symbol: Symbol::X,
    };
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let back: Outcome = serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(back, outcome);
}
