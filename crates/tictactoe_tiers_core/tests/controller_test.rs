//! Tests for the turn state machine and its AI replies.

use tictactoe_tiers_core::{
    GameConfig, GameError, GameState, GameStatus, Player, Position, Seat, Strategy, TurnController,
};

fn search_vs_search() -> GameConfig {
    GameConfig::new(Seat::Ai(Strategy::Search), Seat::Ai(Strategy::Search))
}

#[test]
fn test_new_game_initial_state() {
    let controller = TurnController::seeded(GameConfig::against(Strategy::Search), 0);
    let state = controller.new_game();
    assert_eq!(state, GameState::new());
    assert_eq!(state.current(), Player::First);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.board().empty_cells().len(), 9);
}

#[test]
fn test_reset_equals_new_game() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Heuristic), 1);
    let played = controller.request_move(&controller.new_game(), 4).unwrap();
    assert_ne!(played, controller.new_game());

    assert_eq!(controller.reset(), controller.new_game());
    assert_eq!(
        controller.config(),
        &GameConfig::against(Strategy::Heuristic)
    );
}

#[test]
fn test_search_vs_search_is_a_draw() {
    let mut controller = TurnController::seeded(search_vs_search(), 0);
    let state = controller.play_out().unwrap();
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.history().len(), 9);
}

#[test]
fn test_search_vs_search_draws_after_any_opening() {
    for pos in Position::ALL {
        let mut controller = TurnController::seeded(search_vs_search(), 0);
        let opened = controller.new_game().play(pos).unwrap();
        let state = controller.start(opened).unwrap();
        assert_eq!(state.status(), GameStatus::Draw, "opening at {pos}");
    }
}

#[test]
fn test_human_requests_wait_for_the_ai_opening() {
    let config = GameConfig::new(Seat::Ai(Strategy::Search), Seat::Human);
    let mut controller = TurnController::seeded(config, 0);
    let fresh = controller.new_game();

    assert_eq!(controller.request_move(&fresh, 8).unwrap(), fresh);
    assert_eq!(controller.reset(), fresh);

    let opened = controller.start(fresh).unwrap();
    assert_eq!(opened.history().len(), 1);
    assert_eq!(opened.current(), Player::Second);
}

#[test]
fn test_tampered_state_is_an_error_not_a_panic() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Search), 0);
    let mut json = serde_json::to_value(controller.new_game()).unwrap();
    json["board"]["cells"][0] = serde_json::json!("Second");
    let tampered: GameState = serde_json::from_value(json).unwrap();

    assert!(matches!(
        controller.request_move(&tampered, 4),
        Err(GameError::InvariantViolation(_))
    ));
    assert!(matches!(
        controller.start(tampered),
        Err(GameError::InvariantViolation(_))
    ));
}

#[test]
fn test_search_answers_center_with_a_corner() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Search), 0);
    let state = controller.request_move(&controller.new_game(), 4).unwrap();
    let reply = state.history()[1];
    assert!(reply.is_corner(), "search replied at {reply}");
}

/// Walks every line of play a human can choose against `controller`.
fn explore(controller: &mut TurnController, state: &GameState, games: &mut usize) {
    for pos in state.board().empty_cells() {
        let next = controller.request_move(state, pos.index()).unwrap();
        assert_ne!(
            next.status(),
            GameStatus::Won(Player::First),
            "human won with {:?}",
            next.history()
        );
        if next.status() == GameStatus::InProgress {
            explore(controller, &next, games);
        } else {
            *games += 1;
        }
    }
}

#[test]
fn test_human_never_beats_search() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Search), 0);
    let mut games = 0;
    let start = controller.new_game();
    explore(&mut controller, &start, &mut games);
    assert!(games > 0);
}

#[test]
fn test_heuristic_ai_blocks_through_controller() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Heuristic), 3);
    // First opens in the corner; the random reply decides which line First builds.
    let state = controller.request_move(&controller.new_game(), 0).unwrap();
    let (follow_up, threat) = match state.history()[1] {
        Position::TopCenter | Position::TopRight => (3, Position::BottomLeft),
        _ => (1, Position::TopRight),
    };

    let state = controller.request_move(&state, follow_up).unwrap();
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.history()[3], threat);
}

#[test]
fn test_terminal_state_ignores_requests() {
    let mut controller = TurnController::seeded(GameConfig::two_player(), 0);
    let mut state = controller.new_game();
    for index in [0, 3, 1, 4, 2] {
        state = controller.request_move(&state, index).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Won(Player::First));
    for index in [5, 6, 7, 8, 42] {
        assert_eq!(controller.request_move(&state, index).unwrap(), state);
    }
}

#[test]
fn test_two_human_draw() {
    let mut controller = TurnController::seeded(GameConfig::two_player(), 0);
    let mut state = controller.new_game();
    for index in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        state = controller.request_move(&state, index).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_random_ai_games_always_finish() {
    let config = GameConfig::new(Seat::Ai(Strategy::Random), Seat::Ai(Strategy::Heuristic));
    let mut controller = TurnController::seeded(config, 99);
    for _ in 0..50 {
        let state = controller.play_out().unwrap();
        assert!(state.status().is_terminal());
    }
}

#[test]
fn test_unknown_strategy_in_config_is_rejected() {
    let err = "impossible".parse::<Seat>().unwrap_err();
    assert_eq!(err, GameError::UnknownStrategy("impossible".to_string()));
    assert!(!err.is_recoverable());
}

#[test]
fn test_same_seed_replays_the_same_game() {
    let config = GameConfig::new(Seat::Ai(Strategy::Random), Seat::Ai(Strategy::Random));
    let a = TurnController::seeded(config, 1234).play_out().unwrap();
    let b = TurnController::seeded(config, 1234).play_out().unwrap();
    assert_eq!(a, b);
}
