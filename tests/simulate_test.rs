//! Tests for batch AI-vs-AI simulation.

use tictactoe_tiers::simulate;
use tictactoe_tiers_core::{GameConfig, Seat, Strategy, TurnController};

#[test]
fn test_search_mirror_always_draws() {
    let config = GameConfig::new(Seat::Ai(Strategy::Search), Seat::Ai(Strategy::Search));
    let mut controller = TurnController::seeded(config, 0);
    let report = simulate(&mut controller, 5).expect("Simulation runs");
    assert_eq!(*report.tally.draws(), 5);
    assert_eq!(report.tally.games(), 5);
}

#[test]
fn test_search_never_loses_to_random() {
    let config = GameConfig::new(Seat::Ai(Strategy::Random), Seat::Ai(Strategy::Search));
    let mut controller = TurnController::seeded(config, 17);
    let report = simulate(&mut controller, 40).expect("Simulation runs");
    assert_eq!(*report.tally.first_wins(), 0);
    assert_eq!(report.tally.games(), 40);
}

#[test]
fn test_human_seat_is_rejected() {
    let mut controller = TurnController::seeded(GameConfig::against(Strategy::Random), 0);
    let err = simulate(&mut controller, 1).unwrap_err();
    assert!(err.to_string().contains("two AI seats"));
}

#[test]
fn test_report_json_shape() {
    let config = GameConfig::new(Seat::Ai(Strategy::Heuristic), Seat::Ai(Strategy::Random));
    let mut controller = TurnController::seeded(config, 3);
    let report = simulate(&mut controller, 10).expect("Simulation runs");
    let json = serde_json::to_value(&report).expect("Report serializes");
    assert_eq!(json["first"], "heuristic");
    assert_eq!(json["second"], "random");
    let total = ["first_wins", "second_wins", "draws"]
        .iter()
        .map(|key| json["tally"][key].as_u64().unwrap())
        .sum::<u64>();
    assert_eq!(total, 10);
}
