//! Display names for the two players.

use tictactoe_tiers_core::{GameStatus, Player};

/// Resolved player names.
///
/// Blank names fall back to "Player 1" and "Player 2".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    first: String,
    second: String,
}

impl PlayerNames {
    /// Resolves names, substituting defaults for missing or blank ones.
    pub fn new(first: Option<&str>, second: Option<&str>) -> Self {
        let pick = |name: Option<&str>, fallback: &str| {
            name.map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            first: pick(first, "Player 1"),
            second: pick(second, "Player 2"),
        }
    }

    /// Name of `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }

    /// End-of-game message, `None` while the game is running.
    pub fn outcome_message(&self, status: GameStatus) -> Option<String> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{} wins!", self.name(player))),
            GameStatus::Draw => Some("It's a tie!".to_string()),
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_use_defaults() {
        let names = PlayerNames::new(Some("  "), None);
        assert_eq!(names.name(Player::First), "Player 1");
        assert_eq!(names.name(Player::Second), "Player 2");
    }

    #[test]
    fn test_outcome_messages() {
        let names = PlayerNames::new(Some("Ada"), Some("Bot"));
        assert_eq!(names.outcome_message(GameStatus::Won(Player::Second)).as_deref(), Some("Bot wins!"));
        assert_eq!(names.outcome_message(GameStatus::Draw).as_deref(), Some("It's a tie!"));
        assert_eq!(names.outcome_message(GameStatus::InProgress), None);
    }
}
