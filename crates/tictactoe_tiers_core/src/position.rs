//! Cell positions on the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, numbered 0-8 in row-major order.
///
/// Raw indices coming from an adapter are converted with
/// [`Position::from_index`]; anything outside the grid has no `Position`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a label such as `"top-left"`, `"Bottom right"` or `"center"`.
    ///
    /// Matching ignores case and treats spaces and underscores as dashes.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        if normalized == "middle" || normalized == "centre" {
            return Some(Position::Center);
        }
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == normalized)
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label("Top center"), Some(Position::TopCenter));
        assert_eq!(Position::from_label("bottom_right"), Some(Position::BottomRight));
        assert_eq!(Position::from_label("top"), None);
    }

    #[test]
    fn test_corners() {
        let corners: Vec<usize> = Position::ALL
            .iter()
            .filter(|p| p.is_corner())
            .map(|p| p.index())
            .collect();
        assert_eq!(corners, [0, 2, 6, 8]);
    }
}
