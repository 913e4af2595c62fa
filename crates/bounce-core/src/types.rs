//! Common type aliases and the player identity used throughout the engine.

use std::fmt;

/// Search depth in plies (one ply = one single-direction move).
pub type Depth = u32;

/// Heuristic score from one player's perspective.
pub type Score = f64;

/// One of the two players.
///
/// `First` (id 0) scores by moving the marker into column 0,
/// `Second` (id 1) by moving it into the last column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players in id order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Returns the player id (0 or 1).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Converts a player id back into a `Player`.
    ///
    /// # Returns
    ///
    /// `None` if `index` is not 0 or 1.
    pub const fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// Returns the other player.
    #[inline(always)]
    pub const fn opposite(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Player::First.opposite(), Player::Second);
        assert_eq!(Player::Second.opposite(), Player::First);
        assert_eq!(Player::First.opposite().opposite(), Player::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::First.to_string(), "Player 1");
        assert_eq!(Player::Second.to_string(), "Player 2");
    }
}
