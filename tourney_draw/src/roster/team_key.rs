//! Team identity used by the same-team separation rule.

use serde::{Deserialize, Serialize};

/// Normalized team name.
///
/// Two competitors belong to the same team if and only if their team names
/// normalize to the same key. Normalization trims the name, collapses runs of
/// whitespace into a single space, and lowercases it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamKey(String);

impl TeamKey {
    /// Derive a key from a free-text team name
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_draw::roster::TeamKey;
    ///
    /// let a = TeamKey::from_team_name("  Tile  Masters");
    /// let b = TeamKey::from_team_name("tile masters");
    /// assert_eq!(a, b);
    /// assert!(TeamKey::from_team_name("   ").is_none());
    /// ```
    pub fn from_team_name(team_name: &str) -> Option<Self> {
        let normalized = team_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
