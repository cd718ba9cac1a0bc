//! Roster, game and block records.

use super::team_key::TeamKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Competitor ID type
pub type CompetitorId = i64;

/// Category ID type
pub type CategoryId = i64;

/// Game ID type
pub type GameId = i64;

/// Score entry ID type (one entry per seat of a played table)
pub type EntryId = i64;

/// A registered competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Unique competitor ID
    pub id: CompetitorId,
    /// Name shown on seating sheets
    pub display_name: String,
    /// Free-text team name, empty when the competitor plays alone
    #[serde(default)]
    pub team_name: String,
    /// Category the competitor is registered in
    pub category_id: CategoryId,
    /// Only active competitors are seated
    pub active: bool,
}

impl Competitor {
    /// Create an active competitor
    pub fn new(
        id: CompetitorId,
        display_name: impl Into<String>,
        team_name: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            team_name: team_name.into(),
            category_id,
            active: true,
        }
    }

    /// Mark the competitor inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Normalized team identity, `None` when the competitor has no team
    pub fn team_key(&self) -> Option<TeamKey> {
        TeamKey::from_team_name(&self.team_name)
    }
}

/// Competition category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One game assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block number within the category
    pub block_number: u32,
    /// Owning category
    pub category_id: CategoryId,
    /// Game played in every round of the block
    pub game_id: GameId,
}

impl Block {
    pub fn new(block_number: u32, category_id: CategoryId, game_id: GameId) -> Self {
        Self {
            block_number,
            category_id,
            game_id,
        }
    }
}

/// How results of a game are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    /// Raw points only
    Points,
    /// Manually entered placements only
    Placement,
    /// Points, with placements either entered or derived from points
    Both,
}

impl std::fmt::Display for ScoringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringType::Points => write!(f, "points"),
            ScoringType::Placement => write!(f, "placement"),
            ScoringType::Both => write!(f, "both"),
        }
    }
}

impl FromStr for ScoringType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(ScoringType::Points),
            "placement" => Ok(ScoringType::Placement),
            "both" => Ok(ScoringType::Both),
            other => Err(format!("Unknown scoring type: {other}")),
        }
    }
}

/// Direction in which points are ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsOrder {
    /// Lower is better
    Asc,
    /// Higher is better
    #[default]
    Desc,
}

impl std::fmt::Display for PointsOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointsOrder::Asc => write!(f, "asc"),
            PointsOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for PointsOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(PointsOrder::Asc),
            "desc" => Ok(PointsOrder::Desc),
            other => Err(format!("Unknown points order: {other}")),
        }
    }
}

/// Game metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub scoring_type: ScoringType,
    #[serde(default)]
    pub points_order: PointsOrder,
}

impl Game {
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        scoring_type: ScoringType,
        points_order: PointsOrder,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            scoring_type,
            points_order,
        }
    }
}
