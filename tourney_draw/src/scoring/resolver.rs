//! Choosing the placement value stored for an entry.

use crate::roster::ScoringType;
use serde::{Deserialize, Serialize};

/// Candidates for the stored result of one entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementInput {
    pub scoring_type: ScoringType,
    /// Manually entered points
    #[serde(default)]
    pub parsed_points: Option<f64>,
    /// Manually entered placement
    #[serde(default)]
    pub parsed_placement: Option<f64>,
    /// Placement computed from the table's points
    #[serde(default)]
    pub auto_placement: Option<f64>,
}

/// Placement to persist, `None` meaning "no placement recorded".
///
/// | scoring type | manual placement | stored          |
/// |--------------|------------------|-----------------|
/// | `points`     | any              | `None`          |
/// | `placement`  | present          | manual          |
/// | `placement`  | absent           | `None`          |
/// | `both`       | present          | manual          |
/// | `both`       | absent           | computed        |
///
/// Standings must exclude a `None` placement rather than treat it as zero.
pub fn resolve_placement_for_save(input: &PlacementInput) -> Option<f64> {
    match input.scoring_type {
        ScoringType::Points => None,
        ScoringType::Placement => input.parsed_placement,
        ScoringType::Both => input.parsed_placement.or(input.auto_placement),
    }
}

/// Points to persist: the manual points, except for pure placement games
pub fn resolve_points_for_save(input: &PlacementInput) -> Option<f64> {
    match input.scoring_type {
        ScoringType::Placement => None,
        ScoringType::Points | ScoringType::Both => input.parsed_points,
    }
}
