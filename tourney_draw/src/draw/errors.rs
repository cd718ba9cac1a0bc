//! Error types for draw planning

use crate::roster::{CategoryId, CompetitorId, GameId};
use thiserror::Error;

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;

/// Draw planning errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// Configuration rejected by validation
    #[error("Invalid draw configuration: {0}")]
    InvalidConfig(String),

    /// Not enough active competitors to fill a single table
    #[error(
        "Category {category_id} has {active} active competitor(s), at least {minimum} required"
    )]
    TooFewCompetitors {
        category_id: CategoryId,
        active: usize,
        minimum: usize,
    },

    /// Block references a game that was not supplied
    #[error("Block {block_number} references unknown game {game_id}")]
    UnknownGame { block_number: u32, game_id: GameId },

    /// Block belongs to another category
    #[error("Block {block_number} belongs to category {found}, expected {expected}")]
    BlockCategoryMismatch {
        block_number: u32,
        expected: CategoryId,
        found: CategoryId,
    },

    /// Active competitor belongs to another category
    #[error("Competitor {competitor_id} belongs to category {found}, expected {expected}")]
    CompetitorCategoryMismatch {
        competitor_id: CompetitorId,
        expected: CategoryId,
        found: CategoryId,
    },

    /// Competitor ID listed more than once
    #[error("Duplicate competitor: {0}")]
    DuplicateCompetitor(CompetitorId),

    /// Block number listed more than once
    #[error("Duplicate block number: {0}")]
    DuplicateBlock(u32),

    /// Table sizes handed to a round do not seat every competitor exactly once
    #[error("Round has {seats} seat(s) for {competitors} competitor(s)")]
    SeatCountMismatch { seats: usize, competitors: usize },

    /// Produced plan breaks a structural invariant
    #[error("Draw plan invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrawError::TooFewCompetitors {
            category_id: 3,
            active: 2,
            minimum: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("Category 3"));
        assert!(msg.contains("at least 4"));

        let err = DrawError::UnknownGame {
            block_number: 2,
            game_id: 99,
        };
        assert_eq!(err.to_string(), "Block 2 references unknown game 99");

        let err = DrawError::SeatCountMismatch {
            seats: 4,
            competitors: 6,
        };
        assert_eq!(err.to_string(), "Round has 4 seat(s) for 6 competitor(s)");
    }
}
