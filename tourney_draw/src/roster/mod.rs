//! Roster data supplied by the surrounding application.
//!
//! The engine never owns this data: competitors, categories, blocks and games
//! are read-only records for the duration of a draw or placement computation.

pub mod models;
pub mod team_key;

pub use models::{
    Block, Category, CategoryId, Competitor, CompetitorId, EntryId, Game, GameId, PointsOrder,
    ScoringType,
};
pub use team_key::TeamKey;
