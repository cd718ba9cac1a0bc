//! Table draws for multi-round, four-seat tournaments.
//!
//! This module seats every active competitor of a category at every round of
//! every block:
//! - Table sizes per round, bounded by a maximum table count
//! - Repeat-pairing avoidance within a block
//! - Same-team separation, relaxed only when a team cannot be spread out
//! - Randomized construction with a bounded retry budget
//!
//! All randomness comes from the caller's generator, so a seeded generator
//! reproduces a draw exactly.

pub mod config;
pub mod errors;
pub mod pairing;
pub mod plan;
pub mod planner;
pub mod round;
pub mod table_sizes;
pub mod team_policy;

pub use config::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_TABLES, DEFAULT_ROUNDS_PER_BLOCK, DEFAULT_SWAP_PASSES,
    DEFAULT_TABLE_SIZE, DrawConfig,
};
pub use errors::{DrawError, DrawResult};
pub use pairing::PairingTracker;
pub use plan::{BlockPlan, BlockStats, DrawPlan, RoundPlan, TablePlan};
pub use planner::plan_category_draw;
pub use round::{RoundAssignmentEngine, RoundOutcome};
pub use table_sizes::build_round_table_sizes;
pub use team_policy::TeamSeparationPolicy;
