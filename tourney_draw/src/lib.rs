//! # Tourney Draw
//!
//! Table draw and placement engine for multi-round, four-seat board game
//! tournaments run within categories of competitors.
//!
//! The engine is a pure, synchronous computation library. Roster, block and
//! game data come from the surrounding application; the engine returns seating
//! plans and placements for it to persist or display.
//!
//! ## Core Modules
//!
//! - [`roster`]: Competitors, categories, blocks, games and team keys
//! - [`draw`]: Table sizes, pairing tracking, team separation, round
//!   assignment and per-category draw plans
//! - [`scoring`]: Placements from raw points and placement resolution
//!
//! ## Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tourney_draw::{
//!     DrawConfig, plan_category_draw,
//!     roster::{Block, Category, Competitor, Game, PointsOrder, ScoringType},
//! };
//!
//! let category = Category::new(1, "Juniors");
//! let competitors: Vec<_> = (1..=16)
//!     .map(|id| Competitor::new(id, format!("Player {id}"), format!("Club {}", id % 5), 1))
//!     .collect();
//! let games = vec![Game::new(3, "Riichi", ScoringType::Points, PointsOrder::Desc)];
//! let blocks = vec![Block::new(1, 1, 3)];
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let plan = plan_category_draw(
//!     &category,
//!     &competitors,
//!     &blocks,
//!     &games,
//!     &DrawConfig::default(),
//!     &mut rng,
//! )
//! .unwrap();
//!
//! assert_eq!(plan.blocks[0].rounds[0].tables.len(), 4);
//! ```

/// Roster records supplied by the application.
pub mod roster;

/// Draw planning.
pub mod draw;
pub use draw::{
    BlockPlan, DrawConfig, DrawError, DrawPlan, DrawResult, RoundPlan, TablePlan,
    build_round_table_sizes, plan_category_draw,
};

/// Placement computation.
pub mod scoring;
pub use scoring::{
    PlacementError, PlacementInput, PointsEntry, build_placements_from_points,
    resolve_placement_for_save,
};
