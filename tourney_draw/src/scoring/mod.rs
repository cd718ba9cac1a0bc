//! Placements derived from table results.
//!
//! - [`build_placements_from_points`] ranks the raw points of one table, giving
//!   tied entries the mean of the ranks they occupy
//! - [`resolve_placement_for_save`] picks the placement to store for an entry
//!   from the manual and computed candidates

pub mod errors;
pub mod placements;
pub mod resolver;

pub use errors::{PlacementError, PlacementResult};
pub use placements::{PointsEntry, build_placements_from_points};
pub use resolver::{PlacementInput, resolve_placement_for_save, resolve_points_for_save};
