//! Ranking of raw points at one table.

use super::errors::{PlacementError, PlacementResult};
use crate::roster::{EntryId, PointsOrder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Raw points of one seat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub entry_id: EntryId,
    pub points: f64,
}

impl PointsEntry {
    pub fn new(entry_id: EntryId, points: f64) -> Self {
        Self { entry_id, points }
    }
}

/// Convert a table's points into placements.
///
/// Rank 1 goes to the smallest points for [`PointsOrder::Asc`] and to the
/// largest for [`PointsOrder::Desc`]. Entries with equal points share the mean
/// of the ranks they occupy, so the placements of `k` entries always sum to
/// `k * (k + 1) / 2`.
///
/// # Examples
///
/// ```
/// use tourney_draw::roster::PointsOrder;
/// use tourney_draw::scoring::{PointsEntry, build_placements_from_points};
///
/// let entries = [
///     PointsEntry::new(1, 40.0),
///     PointsEntry::new(2, 40.0),
///     PointsEntry::new(3, 20.0),
///     PointsEntry::new(4, 10.0),
/// ];
/// let placements = build_placements_from_points(&entries, PointsOrder::Desc).unwrap();
/// assert_eq!(placements[&1], 1.5);
/// assert_eq!(placements[&2], 1.5);
/// assert_eq!(placements[&3], 3.0);
/// assert_eq!(placements[&4], 4.0);
/// ```
pub fn build_placements_from_points(
    entries: &[PointsEntry],
    order: PointsOrder,
) -> PlacementResult<BTreeMap<EntryId, f64>> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !entry.points.is_finite() {
            return Err(PlacementError::NonFinitePoints {
                entry_id: entry.entry_id,
            });
        }
        if !seen.insert(entry.entry_id) {
            return Err(PlacementError::DuplicateEntry(entry.entry_id));
        }
    }

    let mut sorted: Vec<PointsEntry> = entries.to_vec();
    sorted.sort_by(|a, b| match order {
        PointsOrder::Asc => a.points.total_cmp(&b.points),
        PointsOrder::Desc => b.points.total_cmp(&a.points),
    });

    let mut placements = BTreeMap::new();
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start + 1;
        while end < sorted.len() && sorted[end].points == sorted[start].points {
            end += 1;
        }

        // Ranks start + 1 ..= end share their mean
        let placement = (start + 1 + end) as f64 / 2.0;
        for entry in &sorted[start..end] {
            placements.insert(entry.entry_id, placement);
        }
        start = end;
    }

    Ok(placements)
}
