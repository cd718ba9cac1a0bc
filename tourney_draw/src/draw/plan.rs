//! Draw plan output and its structural checks.

use super::config::DrawConfig;
use super::errors::{DrawError, DrawResult};
use super::pairing::PairingTracker;
use super::table_sizes::build_round_table_sizes;
use super::team_policy::TeamSeparationPolicy;
use crate::roster::{CategoryId, CompetitorId, GameId, TeamKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Competitors seated together for one round, in seat order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePlan {
    /// Table number (1-indexed)
    pub table_number: u32,
    /// Seated competitors
    pub competitor_ids: Vec<CompetitorId>,
}

/// All tables of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    /// Round number within the block (1-indexed)
    pub round_number: u32,
    pub tables: Vec<TablePlan>,
}

impl RoundPlan {
    /// Every seated competitor, table by table
    pub fn seated(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.tables
            .iter()
            .flat_map(|table| table.competitor_ids.iter().copied())
    }

    /// Seat counts of the round's tables
    pub fn table_sizes(&self) -> Vec<usize> {
        self.tables
            .iter()
            .map(|table| table.competitor_ids.len())
            .collect()
    }
}

/// Rounds of one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPlan {
    pub block_number: u32,
    pub game_id: GameId,
    pub rounds: Vec<RoundPlan>,
    /// True when teammates had to share a table somewhere in this block
    pub used_relaxed_same_team_rule: bool,
}

/// Seating quality of one block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    /// Most times any pair shared a table
    pub max_pair_count: u32,
    /// Pairs that shared a table more than once
    pub repeated_pairs: usize,
    /// Same-team pairs seated together, summed over all rounds
    pub same_team_collisions: u32,
    /// Same-team pairs seated together, per team
    pub collisions_by_team: BTreeMap<TeamKey, u32>,
}

impl BlockPlan {
    /// Pairing counts accumulated over every round of the block
    pub fn pairing_counts(&self) -> PairingTracker {
        let mut tracker = PairingTracker::new();
        for round in &self.rounds {
            for table in &round.tables {
                tracker.increment(&table.competitor_ids);
            }
        }
        tracker
    }

    /// Compute repeat-pairing and same-team statistics
    pub fn stats(&self, policy: &TeamSeparationPolicy) -> BlockStats {
        let tracker = self.pairing_counts();
        let mut collisions_by_team: BTreeMap<TeamKey, u32> = BTreeMap::new();

        for round in &self.rounds {
            for table in &round.tables {
                for (team, count) in policy.collisions_by_team(&table.competitor_ids) {
                    *collisions_by_team.entry(team).or_insert(0) += count;
                }
            }
        }

        BlockStats {
            max_pair_count: tracker.max_count(),
            repeated_pairs: tracker.repeated_pairs(),
            same_team_collisions: collisions_by_team.values().sum(),
            collisions_by_team,
        }
    }
}

/// Draw plan for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub category_id: CategoryId,
    pub blocks: Vec<BlockPlan>,
}

impl DrawPlan {
    /// Check the structural invariants of the plan.
    ///
    /// Every round must seat each active competitor exactly once, every block
    /// must run `config.rounds_per_block` rounds, no round may use more than
    /// `config.max_tables` tables, and table sizes within a round may differ by
    /// at most one seat. When the competitor count can be split into tables of
    /// `table_size` or `table_size + 1` seats within `config.max_tables`, every
    /// table must also fall in that band.
    pub fn validate(&self, active_ids: &[CompetitorId], config: &DrawConfig) -> DrawResult<()> {
        let expected: HashSet<CompetitorId> = active_ids.iter().copied().collect();
        let band = config.table_size..=config.table_size + 1;
        let band_reachable = build_round_table_sizes(expected.len(), config)
            .iter()
            .all(|size| band.contains(size));

        for block in &self.blocks {
            if block.rounds.len() != config.rounds_per_block as usize {
                return Err(DrawError::InvariantViolation(format!(
                    "block {} has {} rounds, expected {}",
                    block.block_number,
                    block.rounds.len(),
                    config.rounds_per_block
                )));
            }

            for round in &block.rounds {
                let context = format!("block {} round {}", block.block_number, round.round_number);

                if round.tables.len() > config.max_tables {
                    return Err(DrawError::InvariantViolation(format!(
                        "{context} uses {} tables, limit is {}",
                        round.tables.len(),
                        config.max_tables
                    )));
                }

                let mut seen = HashSet::with_capacity(expected.len());
                for id in round.seated() {
                    if !expected.contains(&id) {
                        return Err(DrawError::InvariantViolation(format!(
                            "{context} seats unknown competitor {id}"
                        )));
                    }
                    if !seen.insert(id) {
                        return Err(DrawError::InvariantViolation(format!(
                            "{context} seats competitor {id} twice"
                        )));
                    }
                }

                if seen.len() != expected.len() {
                    return Err(DrawError::InvariantViolation(format!(
                        "{context} seats {} of {} competitors",
                        seen.len(),
                        expected.len()
                    )));
                }

                let sizes = round.table_sizes();
                let smallest = sizes.iter().copied().min().unwrap_or(0);
                let largest = sizes.iter().copied().max().unwrap_or(0);
                if smallest == 0 || largest - smallest > 1 {
                    return Err(DrawError::InvariantViolation(format!(
                        "{context} has unbalanced table sizes {sizes:?}"
                    )));
                }
                if band_reachable && !sizes.iter().all(|size| band.contains(size)) {
                    return Err(DrawError::InvariantViolation(format!(
                        "{context} has table sizes {sizes:?} outside {}..={}",
                        band.start(),
                        band.end()
                    )));
                }
            }
        }

        Ok(())
    }
}
