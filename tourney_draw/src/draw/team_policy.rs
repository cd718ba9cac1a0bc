//! Same-team separation rule.
//!
//! Competitors from the same team should not share a table. When a team is
//! larger than the number of tables in a round this cannot be avoided, so the
//! rule becomes a weighted penalty: collisions inside a small team cost more
//! than collisions inside a large one, which protects teams of two first.

use crate::roster::{Competitor, CompetitorId, TeamKey};
use std::collections::HashMap;

/// Penalty numerator, divided by the team size to weight one colliding pair
pub const TEAM_PENALTY_SCALE: u32 = 12_000;

/// Lower bound for the weight of a colliding pair in any team
pub const MIN_TEAM_PENALTY: u32 = 100;

/// Team membership lookup and collision scoring for one category.
#[derive(Debug, Clone, Default)]
pub struct TeamSeparationPolicy {
    team_of: HashMap<CompetitorId, TeamKey>,
    team_sizes: HashMap<TeamKey, usize>,
}

impl TeamSeparationPolicy {
    /// Build the policy from a category's active competitors
    pub fn new(competitors: &[Competitor]) -> Self {
        let mut team_of = HashMap::new();
        let mut team_sizes: HashMap<TeamKey, usize> = HashMap::new();

        for competitor in competitors {
            if let Some(key) = competitor.team_key() {
                *team_sizes.entry(key.clone()).or_insert(0) += 1;
                team_of.insert(competitor.id, key);
            }
        }

        Self {
            team_of,
            team_sizes,
        }
    }

    /// Team of a competitor, `None` when they play alone
    pub fn team_of(&self, id: CompetitorId) -> Option<&TeamKey> {
        self.team_of.get(&id)
    }

    /// Size of the largest team, 0 when nobody has a team
    pub fn largest_team_size(&self) -> usize {
        self.team_sizes.values().copied().max().unwrap_or(0)
    }

    /// Penalty for one colliding pair of a team with `team_size` members
    pub fn collision_weight(team_size: usize) -> u32 {
        match team_size {
            0 | 1 => 0,
            size => {
                let size = u32::try_from(size).unwrap_or(u32::MAX);
                (TEAM_PENALTY_SCALE / size).max(MIN_TEAM_PENALTY)
            }
        }
    }

    /// Size of a competitor's team, 0 when they play alone
    pub fn team_size_of(&self, id: CompetitorId) -> usize {
        self.team_of
            .get(&id)
            .and_then(|team| self.team_sizes.get(team))
            .copied()
            .unwrap_or(0)
    }

    /// Whether two competitors belong to the same team
    pub fn same_team(&self, a: CompetitorId, b: CompetitorId) -> bool {
        matches!(
            (self.team_of.get(&a), self.team_of.get(&b)),
            (Some(team_a), Some(team_b)) if team_a == team_b
        )
    }

    /// Penalty for seating `a` and `b` at the same table
    pub fn pair_penalty(&self, a: CompetitorId, b: CompetitorId) -> u32 {
        match (self.team_of.get(&a), self.team_of.get(&b)) {
            (Some(team_a), Some(team_b)) if team_a == team_b => {
                Self::collision_weight(self.team_sizes.get(team_a).copied().unwrap_or(0))
            }
            _ => 0,
        }
    }

    /// Weighted same-team penalty of a candidate table
    pub fn penalty(&self, members: &[CompetitorId]) -> u64 {
        self.seated_by_team(members)
            .into_iter()
            .map(|(team, seated)| {
                let team_size = self.team_sizes.get(team).copied().unwrap_or(0);
                let weight = u64::from(Self::collision_weight(team_size));
                seated * seated.saturating_sub(1) / 2 * weight
            })
            .sum()
    }

    /// Penalty increase from seating `candidate` with `members`
    pub fn added_penalty(&self, candidate: CompetitorId, members: &[CompetitorId]) -> u64 {
        members
            .iter()
            .map(|&m| u64::from(self.pair_penalty(candidate, m)))
            .sum()
    }

    /// Whether seating `candidate` with `members` puts two teammates together
    pub fn collides(&self, candidate: CompetitorId, members: &[CompetitorId]) -> bool {
        members.iter().any(|&m| self.same_team(candidate, m))
    }

    fn seated_by_team(&self, members: &[CompetitorId]) -> HashMap<&TeamKey, u64> {
        let mut per_team: HashMap<&TeamKey, u64> = HashMap::new();
        for &id in members {
            if let Some(team) = self.team_of.get(&id) {
                *per_team.entry(team).or_insert(0) += 1;
            }
        }
        per_team
    }

    /// Same-team pairs inside a table, grouped by team
    pub fn collisions_by_team(&self, members: &[CompetitorId]) -> HashMap<TeamKey, u32> {
        self.seated_by_team(members)
            .into_iter()
            .filter(|&(_, seated)| seated > 1)
            .map(|(team, seated)| {
                let pairs = seated * (seated - 1) / 2;
                (team.clone(), u32::try_from(pairs).unwrap_or(u32::MAX))
            })
            .collect()
    }

    /// Number of same-team pairs inside a table
    pub fn collisions(&self, members: &[CompetitorId]) -> u32 {
        self.collisions_by_team(members).values().sum()
    }

    /// Whether every round can be drawn with zero same-team collisions.
    ///
    /// Table sizes from the planner differ by at most one seat, so dealing the
    /// competitors team by team across the tables in turn separates every team
    /// that is no larger than the table count. A larger team cannot be
    /// separated at all.
    pub fn is_strictly_feasible(&self, table_sizes: &[usize]) -> bool {
        self.largest_team_size() <= table_sizes.len()
    }
}
