//! Table assignment for a single round.
//!
//! Each attempt shuffles the competitors, seats them greedily at the open
//! table with the lowest added cost, then improves the result with pairwise
//! swaps between tables. The cost of seating two competitors together is the
//! number of times they already shared a table in this block plus their
//! same-team penalty. The first attempt with zero cost is accepted; otherwise
//! the cheapest attempt within the retry budget wins.

use super::config::DrawConfig;
use super::errors::{DrawError, DrawResult};
use super::pairing::PairingTracker;
use super::team_policy::TeamSeparationPolicy;
use crate::roster::CompetitorId;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Accepted seating of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Members of each table in seat order, tables in planner order
    pub tables: Vec<Vec<CompetitorId>>,
    /// Repeat-pairing count plus same-team penalty of the accepted seating
    pub score: u64,
    /// Attempts spent before acceptance
    pub attempts: u32,
    /// True when the retry budget ran out without a zero-cost seating
    pub exhausted: bool,
}

/// Seats one round against the pairings already committed in the block.
pub struct RoundAssignmentEngine<'a> {
    tracker: &'a mut PairingTracker,
    policy: &'a TeamSeparationPolicy,
    config: &'a DrawConfig,
    strict_teams: bool,
}

impl<'a> RoundAssignmentEngine<'a> {
    /// Create an engine for one round.
    ///
    /// With `strict_teams` set, attempts that would seat two teammates
    /// together are abandoned and retried.
    pub fn new(
        tracker: &'a mut PairingTracker,
        policy: &'a TeamSeparationPolicy,
        config: &'a DrawConfig,
        strict_teams: bool,
    ) -> Self {
        Self {
            tracker,
            policy,
            config,
            strict_teams,
        }
    }

    fn pair_cost(&self, a: CompetitorId, b: CompetitorId) -> u64 {
        u64::from(self.tracker.count(a, b)) + u64::from(self.policy.pair_penalty(a, b))
    }

    /// Cost of seating `candidate` with `members`, ignoring `skip`
    fn cost_against(
        &self,
        candidate: CompetitorId,
        members: &[CompetitorId],
        skip: Option<CompetitorId>,
    ) -> u64 {
        members
            .iter()
            .filter(|&&m| Some(m) != skip && m != candidate)
            .map(|&m| self.pair_cost(candidate, m))
            .sum()
    }

    fn collides_against(
        &self,
        candidate: CompetitorId,
        members: &[CompetitorId],
        skip: CompetitorId,
    ) -> bool {
        members
            .iter()
            .any(|&m| m != skip && self.policy.same_team(candidate, m))
    }

    /// Combined cost of a table
    pub fn table_cost(&self, members: &[CompetitorId]) -> u64 {
        members
            .iter()
            .enumerate()
            .map(|(idx, &a)| {
                members[idx + 1..]
                    .iter()
                    .map(|&b| self.pair_cost(a, b))
                    .sum::<u64>()
            })
            .sum()
    }

    fn score(&self, tables: &[Vec<CompetitorId>]) -> u64 {
        tables.iter().map(|table| self.table_cost(table)).sum()
    }

    /// Seat every competitor at tables of exactly `table_sizes` seats.
    ///
    /// The accepted tables are committed to the pairing tracker and their
    /// seat order is shuffled before returning.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::SeatCountMismatch`] when `table_sizes` does not
    /// sum to the number of competitors. Nothing is committed in that case.
    pub fn assign<R: Rng + ?Sized>(
        &mut self,
        competitors: &[CompetitorId],
        table_sizes: &[usize],
        rng: &mut R,
    ) -> DrawResult<RoundOutcome> {
        let seats: usize = table_sizes.iter().sum();
        if seats != competitors.len() {
            return Err(DrawError::SeatCountMismatch {
                seats,
                competitors: competitors.len(),
            });
        }

        let mut best: Option<(Vec<Vec<CompetitorId>>, u64)> = None;
        let mut attempts = 0;

        for attempt in 1..=self.config.max_attempts {
            attempts = attempt;

            let Some(mut tables) = self.attempt(competitors, table_sizes, self.strict_teams, rng)
            else {
                continue;
            };
            self.improve_by_swaps(&mut tables);

            let score = self.score(&tables);
            if best.as_ref().is_none_or(|(_, best_score)| score < *best_score) {
                best = Some((tables, score));
            }
            if score == 0 {
                break;
            }
        }

        let (mut tables, score) = match best {
            Some(found) => found,
            None => {
                warn!(
                    "No strictly separated seating found in {} attempts, relaxing same-team rule",
                    self.config.max_attempts
                );
                // A relaxed attempt never rejects a seat while seats match competitors.
                let mut tables = self
                    .attempt(competitors, table_sizes, false, rng)
                    .ok_or_else(|| {
                        DrawError::InvariantViolation(
                            "relaxed attempt left a competitor unseated".to_string(),
                        )
                    })?;
                self.improve_by_swaps(&mut tables);
                let score = self.score(&tables);
                (tables, score)
            }
        };

        let exhausted = score > 0;
        if exhausted {
            debug!("Round accepted with score {score} after {attempts} attempt(s)");
        } else {
            debug!("Round accepted with zero cost after {attempts} attempt(s)");
        }

        for table in &mut tables {
            self.tracker.increment(table);
            table.shuffle(rng);
        }

        Ok(RoundOutcome {
            tables,
            score,
            attempts,
            exhausted,
        })
    }

    /// One randomized greedy construction; `None` when it paints itself into a corner
    fn attempt<R: Rng + ?Sized>(
        &self,
        competitors: &[CompetitorId],
        table_sizes: &[usize],
        strict: bool,
        rng: &mut R,
    ) -> Option<Vec<Vec<CompetitorId>>> {
        let mut order = competitors.to_vec();
        order.shuffle(rng);
        // Largest teams first: they have the fewest tables left to choose from.
        order.sort_by_key(|&id| std::cmp::Reverse(self.policy.team_size_of(id)));

        let mut tables: Vec<Vec<CompetitorId>> = table_sizes
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect();

        for candidate in order {
            // (cost, open seats, table index)
            let mut choice: Option<(u64, usize, usize)> = None;

            for (idx, table) in tables.iter().enumerate() {
                let open = table_sizes[idx].saturating_sub(table.len());
                if open == 0 {
                    continue;
                }
                if strict && self.policy.collides(candidate, table) {
                    continue;
                }

                let cost = self.cost_against(candidate, table, None);
                let better = match choice {
                    None => true,
                    Some((best_cost, best_open, _)) => {
                        cost < best_cost || (cost == best_cost && open > best_open)
                    }
                };
                if better {
                    choice = Some((cost, open, idx));
                }
            }

            let (_, _, idx) = choice?;
            tables[idx].push(candidate);
        }

        Some(tables)
    }

    /// Swap competitors between tables while any swap lowers the total cost
    fn improve_by_swaps(&self, tables: &mut [Vec<CompetitorId>]) {
        for _ in 0..self.config.swap_passes {
            let mut improved = false;

            for i in 0..tables.len() {
                for j in (i + 1)..tables.len() {
                    for a_idx in 0..tables[i].len() {
                        for b_idx in 0..tables[j].len() {
                            let a = tables[i][a_idx];
                            let b = tables[j][b_idx];

                            if self.strict_teams
                                && (self.collides_against(a, &tables[j], b)
                                    || self.collides_against(b, &tables[i], a))
                            {
                                continue;
                            }

                            let before = self.cost_against(a, &tables[i], None)
                                + self.cost_against(b, &tables[j], None);
                            let after = self.cost_against(a, &tables[j], Some(b))
                                + self.cost_against(b, &tables[i], Some(a));

                            if after < before {
                                tables[i][a_idx] = b;
                                tables[j][b_idx] = a;
                                improved = true;
                            }
                        }
                    }
                }
            }

            if !improved {
                break;
            }
        }
    }
}
