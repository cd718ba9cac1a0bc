//! Per-category draw planning across all blocks.

use super::config::DrawConfig;
use super::errors::{DrawError, DrawResult};
use super::pairing::PairingTracker;
use super::plan::{BlockPlan, DrawPlan, RoundPlan, TablePlan};
use super::round::RoundAssignmentEngine;
use super::table_sizes::build_round_table_sizes;
use super::team_policy::TeamSeparationPolicy;
use crate::roster::{Block, Category, Competitor, CompetitorId, Game, GameId};
use log::{info, warn};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Draw every block of a category.
///
/// Inactive competitors are ignored. Each block gets a fresh pairing tracker,
/// so pairings never carry over from one block to the next. Every round seats
/// every active competitor exactly once.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, when a competitor or
/// block belongs to another category or is listed twice, when a block
/// references a game missing from `games`, or when the category has fewer
/// active competitors than one table needs.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use tourney_draw::draw::{DrawConfig, plan_category_draw};
/// use tourney_draw::roster::{Block, Category, Competitor, Game, PointsOrder, ScoringType};
///
/// let category = Category::new(1, "Open");
/// let competitors: Vec<_> = (1..=8)
///     .map(|id| Competitor::new(id, format!("Player {id}"), "", 1))
///     .collect();
/// let games = vec![Game::new(10, "Mahjong", ScoringType::Both, PointsOrder::Desc)];
/// let blocks = vec![Block::new(1, 1, 10)];
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let plan = plan_category_draw(
///     &category,
///     &competitors,
///     &blocks,
///     &games,
///     &DrawConfig::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(plan.blocks.len(), 1);
/// assert_eq!(plan.blocks[0].rounds.len(), 3);
/// ```
pub fn plan_category_draw<R: Rng + ?Sized>(
    category: &Category,
    competitors: &[Competitor],
    blocks: &[Block],
    games: &[Game],
    config: &DrawConfig,
    rng: &mut R,
) -> DrawResult<DrawPlan> {
    config.validate()?;

    let active = active_competitors(category, competitors)?;
    let active_ids: Vec<CompetitorId> = active.iter().map(|c| c.id).collect();
    check_blocks(category, blocks, games)?;

    if blocks.is_empty() {
        return Ok(DrawPlan {
            category_id: category.id,
            blocks: Vec::new(),
        });
    }

    if active.len() < config.min_competitors() {
        return Err(DrawError::TooFewCompetitors {
            category_id: category.id,
            active: active.len(),
            minimum: config.min_competitors(),
        });
    }

    let policy = TeamSeparationPolicy::new(&active);
    let table_sizes = build_round_table_sizes(active_ids.len(), config);

    let mut block_plans = Vec::with_capacity(blocks.len());
    for block in blocks {
        block_plans.push(plan_block(
            block,
            &active_ids,
            &table_sizes,
            &policy,
            config,
            rng,
        )?);
    }

    let plan = DrawPlan {
        category_id: category.id,
        blocks: block_plans,
    };
    plan.validate(&active_ids, config)?;
    Ok(plan)
}

fn plan_block<R: Rng + ?Sized>(
    block: &Block,
    active_ids: &[CompetitorId],
    table_sizes: &[usize],
    policy: &TeamSeparationPolicy,
    config: &DrawConfig,
    rng: &mut R,
) -> DrawResult<BlockPlan> {
    let strictly_feasible = policy.is_strictly_feasible(table_sizes);
    if !strictly_feasible {
        warn!(
            "Block {}: largest team has {} members for {} tables, same-team rule relaxed",
            block.block_number,
            policy.largest_team_size(),
            table_sizes.len()
        );
    }

    let mut tracker = PairingTracker::new();
    let mut rounds = Vec::with_capacity(config.rounds_per_block as usize);
    let mut collided = false;

    for round_number in 1..=config.rounds_per_block {
        let outcome = RoundAssignmentEngine::new(&mut tracker, policy, config, strictly_feasible)
            .assign(active_ids, table_sizes, rng)?;

        if outcome.exhausted {
            warn!(
                "Block {} round {}: retry budget spent, accepted seating with score {}",
                block.block_number, round_number, outcome.score
            );
        }

        let tables = outcome
            .tables
            .into_iter()
            .enumerate()
            .map(|(idx, competitor_ids)| {
                collided |= policy.collisions(&competitor_ids) > 0;
                TablePlan {
                    table_number: idx as u32 + 1,
                    competitor_ids,
                }
            })
            .collect();

        rounds.push(RoundPlan {
            round_number,
            tables,
        });
    }

    let used_relaxed_same_team_rule = !strictly_feasible || collided;
    info!(
        "Block {}: {} round(s) of {} table(s), max pair count {}, relaxed same-team rule: {}",
        block.block_number,
        rounds.len(),
        table_sizes.len(),
        tracker.max_count(),
        used_relaxed_same_team_rule
    );

    Ok(BlockPlan {
        block_number: block.block_number,
        game_id: block.game_id,
        rounds,
        used_relaxed_same_team_rule,
    })
}

/// Active competitors of the category, rejecting strays and duplicates
fn active_competitors(
    category: &Category,
    competitors: &[Competitor],
) -> DrawResult<Vec<Competitor>> {
    let mut seen = HashSet::new();
    let mut active = Vec::new();

    for competitor in competitors {
        if !seen.insert(competitor.id) {
            return Err(DrawError::DuplicateCompetitor(competitor.id));
        }
        if !competitor.active {
            continue;
        }
        if competitor.category_id != category.id {
            return Err(DrawError::CompetitorCategoryMismatch {
                competitor_id: competitor.id,
                expected: category.id,
                found: competitor.category_id,
            });
        }
        active.push(competitor.clone());
    }

    Ok(active)
}

fn check_blocks(category: &Category, blocks: &[Block], games: &[Game]) -> DrawResult<()> {
    let known_games: HashMap<GameId, &Game> = games.iter().map(|g| (g.id, g)).collect();
    let mut seen = HashSet::new();

    for block in blocks {
        if !seen.insert(block.block_number) {
            return Err(DrawError::DuplicateBlock(block.block_number));
        }
        if block.category_id != category.id {
            return Err(DrawError::BlockCategoryMismatch {
                block_number: block.block_number,
                expected: category.id,
                found: block.category_id,
            });
        }
        if !known_games.contains_key(&block.game_id) {
            return Err(DrawError::UnknownGame {
                block_number: block.block_number,
                game_id: block.game_id,
            });
        }
    }

    Ok(())
}
