//! Command-line front end for the tournament draw engine.
//!
//! Reads a JSON request, runs the draw or placement computation and writes
//! the JSON result to stdout or a file. Logs go to stderr.

mod config;
mod request;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Error};
use config::{CliConfig, ConfigError, Overrides};
use log::{info, warn};
use pico_args::Arguments;
use rand::{Rng, SeedableRng, rngs::StdRng};
use request::{DrawRequest, DrawResponse, EntryResult, PlacementRequest, PlacementResponse};
use tourney_draw::{
    DrawConfig, PlacementInput, PointsEntry, build_placements_from_points, plan_category_draw,
    draw::TeamSeparationPolicy, resolve_placement_for_save, scoring::resolve_points_for_save,
};

const HELP: &str = "\
Draw tournament tables and compute placements

USAGE:
  td_cli draw --input FILE [OPTIONS]
  td_cli placements --input FILE [OPTIONS]

OPTIONS:
  --input        FILE     JSON request file
  --output       FILE     Write the JSON result here instead of stdout
  --seed         N        Seed for a reproducible draw  [default: env DRAW_SEED or random]
  --max-tables   N        Tables per round limit        [default: env DRAW_MAX_TABLES or 25]
  --rounds       N        Rounds per block              [default: env DRAW_ROUNDS_PER_BLOCK or 3]
  --attempts     N        Retry budget per round        [default: env DRAW_MAX_ATTEMPTS or 200]
  --swap-passes  N        Swap passes per attempt       [default: env DRAW_SWAP_PASSES or 8]

FLAGS:
  -h, --help              Print help information

ENVIRONMENT:
  DRAW_TABLE_SIZE         Preferred seats per table (default 4)
  RUST_LOG                Log filter (default info)
";

struct Args {
    command: String,
    input: PathBuf,
    output: Option<PathBuf>,
    overrides: Overrides,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let Some(command) = pargs.subcommand()? else {
        print!("{HELP}");
        std::process::exit(2);
    };

    let args = Args {
        command,
        input: pargs
            .opt_value_from_str("--input")?
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "--input".to_string(),
                hint: "Pass the JSON request file to read".to_string(),
            })?,
        output: pargs.opt_value_from_str("--output")?,
        overrides: Overrides {
            max_tables: pargs.opt_value_from_str("--max-tables")?,
            rounds_per_block: pargs.opt_value_from_str("--rounds")?,
            max_attempts: pargs.opt_value_from_str("--attempts")?,
            swap_passes: pargs.opt_value_from_str("--swap-passes")?,
            seed: pargs.opt_value_from_str("--seed")?,
        },
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = CliConfig::from_env(args.overrides)?;
    config.validate()?;

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let output = match args.command.as_str() {
        "draw" => {
            let request: DrawRequest =
                serde_json::from_str(&raw).context("Invalid draw request")?;
            let response = match config.seed {
                Some(seed) => {
                    info!("Drawing with seed {seed}");
                    run_draw(&request, &config.draw, &mut StdRng::seed_from_u64(seed))?
                }
                None => run_draw(&request, &config.draw, &mut rand::rng())?,
            };
            serde_json::to_string_pretty(&response)?
        }
        "placements" => {
            let request: PlacementRequest =
                serde_json::from_str(&raw).context("Invalid placement request")?;
            serde_json::to_string_pretty(&run_placements(&request)?)?
        }
        other => anyhow::bail!("Unknown command '{other}', expected 'draw' or 'placements'"),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn run_draw<R: Rng + ?Sized>(
    request: &DrawRequest,
    config: &DrawConfig,
    rng: &mut R,
) -> Result<DrawResponse, Error> {
    let mut plans = Vec::with_capacity(request.categories.len());

    for entry in &request.categories {
        info!(
            "Drawing category {} ({}) with {} block(s)",
            entry.category.id,
            entry.category.name,
            entry.blocks.len()
        );
        let plan = plan_category_draw(
            &entry.category,
            &entry.competitors,
            &entry.blocks,
            &request.games,
            config,
            rng,
        )
        .with_context(|| format!("Failed to draw category {}", entry.category.id))?;

        let active: Vec<_> = entry
            .competitors
            .iter()
            .filter(|c| c.active)
            .cloned()
            .collect();
        let policy = TeamSeparationPolicy::new(&active);
        for block in &plan.blocks {
            let stats = block.stats(&policy);
            info!(
                "Category {} block {}: max pair count {}, repeated pairs {}, same-team collisions {}",
                entry.category.id,
                block.block_number,
                stats.max_pair_count,
                stats.repeated_pairs,
                stats.same_team_collisions
            );
            if block.used_relaxed_same_team_rule {
                warn!(
                    "Category {} block {}: teammates share tables",
                    entry.category.id,
                    block.block_number
                );
            }
        }
        plans.push(plan);
    }

    Ok(DrawResponse { plans })
}

fn run_placements(request: &PlacementRequest) -> Result<PlacementResponse, Error> {
    let game = &request.game;
    let mut entries = Vec::new();

    for (idx, table) in request.tables.iter().enumerate() {
        // Points rank a table only when every seat reported them.
        let points: Option<Vec<PointsEntry>> = table
            .entries
            .iter()
            .map(|e| e.points.map(|p| PointsEntry::new(e.entry_id, p)))
            .collect();
        let auto = match points {
            Some(points) => Some(
                build_placements_from_points(&points, game.points_order)
                    .with_context(|| format!("Invalid points at table {}", idx + 1))?,
            ),
            None => None,
        };

        for entry in &table.entries {
            let input = PlacementInput {
                scoring_type: game.scoring_type,
                parsed_points: entry.points,
                parsed_placement: entry.placement,
                auto_placement: auto.as_ref().and_then(|a| a.get(&entry.entry_id).copied()),
            };
            entries.push(EntryResult {
                entry_id: entry.entry_id,
                auto_placement: input.auto_placement,
                stored_points: resolve_points_for_save(&input),
                stored_placement: resolve_placement_for_save(&input),
            });
        }
    }

    info!(
        "Resolved {} entr(ies) for game {} ({})",
        entries.len(),
        game.id,
        game.scoring_type
    );
    Ok(PlacementResponse { entries })
}
