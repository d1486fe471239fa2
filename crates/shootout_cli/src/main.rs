//! Shootout CLI
//!
//! 헤드리스 승부차기 실행기 (자동 플레이어 vs CPU)

mod autoplay;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use autoplay::AutoHuman;
use shootout_core::{Difficulty, EngineConfig, MatchConfig, MatchEngine, Verdict};

/// Upper bound on ticks per match before giving up
const TICK_LIMIT: u64 = 5_000_000;

#[derive(Parser)]
#[command(name = "shootout")]
#[command(version, about = "Headless penalty shootout runner", long_about = None)]
struct Cli {
    /// Debug-level logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and print the event log
    Play {
        /// easy | normal | hard
        #[arg(long, default_value = "normal")]
        difficulty: Difficulty,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Print the final snapshot as JSON instead of the event log
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Play many quick matches and print statistics
    Batch {
        #[arg(long, default_value = "normal")]
        difficulty: Difficulty,

        /// Seed of the first match; match i uses seed + i
        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, default_value_t = 100)]
        matches: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play { difficulty, seed, json } => play(difficulty, seed, json),
        Commands::Batch { difficulty, seed, matches } => batch(difficulty, seed, matches),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Drive `engine` to the end. `on_tick` sees the engine after every tick.
fn run_to_end(
    engine: &mut MatchEngine,
    human: &mut AutoHuman,
    mut on_tick: impl FnMut(&mut MatchEngine),
) -> Result<()> {
    while !engine.state().is_finished() {
        if engine.state().tick >= TICK_LIMIT {
            bail!("match did not finish within {TICK_LIMIT} ticks");
        }
        human.act(engine);
        engine.advance_tick();
        on_tick(engine);
    }
    Ok(())
}

fn play(difficulty: Difficulty, seed: u64, json: bool) -> Result<()> {
    let mut engine = MatchEngine::new(MatchConfig::new(difficulty, seed));
    let mut human = AutoHuman::new(seed.wrapping_add(1));

    run_to_end(&mut engine, &mut human, |engine| {
        for event in engine.drain_events() {
            if !json {
                println!("{}", event.describe());
            }
        }
    })?;

    if json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())
            .context("failed to serialize final snapshot")?;
        println!("{snapshot}");
        return Ok(());
    }

    let state = engine.state();
    if let Some(message) = engine.outcome_message() {
        println!();
        println!("{message}");
    }
    println!(
        "Final: Player {} - {} CPU ({}, {} ticks)",
        state.human_score,
        state.computer_score,
        engine.difficulty_label(),
        state.tick
    );
    Ok(())
}

#[derive(Debug, Default)]
struct BatchStats {
    human_wins: u32,
    computer_wins: u32,
    draws: u32,
    sudden_deaths: u32,
    total_ticks: u64,
    longest_sudden_death: u32,
}

fn batch(difficulty: Difficulty, seed: u64, matches: u32) -> Result<()> {
    if matches == 0 {
        bail!("--matches must be at least 1");
    }
    let config = EngineConfig::quick();
    let mut stats = BatchStats::default();

    for i in 0..matches {
        let match_seed = seed.wrapping_add(u64::from(i));
        let match_config = MatchConfig::new(difficulty, match_seed);
        let mut engine = MatchEngine::with_config(config.clone(), match_config)
            .context("invalid engine config")?;
        let mut human = AutoHuman::new(match_seed.wrapping_add(1));
        run_to_end(&mut engine, &mut human, |engine| {
            engine.drain_events();
        })
        .with_context(|| format!("match {i} (seed {match_seed})"))?;

        let state = engine.state();
        match engine.result().map(|r| r.verdict) {
            Some(Verdict::HumanWins) => stats.human_wins += 1,
            Some(Verdict::ComputerWins) => stats.computer_wins += 1,
            Some(Verdict::Draw) | None => stats.draws += 1,
        }
        if state.is_sudden_death {
            stats.sudden_deaths += 1;
            stats.longest_sudden_death = stats.longest_sudden_death.max(state.sudden_death_round);
        }
        stats.total_ticks += state.tick;
        debug!(
            match_index = i,
            seed = match_seed,
            human = state.human_score,
            computer = state.computer_score,
            "match done"
        );
    }

    info!(matches, difficulty = difficulty.label(), "batch finished");

    let pct = |n: u32| f64::from(n) * 100.0 / f64::from(matches);
    println!("Difficulty:      {}", difficulty.label());
    println!("Matches:         {matches}");
    println!("Player wins:     {} ({:.1}%)", stats.human_wins, pct(stats.human_wins));
    println!("CPU wins:        {} ({:.1}%)", stats.computer_wins, pct(stats.computer_wins));
    println!("Draws:           {}", stats.draws);
    println!("Sudden death:    {} ({:.1}%)", stats.sudden_deaths, pct(stats.sudden_deaths));
    println!("Longest SD:      {} rounds", stats.longest_sudden_death);
    println!("Avg ticks/match: {:.1}", stats.total_ticks as f64 / f64::from(matches));
    Ok(())
}
