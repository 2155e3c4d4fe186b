//! pack-flow CLI - drive simulated pack openings from the terminal
//!
//! # Examples
//!
//! ```bash
//! # List the packs in the built-in catalog
//! pack-flow list
//!
//! # Open one pack with a fixed seed
//! pack-flow open --pack elite-collection --seed 42
//!
//! # Rarity histogram over many openings
//! pack-flow simulate --pack freshman-gems --runs 10000
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pack_flow::{
    Catalog, CollectionSummary, DrawRng, FlowConfig, PackFlowController, PackId, Rarity,
    RevealTracker,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pack-flow")]
#[command(about = "Simulate trading-card pack openings", long_about = None)]
struct Cli {
    /// Catalog file (JSON, or TOML by extension). Defaults to the built-in mock catalog.
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available packs
    List,

    /// Open a single pack and print the summary
    Open {
        /// Pack id
        #[arg(short, long)]
        pack: String,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Open a pack many times and report rarity frequencies
    Simulate {
        /// Pack id
        #[arg(short, long)]
        pack: String,

        /// Number of openings
        #[arg(short, long, default_value_t = 1000)]
        runs: usize,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::default_mock(),
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::List => list_command(&catalog, &mut out)?,
        Commands::Open { pack, seed, json } => open_command(catalog, &pack, seed, json, &mut out)?,
        Commands::Simulate { pack, runs, seed } => {
            let report = simulate(catalog, &pack, runs, seed)?;
            report.write_to(&mut out)?;
        }
    }

    Ok(())
}

fn list_command(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for pack in catalog.packs() {
        let guarantee = pack.guarantee_text().unwrap_or_else(|| "No guarantee".to_string());
        writeln!(
            out,
            "{:<20} {:<16} ${:>6.2}  {:<10} {}",
            pack.id,
            pack.name,
            pack.price,
            pack.rarity.label(),
            guarantee
        )?;
    }
    Ok(())
}

fn open_command(
    catalog: Catalog,
    pack: &str,
    seed: Option<u64>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut config = FlowConfig::new();
    config.seed = seed;
    let mut flow = PackFlowController::new(catalog, config)?;

    flow.select_pack_by_id(&PackId::new(pack))
        .with_context(|| format!("cannot open pack '{pack}'"))?;
    let card_count = flow.complete_opening()?.len();

    let mut tracker = RevealTracker::new(card_count);
    for (index, card) in flow.session().drawn_cards().iter().enumerate() {
        tracker.reveal(index);
        if !json {
            writeln!(
                out,
                "[{}/{}] {:<24} {:<4} {:<2} {:<10} {:>5.1} pts {:>4.1} ast {:>4.1} reb",
                tracker.revealed_count(),
                card_count,
                card.player_name,
                card.team,
                card.position,
                card.rarity.label(),
                card.stats.points,
                card.stats.assists,
                card.stats.rebounds,
            )?;
        }
    }

    if tracker.all_revealed() {
        flow.complete_reveal()?;
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, flow.session())?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(summary) = flow.summary() {
        write_summary(&summary, out)?;
    }
    Ok(())
}

fn write_summary(summary: &CollectionSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Cards:       {}", summary.total_cards)?;
    for rarity in Rarity::ALL.iter().rev() {
        writeln!(out, "  {:<10} {}", rarity.label(), summary.count(*rarity))?;
    }
    if let Some(best) = &summary.best_card {
        let stars = "*".repeat(best.rarity.stars().into());
        writeln!(out, "Best pull:   {} ({stars})", best.player_name)?;
    }
    writeln!(out, "Pack cost:   ${:.2}", summary.pack_cost)?;
    writeln!(out, "Value:       ${}", summary.total_value)?;
    writeln!(out, "Profit:      ${:.2}", summary.profit())?;
    Ok(())
}

/// Aggregate results of many openings of one pack.
#[derive(Debug, PartialEq)]
struct SimulationReport {
    pack_name: String,
    runs: usize,
    /// Cards per rarity, indexed like `Rarity::ALL`.
    counts: [usize; 3],
    total_value: u64,
    profitable: usize,
    /// Openings whose draw missed the pack's guarantee.
    guarantee_misses: usize,
}

impl SimulationReport {
    fn cards(&self) -> usize {
        self.counts.iter().sum()
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let cards = self.cards();
        writeln!(out, "{} openings of {} ({} cards)", self.runs, self.pack_name, cards)?;
        for (slot, rarity) in Rarity::ALL.iter().enumerate().rev() {
            let share = if cards == 0 { 0.0 } else { self.counts[slot] as f64 / cards as f64 * 100.0 };
            writeln!(out, "  {:<10} {:>8} ({:>5.1}%)", rarity.label(), self.counts[slot], share)?;
        }
        if self.runs > 0 {
            writeln!(out, "Average value: ${:.2}", self.total_value as f64 / self.runs as f64)?;
            writeln!(out, "Profitable:    {:.1}%", self.profitable as f64 / self.runs as f64 * 100.0)?;
        }
        if self.guarantee_misses > 0 {
            writeln!(out, "Guarantee missed in {} openings", self.guarantee_misses)?;
        }
        Ok(())
    }
}

fn simulate(catalog: Catalog, pack: &str, runs: usize, seed: Option<u64>) -> Result<SimulationReport> {
    let pack_id = PackId::new(pack);
    let selected = catalog
        .pack(&pack_id)
        .cloned()
        .with_context(|| format!("unknown pack '{pack}'"))?;

    if !catalog.can_guarantee(&selected) {
        tracing::warn!(pack = %pack_id, "card pool cannot satisfy this pack's guarantee");
    }

    let mut root = seed.map_or_else(DrawRng::from_entropy, DrawRng::new);
    let mut report = SimulationReport {
        pack_name: selected.name.clone(),
        runs,
        counts: [0; 3],
        total_value: 0,
        profitable: 0,
        guarantee_misses: 0,
    };

    for _ in 0..runs {
        let run_seed = root.fork().seed();
        let mut flow = PackFlowController::with_seed(catalog.clone(), run_seed)?;
        flow.select_pack(selected.clone())?;
        flow.complete_opening()?;
        flow.complete_reveal()?;

        let summary = flow.summary().context("flow did not reach summary")?;
        for (slot, rarity) in Rarity::ALL.iter().enumerate() {
            report.counts[slot] += summary.count(*rarity);
        }
        report.total_value += u64::from(summary.total_value);
        if summary.is_profitable() {
            report.profitable += 1;
        }

        let met = selected
            .rarity
            .guarantee()
            .map_or(true, |min| flow.session().drawn_cards().iter().any(|c| c.meets(min)));
        if !met {
            report.guarantee_misses += 1;
        }
    }

    Ok(report)
}
