mod config;
mod oracle;
mod output;
mod parse;
mod store;

use clap::Parser;
use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tierlist_core::{session, sorter, Item, Progress, Ranking, ScoringOptions, ThresholdBand};

use crate::oracle::TerminalOracle;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "tierlist", version, about = "Build album tier lists from head-to-head comparisons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank albums head-to-head, then score the order by percentile bands
    Rank(RankArgs),
    /// Re-apply scoring bands to a previously exported ranking CSV
    Rescore(RescoreArgs),
    /// Create a default config file at ~/.config/tierlist/config.toml
    Init,
}

#[derive(clap::Args)]
struct ScoringArgs {
    /// Percentile bands as bound:score pairs, ascending, ending at 100%,
    /// e.g. "1%:10, 10%:9.5, 25%:8.75, 75%:7.5, 100%:6"
    #[arg(long)]
    bands: Option<String>,

    /// Rounding granularity for scores (default 0.25, halfway rounds up)
    #[arg(long)]
    increment: Option<f64>,

    /// Clamp scores to at least this value before rounding
    #[arg(long)]
    clamp_min: Option<f64>,

    /// Clamp scores to at most this value before rounding
    #[arg(long)]
    clamp_max: Option<f64>,

    /// Interpolate linearly between band boundaries instead of stepping
    #[arg(long)]
    interpolate: bool,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write the results to a CSV file (reloadable with `rescore`)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Path to config file (default: ~/.config/tierlist/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
struct RankArgs {
    /// File with albums: JSON array (objects or names) or one name per line
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline album name (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    #[command(flatten)]
    scoring: ScoringArgs,
}

#[derive(Parser)]
struct RescoreArgs {
    /// Previously exported results CSV
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    scoring: ScoringArgs,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Rescore(args) => run_rescore(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default bands, increment, etc.");
        }
    }
}

/// Merge CLI scoring flags with the config file (CLI wins) into validated-
/// enough inputs for the engine; the engine does the structural validation.
fn resolve_scoring(scoring: &ScoringArgs) -> (Vec<ThresholdBand>, ScoringOptions) {
    let config_path = scoring.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let bands = match scoring.bands.as_deref().or(cfg.bands.as_deref()) {
        Some(spec) => parse::parse_bands(spec).unwrap_or_else(|e| bail(e)),
        None => parse::default_bands(),
    };

    let increment = scoring.increment.or(cfg.increment).unwrap_or(0.25);
    let clamp = match (
        scoring.clamp_min.or(cfg.clamp_min),
        scoring.clamp_max.or(cfg.clamp_max),
    ) {
        (Some(min), Some(max)) => Some((min, max)),
        (None, None) => None,
        _ => bail("clamping requires both --clamp-min and --clamp-max"),
    };
    let interpolate = scoring.interpolate || cfg.interpolate.unwrap_or(false);

    (
        bands,
        ScoringOptions {
            increment,
            clamp,
            interpolate,
        },
    )
}

/// Load albums from --items file and/or inline --item flags.
fn load_items(args: &RankArgs) -> Vec<Item> {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse::parse_items(&content).unwrap_or_else(|e| bail(e));
    }

    items.extend(args.inline_items.iter().map(|name| Item::new(name, "")));

    if items.is_empty() {
        if io::stdin().is_terminal() {
            bail("No albums provided. Use --items <file> or --item <name>.");
        }
        // Comparisons are answered on stdin, so albums cannot also arrive there.
        bail("Albums cannot be piped via stdin (stdin answers the comparisons). Use --items <file>.");
    }

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert((item.name.clone(), item.artist.clone())) {
            bail(format!("Duplicate album \"{}\": keys must be unique", item.name));
        }
    }
    items
}

fn run_rank(args: RankArgs) {
    let (bands, options) = resolve_scoring(&args.scoring);
    let items = load_items(&args);

    let estimated = sorter::estimate_comparisons(items.len());
    if args.scoring.verbose {
        eprintln!(
            "Ranking {} albums, at most {} comparisons",
            items.len(),
            estimated,
        );
    }

    let stdin = io::stdin();
    let mut oracle = TerminalOracle::new(stdin.lock(), io::stdout(), estimated);

    let mut log_progress = |p: Progress| {
        eprintln!("  progress: {}/{} comparisons", p.completed, p.estimated_total);
    };
    let on_progress: Option<&mut dyn FnMut(Progress)> = if args.scoring.verbose {
        Some(&mut log_progress)
    } else {
        None
    };

    let results = session::run(&items, &mut oracle, &bands, &options, on_progress)
        .unwrap_or_else(|e| bail(e));

    if args.scoring.json {
        output::print_json(&results, Some(oracle.answered()));
    } else {
        output::print_table(&results, Some(oracle.answered()));
    }

    finish_export(&args.scoring, &results);
}

fn run_rescore(args: RescoreArgs) {
    let (bands, options) = resolve_scoring(&args.scoring);

    let entries = store::load_ranking(&args.input).unwrap_or_else(|e| bail(e));
    if args.scoring.verbose {
        eprintln!("Loaded {} ranked albums from {}", entries.len(), args.input.display());
    }
    let ranking = Ranking::from_ranked(entries).unwrap_or_else(|e| bail(e));

    let results = session::rescore(&ranking, &bands, &options).unwrap_or_else(|e| bail(e));

    if args.scoring.json {
        output::print_json(&results, None);
    } else {
        output::print_table(&results, None);
    }

    finish_export(&args.scoring, &results);
}

fn finish_export(scoring: &ScoringArgs, results: &[tierlist_core::ScoredResult]) {
    if let Some(ref path) = scoring.export {
        store::export_csv(path, results).unwrap_or_else(|e| bail(e));
        println!("Wrote {}", path.display());
    }
}
