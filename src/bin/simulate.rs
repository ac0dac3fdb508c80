//! Headless AI-vs-AI simulator
//!
//! Plays many engine-vs-engine games and reports wins per player, draws and
//! search timings.
//!
//! ```text
//! simulate --games 200 --depth0 5 --depth1 3 --random-openings 4 --seed 7
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;
use tracing_subscriber::EnvFilter;

use kalah::board::Outcome;
use kalah::simulation::{run_simulation, SimulationOptions, SimulationReport};
use kalah::{KalahConfig, Player};

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Simulate AI vs AI Kalah games (headless)")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Search depth for both players
    #[arg(long)]
    depth: Option<u32>,

    /// Search depth for player 1 (moves first), overrides --depth
    #[arg(long)]
    depth0: Option<u32>,

    /// Search depth for player 2, overrides --depth
    #[arg(long)]
    depth1: Option<u32>,

    /// Pits per side
    #[arg(long)]
    pits: Option<usize>,

    /// Starting stones per pit
    #[arg(long)]
    stones: Option<u32>,

    /// Random plies at the start of every game (0 = all games identical)
    #[arg(long, default_value_t = 0)]
    random_openings: u32,

    /// Seed for the opening RNG
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON match configuration; flags above override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn match_config(&self) -> Result<KalahConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => KalahConfig::from_json_file(path)?,
            None => KalahConfig::default(),
        };
        if let Some(pits) = self.pits {
            config.shape.pits_per_side = pits;
        }
        if let Some(stones) = self.stones {
            config.shape.stones_per_pit = stones;
        }
        if let Some(depth) = self.depth {
            config.depths = [depth; 2];
        }
        if let Some(depth) = self.depth0 {
            config.depths[0] = depth;
        }
        if let Some(depth) = self.depth1 {
            config.depths[1] = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &SimulationReport) {
    let percent = |rate: f64| rate * 100.0;
    println!();
    println!(
        "Results after {} games ({} pits x {} stones, depth {} vs {}):",
        report.games,
        report.shape.pits_per_side,
        report.shape.stones_per_pit,
        report.depths[0],
        report.depths[1],
    );
    for player in Player::BOTH {
        println!(
            "  {player} wins : {:>6} ({:>6.2}%)",
            report.wins[player.index()],
            percent(report.win_rate(player)),
        );
    }
    println!(
        "  Draws          : {:>6} ({:>6.2}%)",
        report.draws,
        percent(report.draw_rate())
    );
    println!(
        "  Moves per game : {:>9.1} avg, {} max",
        report.avg_moves(),
        report.max_moves
    );
    for player in Player::BOTH {
        let i = player.index();
        println!(
            "  {player} think: {:>9.3} ms avg, {:.3} ms max over {} moves",
            report.avg_think_ms[i], report.max_think_ms[i], report.searched_moves[i],
        );
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let options = SimulationOptions {
        config: args.match_config()?,
        games: args.games,
        random_openings: args.random_openings,
        seed: args.seed,
    };

    let pb = ProgressBar::new(options.games as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] games {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let report = run_simulation(&options, |_, game| {
        match game.outcome {
            Outcome::Winner(player) => wins[player.index()] += 1,
            Outcome::Draw => draws += 1,
        }
        pb.set_message(format!("P1 {} / P2 {} / draws {}", wins[0], wins[1], draws));
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    run(&args).inspect_err(|err| error!(%err, "simulation failed"))
}
