//! Kalah GUI
//!
//! A graphical interface for playing Kalah against the engine or another
//! player.
//!
//! ```text
//! kalah --mode human-vs-ai --human-second --depth 7
//! ```

use std::error::Error;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kalah::config::KalahConfig;
use kalah::engine::DEFAULT_DEPTH;
use kalah::ui::{GameState, KalahApp, PlayMode};
use kalah::{BoardShape, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

#[derive(Debug, Parser)]
#[command(name = "kalah", about = "Play Kalah against the alpha-beta engine")]
struct Args {
    /// Who plays which side
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// In human-vs-ai mode, let the engine move first
    #[arg(long)]
    human_second: bool,

    /// Engine search depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Pits per side
    #[arg(long, default_value_t = 6)]
    pits: usize,

    /// Starting stones per pit
    #[arg(long, default_value_t = 4)]
    stones: u32,
}

impl Args {
    fn play_mode(&self) -> PlayMode {
        match self.mode {
            Mode::HumanVsHuman => PlayMode::HumanVsHuman,
            Mode::HumanVsAi if self.human_second => PlayMode::HumanVsAi { human: Player::One },
            Mode::HumanVsAi => PlayMode::HumanVsAi { human: Player::Zero },
            Mode::AiVsAi => PlayMode::AiVsAi,
        }
    }

    fn game_state(&self) -> Result<GameState, Box<dyn Error>> {
        let config = KalahConfig {
            shape: BoardShape::new(self.pits, self.stones),
            depths: [self.depth; 2],
            weights: None,
        };
        config.validate()?;
        Ok(GameState::new(config.shape, self.play_mode(), self.depth)?)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let state = args.game_state()?;
    info!(mode = %state.mode, depth = args.depth, pits = args.pits, stones = args.stones, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 640.0])
            .with_min_inner_size([800.0, 480.0])
            .with_title("Kalah"),
        ..Default::default()
    };

    eframe::run_native(
        "Kalah",
        options,
        Box::new(|cc| Ok(Box::new(KalahApp::new(cc, state)))),
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(&args).inspect_err(|err| error!(%err, "kalah exited with an error"))
}
