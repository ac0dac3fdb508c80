//! Headless AI-vs-AI matches
//!
//! Plays complete games between two [`AIEngine`]s and aggregates the results.
//! An optional number of random opening plies (from a seeded RNG) makes the
//! games of a match differ; without them every game of a match is identical.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::board::{BoardShape, Outcome, Player};
use crate::config::KalahConfig;
use crate::engine::AIEngine;
use crate::error::KalahResult;
use crate::rules::{legal_moves, make_move, winner};

/// Match settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    pub config: KalahConfig,
    pub games: usize,
    /// Plies at the start of each game chosen uniformly at random
    pub random_openings: u32,
    pub seed: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            config: KalahConfig::default(),
            games: 100,
            random_openings: 0,
            seed: 0,
        }
    }
}

/// One move of a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveLog {
    pub player: Player,
    pub pit: usize,
    pub extra_turn: bool,
    /// Picked at random as an opening ply instead of by search
    pub random: bool,
    /// Time spent choosing the move
    pub elapsed: Duration,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub moves: Vec<MoveLog>,
    pub outcome: Outcome,
    /// Final stores, indexed by player
    pub stores: [u32; 2],
}

/// Play one game to the end.
///
/// The first `random_openings` plies are drawn from `rng`, the rest come from
/// an engine per player configured by `config`.
pub fn play_game(
    config: &KalahConfig,
    rng: &mut impl Rng,
    random_openings: u32,
) -> KalahResult<GameRecord> {
    config.validate()?;
    let mut board = config.new_board()?;
    let mut engines = Player::BOTH.map(|player| AIEngine::with_config(config.search_config(player, &board)));
    let mut moves = Vec::new();

    loop {
        if let Some(outcome) = winner(&board) {
            let stores = Player::BOTH.map(|player| board.store(player));
            debug!(%outcome, moves = moves.len(), ?stores, "game finished");
            return Ok(GameRecord {
                moves,
                outcome,
                stores,
            });
        }

        let player = board.current_player();
        let start = Instant::now();
        let random = moves.len() < random_openings as usize;
        let pit = if random {
            let legal = legal_moves(&board);
            legal[rng.random_range(0..legal.len())]
        } else {
            engines[player.index()].get_move_with_stats(&board)?.best_move
        };
        let elapsed = start.elapsed();

        let record = make_move(&mut board, pit)?;
        moves.push(MoveLog {
            player,
            pit,
            extra_turn: record.extra_turn,
            random,
            elapsed,
        });
    }
}

/// Aggregated match results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub shape: BoardShape,
    pub depths: [u32; 2],
    pub games: usize,
    /// Wins indexed by player
    pub wins: [usize; 2],
    pub draws: usize,
    pub total_moves: usize,
    pub max_moves: usize,
    /// Searched (non-random) moves per player
    pub searched_moves: [usize; 2],
    pub avg_think_ms: [f64; 2],
    pub max_think_ms: [f64; 2],
    #[serde(skip)]
    total_think: [Duration; 2],
}

impl SimulationReport {
    pub fn new(config: &KalahConfig) -> Self {
        Self {
            shape: config.shape,
            depths: config.depths,
            games: 0,
            wins: [0; 2],
            draws: 0,
            total_moves: 0,
            max_moves: 0,
            searched_moves: [0; 2],
            avg_think_ms: [0.0; 2],
            max_think_ms: [0.0; 2],
            total_think: [Duration::ZERO; 2],
        }
    }

    /// Fold one game into the totals.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            Outcome::Winner(player) => self.wins[player.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_moves += game.moves.len();
        self.max_moves = self.max_moves.max(game.moves.len());

        for log in game.moves.iter().filter(|log| !log.random) {
            let i = log.player.index();
            let ms = log.elapsed.as_secs_f64() * 1000.0;
            self.searched_moves[i] += 1;
            self.total_think[i] += log.elapsed;
            self.max_think_ms[i] = self.max_think_ms[i].max(ms);
        }
        for i in 0..2 {
            if self.searched_moves[i] > 0 {
                self.avg_think_ms[i] =
                    self.total_think[i].as_secs_f64() * 1000.0 / self.searched_moves[i] as f64;
            }
        }
    }

    /// Share of games won by `player`, 0 when no game was played
    pub fn win_rate(&self, player: Player) -> f64 {
        ratio(self.wins[player.index()], self.games)
    }

    pub fn draw_rate(&self) -> f64 {
        ratio(self.draws, self.games)
    }

    pub fn avg_moves(&self) -> f64 {
        ratio(self.total_moves, self.games)
    }
}

#[inline]
fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Play `options.games` games and aggregate them.
///
/// `on_game_done` is called after each game with its zero-based index.
pub fn run_simulation(
    options: &SimulationOptions,
    mut on_game_done: impl FnMut(usize, &GameRecord),
) -> KalahResult<SimulationReport> {
    options.config.validate()?;
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut report = SimulationReport::new(&options.config);

    info!(
        games = options.games,
        depths = ?options.config.depths,
        pits = options.config.shape.pits_per_side,
        stones = options.config.shape.stones_per_pit,
        random_openings = options.random_openings,
        seed = options.seed,
        "simulation started"
    );

    for game in 0..options.games {
        let record = play_game(&options.config, &mut rng, options.random_openings)?;
        report.record(&record);
        on_game_done(game, &record);
    }

    info!(
        wins = ?report.wins,
        draws = report.draws,
        avg_moves = report.avg_moves(),
        "simulation finished"
    );
    Ok(report)
}
