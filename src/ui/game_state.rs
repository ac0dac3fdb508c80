//! Game state management for the Kalah GUI

use std::fmt;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use super::theme::{BANNER_DURATION, FLASH_DURATION, SOW_STEP};
use crate::rules::{apply_move, is_valid_move, winner};
use crate::{AIEngine, Board, BoardShape, KalahResult, MoveRecord, MoveResult, Outcome, Player};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Two humans on one screen
    HumanVsHuman,
    /// Human plays `human`, the engine plays the other side
    HumanVsAi { human: Player },
    /// Engine on both sides
    AiVsAi,
}

impl PlayMode {
    /// True when the engine moves for `player`
    pub fn is_ai(self, player: Player) -> bool {
        match self {
            PlayMode::HumanVsHuman => false,
            PlayMode::HumanVsAi { human } => player != human,
            PlayMode::AiVsAi => true,
        }
    }
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::HumanVsAi {
            human: Player::Zero,
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::HumanVsHuman => f.write_str("Human vs Human"),
            PlayMode::HumanVsAi { human } => write!(f, "Human vs AI - You: {human}"),
            PlayMode::AiVsAi => f.write_str("AI vs AI"),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<KalahResult<MoveResult>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Stones of the last move dropping into their slots one by one
pub struct SowingAnimation {
    /// Slot counts before the move
    before: Vec<u32>,
    pit: usize,
    sown_slots: Vec<usize>,
    start: Instant,
}

impl SowingAnimation {
    fn new(before: &Board, record: &MoveRecord) -> Self {
        Self {
            before: before.slots().to_vec(),
            pit: record.pit,
            sown_slots: record.sown_slots(before),
            start: Instant::now(),
        }
    }

    /// Stones dropped so far
    pub fn revealed(&self) -> usize {
        let steps = self.start.elapsed().as_millis() / SOW_STEP.as_millis().max(1);
        (steps as usize).min(self.sown_slots.len())
    }

    pub fn is_complete(&self) -> bool {
        self.revealed() == self.sown_slots.len()
    }

    /// Slot counts to draw for the current frame
    pub fn frame_counts(&self) -> Vec<u32> {
        let mut counts = self.before.clone();
        counts[self.pit] = 0;
        for &slot in &self.sown_slots[..self.revealed()] {
            counts[slot] += 1;
        }
        counts
    }

    /// Slot that received the most recent stone
    pub fn current_slot(&self) -> Option<usize> {
        self.revealed()
            .checked_sub(1)
            .map(|i| self.sown_slots[i])
    }
}

/// Pit or store flashing after a capture
#[derive(Debug, Clone, Copy)]
pub struct PitFlash {
    pub slot: usize,
    /// Gained stones (store) or lost them (captured pit)
    pub gain: bool,
    start: Instant,
}

impl PitFlash {
    fn new(slot: usize, gain: bool) -> Self {
        Self {
            slot,
            gain,
            start: Instant::now(),
        }
    }

    /// 1.0 right after the event, fading to 0.0
    pub fn intensity(&self) -> f32 {
        1.0 - (self.start.elapsed().as_secs_f32() / FLASH_DURATION.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    ExtraTurn,
    Capture { banked: u32 },
}

/// Short message over the board after a special move
#[derive(Debug, Clone, Copy)]
pub struct Banner {
    pub kind: BannerKind,
    start: Instant,
}

impl Banner {
    pub fn text(&self) -> String {
        match self.kind {
            BannerKind::ExtraTurn => "Extra Turn!".to_string(),
            BannerKind::Capture { banked } => format!("Capture! +{banked}"),
        }
    }

    /// 1.0 while fresh, fading to 0.0
    pub fn alpha(&self) -> f32 {
        1.0 - (self.start.elapsed().as_secs_f32() / BANNER_DURATION.as_secs_f32()).min(1.0)
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: PlayMode,
    pub ai_depth: u32,
    pub last_move: Option<MoveRecord>,
    pub move_history: Vec<MoveRecord>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub animation: Option<SowingAnimation>,
    pub flashes: Vec<PitFlash>,
    pub banner: Option<Banner>,
    pub message: Option<String>,
    initial: Board,
}

impl GameState {
    pub fn new(shape: BoardShape, mode: PlayMode, ai_depth: u32) -> KalahResult<Self> {
        let board = Board::new(shape)?;
        Ok(Self {
            initial: board.clone(),
            board,
            mode,
            ai_depth,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            animation: None,
            flashes: Vec::new(),
            banner: None,
            message: None,
        })
    }

    /// Start over on the same board shape; a running AI search is dropped.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.animation = None;
        self.flashes.clear();
        self.banner = None;
        self.message = None;
    }

    /// Start over with another mode
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Result once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        winner(&self.board)
    }

    pub fn is_human_turn(&self) -> bool {
        !self.mode.is_ai(self.current_player())
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_ai(self.current_player())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether a click on `pit` would be accepted right now
    pub fn can_play(&self, pit: usize) -> bool {
        self.outcome().is_none()
            && !self.is_animating()
            && !self.is_ai_thinking()
            && self.is_human_turn()
            && is_valid_move(&self.board, pit)
    }

    /// Human move on `pit`
    pub fn try_play(&mut self, pit: usize) -> Result<(), String> {
        if self.outcome().is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_animating() {
            return Err("Wait for the stones to settle".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let (next, record) = apply_move(&self.board, pit).map_err(|e| e.to_string())?;
        self.execute_move(next, record);
        Ok(())
    }

    /// Install the position after a move and queue its effects
    fn execute_move(&mut self, next: Board, record: MoveRecord) {
        self.animation = Some(SowingAnimation::new(&self.board, &record));

        if let Some(capture) = record.capture {
            let store = next.store_index(record.mover);
            self.flashes.push(PitFlash::new(capture.opposite, false));
            self.flashes.push(PitFlash::new(capture.pit, false));
            self.flashes.push(PitFlash::new(store, true));
            self.banner = Some(Banner {
                kind: BannerKind::Capture {
                    banked: capture.banked(),
                },
                start: Instant::now(),
            });
        } else if record.extra_turn {
            self.flashes.push(PitFlash::new(record.last_slot, true));
            self.banner = Some(Banner {
                kind: BannerKind::ExtraTurn,
                start: Instant::now(),
            });
        }

        self.board = next;
        self.last_move = Some(record.clone());
        self.move_history.push(record);
        self.move_timer.stop();
        self.move_timer.start();
        self.message = None;
    }

    /// Counts to draw this frame (mid-animation or final)
    pub fn display_counts(&self) -> Vec<u32> {
        match &self.animation {
            Some(animation) => animation.frame_counts(),
            None => self.board.slots().to_vec(),
        }
    }

    /// Drop finished animations, flashes and banners
    pub fn tick(&mut self) {
        if self.animation.as_ref().is_some_and(SowingAnimation::is_complete) {
            self.animation = None;
        }
        self.flashes.retain(|flash| flash.intensity() > 0.0);
        if self.banner.is_some_and(|banner| banner.alpha() <= 0.0) {
            self.banner = None;
        }
    }

    /// Something is still moving on screen
    pub fn needs_repaint(&self) -> bool {
        self.is_ai_thinking() || self.is_animating() || !self.flashes.is_empty() || self.banner.is_some()
    }

    /// Start AI thinking in a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn()
            || self.is_ai_thinking()
            || self.is_animating()
            || self.outcome().is_some()
        {
            return;
        }

        let board = self.board.clone();
        let depth = self.ai_depth;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_depth(depth);
            let _ = tx.send(engine.get_move_with_stats(&board));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        let played = result.and_then(|move_result| {
            self.last_ai_result = Some(move_result);
            apply_move(&self.board, move_result.best_move)
        });
        match played {
            Ok((next, record)) => self.execute_move(next, record),
            Err(err) => {
                warn!(%err, "AI move failed");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// "Player 1 wins (25 - 23)" once the game is over
    pub fn result_text(&self) -> Option<String> {
        self.outcome().map(|outcome| {
            format!(
                "{outcome} ({} - {})",
                self.board.store(Player::Zero),
                self.board.store(Player::One)
            )
        })
    }
}
