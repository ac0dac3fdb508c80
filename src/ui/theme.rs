//! Theme constants for the Kalah GUI

use std::time::Duration;

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(181, 128, 76);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(120, 78, 40);
pub const PIT_FILL: Color32 = Color32::from_rgb(140, 94, 52);
pub const PIT_ACTIVE: Color32 = Color32::from_rgb(160, 112, 60);
pub const PIT_HOVER: Color32 = Color32::from_rgb(196, 150, 92);
pub const STORE_FILL: Color32 = Color32::from_rgb(128, 84, 45);
pub const ACTIVE_RING: Color32 = Color32::from_rgb(255, 214, 102);

// Stones
pub const STONE: Color32 = Color32::from_rgb(238, 232, 220);
pub const STONE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 50);
pub const COUNT_TEXT: Color32 = Color32::from_rgb(255, 248, 235);

// Move effects
pub const FLASH_GAIN: Color32 = Color32::from_rgb(50, 220, 80);
pub const FLASH_LOSS: Color32 = Color32::from_rgb(220, 80, 60);
pub const LAST_SOWN: Color32 = Color32::from_rgb(255, 230, 90);
pub const BANNER_EXTRA_TURN: Color32 = Color32::from_rgb(255, 230, 90);
pub const BANNER_CAPTURE: Color32 = Color32::from_rgb(230, 70, 60);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const CENTRAL_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Player accents
pub const PLAYER_ONE_ACCENT: Color32 = Color32::from_rgb(90, 160, 230);
pub const PLAYER_TWO_ACCENT: Color32 = Color32::from_rgb(230, 140, 80);

// Status colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIT_RADIUS_RATIO: f32 = 0.42;
pub const STONE_RADIUS: f32 = 4.0;
/// Stones drawn individually before falling back to the number alone
pub const MAX_DRAWN_STONES: u32 = 24;

// Timings
pub const SOW_STEP: Duration = Duration::from_millis(180);
pub const FLASH_DURATION: Duration = Duration::from_millis(1000);
pub const BANNER_DURATION: Duration = Duration::from_millis(1200);

/// Accent color of a player's side
pub fn player_accent(player: crate::Player) -> Color32 {
    match player {
        crate::Player::Zero => PLAYER_ONE_ACCENT,
        crate::Player::One => PLAYER_TWO_ACCENT,
    }
}

/// Linear blend from `a` (t = 0) to `b` (t = 1)
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(channel(a.r(), b.r()), channel(a.g(), b.g()), channel(a.b(), b.b()))
}
