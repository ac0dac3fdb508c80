//! Board rendering for the Kalah GUI
//!
//! Player 2's row runs along the top from right to left, player 1's row along
//! the bottom from left to right, so sowing goes counter-clockwise. Player 2's
//! store sits on the left, player 1's on the right.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::PitFlash;
use super::theme::*;
use crate::{Board, Player};

/// What to draw besides the stone counts
pub struct BoardOverlay<'a> {
    /// Slot counts for this frame, in the board's flat layout
    pub counts: &'a [u32],
    /// Pits the user may click
    pub clickable: &'a [usize],
    pub flashes: &'a [PitFlash],
    /// Slot that just received a stone
    pub sowing_slot: Option<usize>,
    /// Pit played last
    pub last_pit: Option<usize>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Width of one column (pit or store)
    column_width: f32,
    /// Board drawing area
    board_rect: Rect,
    pits_per_side: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            column_width: 80.0,
            board_rect: Rect::NOTHING,
            pits_per_side: 6,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pit, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<usize> {
        self.pits_per_side = board.pits_per_side();
        let columns = self.pits_per_side as f32 + 2.0;

        let available = ui.available_size();
        let width = (available.x - 20.0).min((available.y - 20.0) * columns / 2.6).max(200.0);
        self.column_width = (width - 2.0 * BOARD_MARGIN) / columns;
        let height = 2.0 * self.column_width + 2.0 * BOARD_MARGIN + 40.0;

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(16), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(16),
            Stroke::new(3.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        self.draw_row_labels(&painter, board.current_player());

        let hovered = response
            .hover_pos()
            .and_then(|pos| self.pit_at(pos))
            .filter(|pit| overlay.clickable.contains(pit));

        for player in Player::BOTH {
            self.draw_store(&painter, board, player, overlay);
            for pit in board.row_range(player) {
                let active = player == board.current_player();
                self.draw_pit(&painter, pit, active, hovered == Some(pit), overlay);
            }
        }

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Board area of the last frame
    pub fn rect(&self) -> Rect {
        self.board_rect
    }

    fn draw_row_labels(&self, painter: &Painter, to_move: Player) {
        let font = FontId::proportional(13.0);
        for player in Player::BOTH {
            let y = match player {
                Player::One => self.board_rect.min.y + 14.0,
                Player::Zero => self.board_rect.max.y - 14.0,
            };
            let color = if player == to_move {
                player_accent(player)
            } else {
                COUNT_TEXT
            };
            painter.text(
                Pos2::new(self.board_rect.center().x, y),
                Align2::CENTER_CENTER,
                player.to_string(),
                font.clone(),
                color,
            );
        }
    }

    fn draw_pit(&self, painter: &Painter, pit: usize, active: bool, hovered: bool, overlay: &BoardOverlay<'_>) {
        let center = self.slot_center(pit);
        let radius = self.column_width * PIT_RADIUS_RATIO;

        let mut fill = if hovered {
            PIT_HOVER
        } else if active {
            PIT_ACTIVE
        } else {
            PIT_FILL
        };
        fill = apply_flash(fill, pit, overlay.flashes);
        painter.circle_filled(center, radius, fill);

        if overlay.sowing_slot == Some(pit) {
            painter.circle_stroke(center, radius + 2.0, Stroke::new(2.5, LAST_SOWN));
        } else if overlay.last_pit == Some(pit) {
            painter.circle_stroke(center, radius + 2.0, Stroke::new(1.5, ACTIVE_RING));
        }

        let count = overlay.counts[pit];
        draw_stones(painter, center, radius * 0.7, count);
        painter.text(
            center + Vec2::new(0.0, radius + 9.0) * if pit > self.pits_per_side { -1.0 } else { 1.0 },
            Align2::CENTER_CENTER,
            count.to_string(),
            FontId::proportional(14.0),
            COUNT_TEXT,
        );
    }

    fn draw_store(&self, painter: &Painter, board: &Board, player: Player, overlay: &BoardOverlay<'_>) {
        let slot = board.store_index(player);
        let center = self.slot_center(slot);
        let size = Vec2::new(self.column_width * 0.8, self.column_width * 1.8);
        let rect = Rect::from_center_size(center, size);

        let fill = apply_flash(STORE_FILL, slot, overlay.flashes);
        painter.rect_filled(rect, CornerRadius::same(24), fill);
        if player == board.current_player() {
            painter.rect_stroke(
                rect,
                CornerRadius::same(24),
                Stroke::new(2.0, player_accent(player)),
                egui::StrokeKind::Outside,
            );
        }
        if overlay.sowing_slot == Some(slot) {
            painter.rect_stroke(
                rect,
                CornerRadius::same(24),
                Stroke::new(2.5, LAST_SOWN),
                egui::StrokeKind::Outside,
            );
        }

        let count = overlay.counts[slot];
        draw_stones(painter, center, size.x * 0.35, count);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            count.to_string(),
            FontId::proportional(26.0),
            COUNT_TEXT,
        );
    }

    /// Screen position of a slot
    ///
    /// Column 0 holds player 2's store and column `p + 1` player 1's. Pit `i`
    /// of player 1 is in column `i + 1`; its opposite pit shares the column.
    pub fn slot_center(&self, slot: usize) -> Pos2 {
        let p = self.pits_per_side;
        let (column, row) = if slot < p {
            (slot + 1, 1)
        } else if slot == p {
            (p + 1, 2)
        } else if slot < 2 * p + 1 {
            (2 * p + 1 - slot, 0)
        } else {
            (0, 2)
        };

        let x = self.board_rect.min.x + BOARD_MARGIN + (column as f32 + 0.5) * self.column_width;
        let top = self.board_rect.min.y + BOARD_MARGIN + 20.0;
        let y = match row {
            0 => top + 0.5 * self.column_width,
            1 => top + 1.5 * self.column_width,
            _ => top + self.column_width,
        };
        Pos2::new(x, y)
    }

    /// Pit under a screen position
    pub fn pit_at(&self, screen_pos: Pos2) -> Option<usize> {
        let radius = self.column_width * PIT_RADIUS_RATIO;
        (0..2 * self.pits_per_side + 1)
            .filter(|&slot| slot != self.pits_per_side)
            .find(|&pit| self.slot_center(pit).distance(screen_pos) <= radius)
    }
}

/// Blend a base color toward the flash color of a slot, if it is flashing
fn apply_flash(base: Color32, slot: usize, flashes: &[PitFlash]) -> Color32 {
    flashes
        .iter()
        .filter(|flash| flash.slot == slot)
        .fold(base, |color, flash| {
            let target = if flash.gain { FLASH_GAIN } else { FLASH_LOSS };
            mix(color, target, flash.intensity())
        })
}

/// Scatter up to `MAX_DRAWN_STONES` stones inside a circle
fn draw_stones(painter: &Painter, center: Pos2, spread: f32, count: u32) {
    const GOLDEN_ANGLE: f32 = 2.399_963;
    let shown = count.min(MAX_DRAWN_STONES);
    for i in 0..shown {
        let r = spread * ((i as f32 + 0.5) / MAX_DRAWN_STONES as f32).sqrt();
        let angle = i as f32 * GOLDEN_ANGLE;
        let pos = center + Vec2::new(r * angle.cos(), r * angle.sin());
        painter.circle_filled(pos + Vec2::new(1.0, 1.0), STONE_RADIUS, STONE_SHADOW);
        painter.circle_filled(pos, STONE_RADIUS, STONE);
    }
}
