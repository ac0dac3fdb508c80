//! Main application for the Kalah GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{BannerKind, GameState, PlayMode};
use super::theme::*;
use crate::rules::legal_moves;
use crate::Player;

/// History entries listed in the side panel
const HISTORY_SHOWN: usize = 8;

/// Main Kalah application
pub struct KalahApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl KalahApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game (Human vs AI - Player 1)", PlayMode::HumanVsAi { human: Player::Zero }),
                        ("New Game (Human vs AI - Player 2)", PlayMode::HumanVsAi { human: Player::One }),
                        ("New Game (Human vs Human)", PlayMode::HumanVsHuman),
                        ("New Game (AI vs AI)", PlayMode::AiVsAi),
                    ];
                    for (label, mode) in modes {
                        if ui.button(label).clicked() {
                            self.state.set_mode(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Reset (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.mode.to_string());
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_stores_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(text) = self.state.result_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &text);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("KALAH").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let shape = self.state.board.shape();
            ui.label(
                RichText::new(format!(
                    "{} pits x {} stones, AI depth {}",
                    shape.pits_per_side, shape.stones_per_pit, self.state.ai_depth
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_player();
            let accent = player_accent(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    (player.index() + 1).to_string(),
                    egui::FontId::proportional(24.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.to_string()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.outcome().is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        let secs = elapsed.as_secs_f32();
                        let color = if secs < 0.5 {
                            TIMER_NORMAL
                        } else if secs < 2.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {secs:.2}s"), color)
                    } else if self.state.is_ai_turn() {
                        ("AI to move".to_string(), TIMER_WARNING)
                    } else {
                        (
                            format!("Your turn {:.1}s", self.state.move_timer.elapsed().as_secs_f32()),
                            TIMER_NORMAL,
                        )
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render the store totals
    fn render_stores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.state.board;
            for player in Player::BOTH {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.to_string()).size(14.0).color(player_accent(player)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}  (+{} on row)",
                                board.store(player),
                                board.row_total(player)
                            ))
                            .size(14.0)
                            .color(TEXT_PRIMARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            btn_frame.show(ui, |ui| {
                let reset = egui::Label::new(RichText::new("Reset").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(reset).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            for record in self.state.move_history.iter().rev().take(HISTORY_SHOWN) {
                let mut line = format!("{}: pit {}", record.mover, record.pit);
                if record.extra_turn {
                    line.push_str(", extra turn");
                }
                if let Some(capture) = record.capture {
                    line.push_str(&format!(", captured {}", capture.banked()));
                }
                ui.label(RichText::new(line).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("Pit {}", result.best_move))
                                    .size(12.0)
                                    .strong()
                                    .color(WIN_HIGHLIGHT),
                            );
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                                ui.label(RichText::new(format!("depth {}", result.depth)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, text: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let button = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(button).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(CENTRAL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let counts = self.state.display_counts();
                let clickable: Vec<usize> = legal_moves(&self.state.board)
                    .into_iter()
                    .filter(|&pit| self.state.can_play(pit))
                    .collect();
                let overlay = BoardOverlay {
                    counts: &counts,
                    clickable: &clickable,
                    flashes: &self.state.flashes,
                    sowing_slot: self.state.animation.as_ref().and_then(|a| a.current_slot()),
                    last_pit: self.state.last_move.as_ref().map(|record| record.pit),
                };

                let clicked = ui
                    .vertical_centered(|ui| self.board_view.show(ui, &self.state.board, &overlay))
                    .inner;
                self.render_banner(ui);

                if let Some(pit) = clicked {
                    if let Err(msg) = self.state.try_play(pit) {
                        warn!(pit, %msg, "move rejected");
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// "Extra Turn!" / "Capture!" text fading over the board
    fn render_banner(&self, ui: &egui::Ui) {
        let Some(banner) = self.state.banner else {
            return;
        };
        let base = match banner.kind {
            BannerKind::ExtraTurn => BANNER_EXTRA_TURN,
            BannerKind::Capture { .. } => BANNER_CAPTURE,
        };
        let alpha = (banner.alpha() * 255.0) as u8;
        let color = egui::Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
        ui.painter().text(
            self.board_view.rect().center(),
            egui::Align2::CENTER_CENTER,
            banner.text(),
            egui::FontId::proportional(40.0),
            color,
        );
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for KalahApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.tick();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.needs_repaint() {
            ctx.request_repaint();
        }
    }
}
