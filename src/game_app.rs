use crate::game::models::{Game, Outcome, Player};

use eframe::egui;

pub struct GameApp {
    game: Game,
}

impl Default for GameApp {
    fn default() -> Self {
        Self {
            game: Game::default(),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.group(|ui| {
                    ui.set_width(420.0);

                    ui.add_space(5.0);

                    ui.heading(
                        egui::RichText::new("Tic-Tac-Toe")
                            .size(32.0)
                            .color(egui::Color32::from_rgb(0, 191, 255)),
                    );

                    ui.add_space(10.0);

                    self.render_name_inputs(ui);

                    ui.add_space(10.0);

                    self.render_board(ui);

                    ui.add_space(10.0);

                    self.display_game_status(ui);

                    ui.add_space(10.0);

                    self.render_controls(ui);

                    ui.add_space(10.0);
                    ui.separator();

                    self.render_scoreboard(ui);

                    ui.add_space(10.0);

                    self.render_history(ui);

                    ui.add_space(5.0);
                });
            });
        });
    }
}

impl GameApp {
    fn render_name_inputs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(20.0);

            ui.label("Player X:");
            if let Some(name) = self.game.player_names.get_mut(&Player::X) {
                ui.add(egui::TextEdit::singleline(name).desired_width(100.0));
            }

            ui.add_space(10.0);

            ui.label("Player O:");
            if let Some(name) = self.game.player_names.get_mut(&Player::O) {
                ui.add(egui::TextEdit::singleline(name).desired_width(100.0));
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let button_size = 80.0;

        ui.vertical_centered(|ui| {
            for row in 0..3 {
                ui.horizontal(|ui| {
                    ui.add_space(75.0);
                    for col in 0..3 {
                        let cell = self.game.board[row][col];

                        let can_move = !self.game.finished() && cell.is_none();

                        let button = ui.add_enabled(
                            can_move,
                            egui::Button::new(match cell {
                                Some(Player::X) => egui::RichText::new("X")
                                    .size(40.0)
                                    .color(egui::Color32::from_rgb(255, 99, 71)),
                                Some(Player::O) => egui::RichText::new("O")
                                    .size(40.0)
                                    .color(egui::Color32::from_rgb(34, 139, 34)),
                                None => egui::RichText::new(" ")
                                    .size(40.0)
                                    .color(egui::Color32::from_rgb(180, 180, 180)),
                            })
                            .min_size(egui::vec2(button_size, button_size)),
                        );

                        if button.clicked() && can_move {
                            self.game.make_move(row, col);
                        }
                    }
                });
            }
        });
    }

    fn display_game_status(&mut self, ui: &mut egui::Ui) {
        match self.game.outcome {
            Outcome::Win(winner) => {
                let banner = format!("{} Wins!", self.game.display_name(winner));
                ui.label(
                    egui::RichText::new(banner)
                        .size(26.0)
                        .color(egui::Color32::from_rgb(34, 139, 34)),
                );
                self.render_play_again(ui);
            }
            Outcome::Draw => {
                ui.label(
                    egui::RichText::new("It's a Draw!")
                        .size(26.0)
                        .color(egui::Color32::GRAY),
                );
                self.render_play_again(ui);
            }
            Outcome::InProgress => {
                let turn_message = format!(
                    "🕐 {}'s turn",
                    self.game.display_name(self.game.current_turn)
                );
                ui.label(egui::RichText::new(turn_message).size(20.0));
            }
        }
    }

    fn render_play_again(&mut self, ui: &mut egui::Ui) {
        ui.add_space(5.0);

        if ui
            .add(egui::Button::new(
                egui::RichText::new("Play Again")
                    .size(22.0)
                    .color(egui::Color32::from_rgb(240, 148, 0)),
            ))
            .clicked()
        {
            self.game.reset();
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(110.0);

            if ui.button("Reset Scores").clicked() {
                self.game.reset_scores();
            }

            ui.add_space(10.0);

            if ui.button("Toggle Theme").clicked() {
                self.game.toggle_theme();
                ui.ctx().set_visuals(if self.game.dark_theme {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                });
            }
        });
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui) {
        let name_x = self.game.display_name(Player::X);
        let name_o = self.game.display_name(Player::O);

        let score_text = format!(
            "{name_x} {} : {} {name_o}",
            self.game.score(Player::X),
            self.game.score(Player::O)
        );

        ui.heading("Scoreboard");
        ui.label(
            egui::RichText::new(score_text)
                .size(22.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        ui.heading("Game History");

        if self.game.history.is_empty() {
            ui.label(egui::RichText::new("No finished games yet.").italics());
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(120.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for entry in &self.game.history {
                    ui.label(entry);
                }
            });
    }
}
