use std::time::{Duration, Instant};

use eframe::{egui, epaint::Vec2};
use ghhs_chess::{Color, Game, Outcome, Square};
use gui::{background_color, format_clock, piece_text};

mod gui;

enum Screen {
    Menu,
    Playing(Game),
}

struct App {
    screen: Screen,
    cell_size: f32,
    last_frame: Instant,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([740.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Ghhs-chess",
        options,
        Box::new(|_cc| {
            Box::new(App {
                screen: Screen::Menu,
                cell_size: 60.0,
                last_frame: Instant::now(),
            })
        }),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        let mut next_screen = None;
        if let Screen::Playing(game) = &mut self.screen {
            game.tick(elapsed);
            // Keep the clocks moving without waiting for input.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Menu => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.heading("Ghhs-chess");
                    ui.add_space(30.0);
                    if ui.button("Play against a friend").clicked() {
                        next_screen = Some(Screen::Playing(Game::new(false)));
                    }
                    if ui.button("Play against the computer").clicked() {
                        next_screen = Some(Screen::Playing(Game::new(true)));
                    }
                });
            }
            Screen::Playing(game) => {
                ui.horizontal(|ui| {
                    if let Some(square) = Self::board_grid(ui, game, self.cell_size) {
                        game.handle_click(square);
                    }
                    if Self::control_panel(ui, game) {
                        next_screen = Some(Screen::Menu);
                    }
                });
                if game.outcome().is_terminal() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    next_screen = Some(Screen::Menu);
                }
            }
        });

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
    }
}

impl App {
    /// Black starts at the top, like over the board. Returns the clicked square.
    fn board_grid(ui: &mut egui::Ui, game: &Game, cell_size: f32) -> Option<Square> {
        let mut clicked = None;
        egui::Grid::new("board_grid")
            .spacing([0.0, 0.0])
            .min_col_width(cell_size)
            .max_col_width(cell_size)
            .min_row_height(cell_size)
            .show(ui, |ui| {
                for row in 0..8 {
                    for col in 0..8 {
                        let square = Square::new(row, col);
                        let piece = game.board().get(square);
                        let button = egui::Button::new(piece_text(piece, cell_size))
                            .min_size(Vec2::new(cell_size, cell_size))
                            .rounding(0.0)
                            .fill(background_color(
                                square,
                                game.selected() == Some(square),
                                game.valid_moves().contains(&square),
                            ));
                        if ui.add(button).clicked() {
                            println!("Square {square} was clicked");
                            clicked = Some(square);
                        }
                    }
                    ui.end_row();
                }
            });
        clicked
    }

    fn control_panel(ui: &mut egui::Ui, game: &Game) -> bool {
        let mut back = false;
        ui.vertical(|ui| {
            ui.heading("Ghhs-chess");
            ui.add_space(10.0);
            ui.label(format!(
                "White {}",
                format_clock(game.remaining_time(Color::White))
            ));
            ui.label(format!(
                "Black {}",
                format_clock(game.remaining_time(Color::Black))
            ));
            ui.add_space(10.0);
            match game.outcome() {
                Outcome::InProgress => {
                    ui.label(format!("{} to move", game.current_player()));
                }
                Outcome::Check(side) => {
                    ui.label(format!("{side} to move, in check!"));
                }
                Outcome::Checkmate(winner) => {
                    ui.label(format!("Checkmate! {winner} wins"));
                }
                Outcome::Stalemate => {
                    ui.label("Stalemate");
                }
                Outcome::TimeForfeit(winner) => {
                    ui.label(format!("{winner} wins on time"));
                }
            }
            if game.outcome().is_terminal() {
                ui.add_space(10.0);
                if ui.button("Back to menu").clicked() {
                    back = true;
                }
            }
        });
        back
    }
}
