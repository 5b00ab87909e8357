// app.rs - eframe shell wiring egui input and commands onto the core

use std::time::{Duration, Instant};

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lifecanvas_core::{
    patterns, step, Config, DrawMode, Grid, GridState, InteractionController, Playback,
    PointerButton, Viewport, ZoomDirection,
};

use crate::render;

/// Discrete playback periods, as (milliseconds, label).
const SPEEDS: &[(u64, &str)] = &[(1000, "1x"), (500, "5x"), (100, "10x"), (50, "20x")];

pub struct LifeApp {
    config: Config,
    grid: GridState,
    viewport: Viewport,
    interaction: InteractionController,
    playback: Playback,
    selected_pattern: &'static str,
    /// Canvas size of the previous frame; a change re-centers the view.
    canvas_size: Option<egui::Vec2>,
}

impl LifeApp {
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::random(config.rows, config.cols, config.fill_density, &mut rng);
        let viewport = Viewport::new(config.cell_size, config.min_cell_size, config.max_cell_size);
        let playback = Playback::new(Duration::from_millis(config.interval_ms));

        Self {
            grid: GridState::new(grid),
            viewport,
            interaction: InteractionController::new(),
            playback,
            selected_pattern: patterns::PATTERNS[0].name,
            canvas_size: None,
            config,
        }
    }

    fn step_once(&mut self) {
        let next = step(self.grid.grid());
        self.grid.advance(next);
    }

    fn reseed(&mut self) {
        let mut rng = StdRng::from_entropy();
        let grid = Grid::random(
            self.config.rows,
            self.config.cols,
            self.config.fill_density,
            &mut rng,
        );
        self.grid.replace(grid);
    }

    fn load_selected_pattern(&mut self) {
        let Some(size) = self.canvas_size else { return };
        let Some(pattern) = patterns::find(self.selected_pattern) else { return };
        let center = self.viewport.cell_at_raw(size.x / 2.0, size.y / 2.0);
        let grid = patterns::stamp_centered(pattern, self.grid.rows(), self.grid.cols(), center);
        self.grid.replace(grid);
        log::info!("Loaded pattern: {}", pattern.name);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.playback.is_running() {
                "⏸ Pause"
            } else {
                "▶ Start"
            };
            if ui.button(label).clicked() {
                self.playback.toggle(Instant::now());
            }

            if ui.button("⏩ Step").clicked() {
                self.step_once();
            }

            if ui.button("⏹ Reset").clicked() {
                self.grid.reset();
            }

            if ui.button("🎲 Random").clicked() {
                self.reseed();
            }

            ui.separator();

            let mode = match self.interaction.draw_mode() {
                DrawMode::Draw => "Mode: Draw",
                DrawMode::Erase => "Mode: Erase",
            };
            if ui.button(mode).clicked() {
                self.interaction.toggle_draw_mode();
            }

            ui.separator();

            ui.label("Speed:");
            let mut period_ms = self.playback.period().as_millis() as u64;
            let current = SPEEDS
                .iter()
                .find(|(ms, _)| *ms == period_ms)
                .map(|(_, label)| *label)
                .unwrap_or("custom");
            egui::ComboBox::from_id_source("speed_selector")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for &(ms, label) in SPEEDS {
                        ui.selectable_value(&mut period_ms, ms, label);
                    }
                });
            if period_ms != self.playback.period().as_millis() as u64 {
                self.playback
                    .set_period(Duration::from_millis(period_ms), Instant::now());
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(self.selected_pattern)
                .show_ui(ui, |ui| {
                    for pattern in patterns::PATTERNS {
                        ui.selectable_value(&mut self.selected_pattern, pattern.name, pattern.name)
                            .on_hover_text(pattern.description);
                    }
                });
            if ui.button("Load").clicked() {
                self.load_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.grid.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", self.grid.grid().population()));
            ui.separator();
            ui.label(format!("Cell size: {:.1}px", self.viewport.cell_size()));
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let rect = response.rect;

        // Re-center whenever the canvas size changes, first frame included.
        if self.canvas_size != Some(rect.size()) {
            self.canvas_size = Some(rect.size());
            self.viewport
                .recenter(rect.width(), rect.height(), self.grid.rows(), self.grid.cols());
        }

        self.handle_pointer(ui, &response);
        self.handle_wheel(ui, &response);

        render::draw(&painter, rect, &self.grid.snapshot(), &self.viewport);
    }

    /// Translate egui's pointer state into state-machine events. Presses
    /// must start on the canvas; moves and releases are taken globally so
    /// strokes and pans keep working when the pointer leaves it.
    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let rect = response.rect;
        let to_canvas = |pos: egui::Pos2| (pos.x - rect.min.x, pos.y - rect.min.y);

        ui.input(|input| {
            if let Some(origin) = input.pointer.press_origin() {
                if rect.contains(origin) {
                    if input.pointer.primary_pressed() {
                        self.interaction.pointer_down(
                            to_canvas(origin),
                            PointerButton::Primary,
                            &self.viewport,
                            &mut self.grid,
                        );
                    }
                    if input.pointer.secondary_pressed() {
                        self.interaction.pointer_down(
                            to_canvas(origin),
                            PointerButton::Secondary,
                            &self.viewport,
                            &mut self.grid,
                        );
                    }
                }
            }

            if let Some(pos) = input.pointer.latest_pos() {
                self.interaction
                    .pointer_move(to_canvas(pos), &mut self.viewport, &mut self.grid);
            }

            if input.pointer.any_released() {
                self.interaction.pointer_up();
            }
        });
    }

    fn handle_wheel(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if !response.hovered() {
            return;
        }
        let scroll = ui.input(|input| input.scroll_delta.y);
        if scroll == 0.0 {
            return;
        }
        let Some(pos) = response.hover_pos() else { return };
        let direction = if scroll > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        let rect = response.rect;
        self.viewport
            .zoom_at(pos.x - rect.min.x, pos.y - rect.min.y, direction);
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for _ in 0..self.playback.poll(Instant::now()) {
            self.step_once();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);
            ui.separator();
            self.canvas(ui);
        });

        // Keep frames coming while the simulation runs.
        if self.playback.is_running() {
            ctx.request_repaint();
        }
    }
}
