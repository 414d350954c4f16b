// ui.rs - egui front end for the engine grid

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::patterns;

use crate::{GameOfLife, GameOfLifeInterface};

// Largest board edge that still fits the window at full cell size.
const BOARD_PIXELS: f32 = 750.0;
const MAX_BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;
const MAX_DIMENSION: usize = 500;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(egui::DragValue::new(&mut self.pending_rows).clamp_range(1..=MAX_DIMENSION));
                ui.label("Cols:");
                ui.add(egui::DragValue::new(&mut self.pending_cols).clamp_range(1..=MAX_DIMENSION));
                if ui.button("Resize").clicked() {
                    self.resize_grid();
                }
                ui.label(format!("Board: {}x{}", self.grid.rows(), self.grid.cols()));
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::from_rgb(220, 80, 80), status);
            }

            ui.separator();

            ui.label("Click cells to toggle them alive/dead while paused. Resizing keeps the top-left corner.");

            ui.separator();

            self.draw_board(ui);

            ui.separator();

            let total = self.grid.rows() * self.grid.cols();
            let live_cells = self.grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep animating while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GameOfLife {
    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let longest = rows.max(cols) as f32;
        let box_size = (BOARD_PIXELS / longest - SPACING).clamp(1.0, MAX_BOX_SIZE);
        let pitch = box_size + SPACING;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + row as f32 * pitch),
                    Vec2::splat(box_size),
                );
                let cell_color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                if box_size >= 4.0 {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }
        }

        // Clicks only edit the board while paused
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - start_pos;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let row = (offset.y / pitch) as usize;
                    let col = (offset.x / pitch) as usize;
                    self.toggle_cell(row, col);
                }
            }
        }
    }
}
