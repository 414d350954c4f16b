// main.rs - Conway's Game of Life window over a resizable engine grid

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use eframe::egui;
use egui::Color32;
use life_engine::{CycleDetector, Grid, GridError, LifeConfig, patterns, telemetry};

mod ui;

fn main() -> Result<()> {
    let cfg = LifeConfig::load(Path::new("life.toml")).context("load life.toml")?;
    telemetry::init(&cfg.log_level);

    let app = GameOfLife::new(&cfg).context("create board")?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}

pub struct GameOfLife {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub pending_rows: usize,
    pub pending_cols: usize,
    /// Last engine failure, shown under the controls.
    pub status: Option<String>,
    seed: u32,
    history: CycleDetector,
}

impl GameOfLife {
    pub fn new(cfg: &LifeConfig) -> Result<Self, GridError> {
        let mut app = Self {
            grid: Grid::new(cfg.rows, cfg.cols)?,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(cfg.interval_ms),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            pending_rows: cfg.rows,
            pending_cols: cfg.cols,
            status: None,
            seed: cfg.seed.unwrap_or(0),
            history: CycleDetector::new(),
        };

        if let Some(index) = cfg
            .seed_pattern()
            .and_then(|p| patterns::PATTERNS.iter().position(|q| q.name == p.name))
        {
            app.selected_pattern = index;
            app.apply_selected_pattern();
        } else if cfg.seed.is_some() {
            app.apply_random_pattern();
        }
        Ok(app)
    }
}

pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, row: usize, col: usize);
    fn resize_grid(&mut self);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        match self.grid.step() {
            Ok(next) => {
                self.grid = next;
                self.generation += 1;
                if self.check_for_cycle() {
                    tracing::info!(generation = self.generation, "cycle detected, pausing");
                    self.is_running = false;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "step failed, keeping current generation");
                self.status = Some(e.to_string());
                self.is_running = false;
            }
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.observe(&self.grid)
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.reset_run();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let origin = pattern.centered_origin(&self.grid);
            let placed = patterns::apply_pattern(&mut self.grid, pattern, origin);
            self.reset_run();
            if placed < pattern.cells.len() {
                self.status = Some(format!(
                    "{} does not fit; {} of {} cells placed",
                    pattern.name,
                    placed,
                    pattern.cells.len()
                ));
            }
        }
    }

    fn apply_random_pattern(&mut self) {
        patterns::apply_random_pattern(&mut self.grid, self.seed);
        self.seed = self.seed.wrapping_add(1);
        self.reset_run();
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(e) = self.grid.toggle_cell(row, col) {
            tracing::debug!(error = %e, "ignored click outside board");
        }
    }

    fn resize_grid(&mut self) {
        match self.grid.resize(self.pending_rows, self.pending_cols) {
            Ok(resized) => {
                self.grid = resized;
                self.status = None;
                self.history.reset();
            }
            Err(e) => {
                tracing::warn!(error = %e, "resize failed, keeping current board");
                self.status = Some(e.to_string());
            }
        }
    }
}

impl GameOfLife {
    fn reset_run(&mut self) {
        self.generation = 0;
        self.history.reset();
        self.status = None;
    }
}
