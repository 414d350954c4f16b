// main.rs - Terminal runner: prints successive generations on a timer

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use life_engine::{Board, CycleDetector, Grid, LifeConfig, patterns, telemetry};
use tracing::info;

/// Glider in the top-left corner plus a vertical blinker.
const DEMO_CELLS: &[(usize, usize)] = &[
    (0, 2), (1, 0), (1, 2), (2, 1), (2, 2),
    (6, 7), (7, 7), (8, 7),
];

#[derive(Parser)]
#[command(author, version, about = "Iterate Game of Life boards in the terminal", long_about = None)]
struct Cli {
    /// TOML settings file; defaults are used if it does not exist
    #[arg(long, default_value = "life.toml")]
    config: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the board, then each generation after it
    Run(RunArgs),
    /// Seed a 10x10 board, shrink it, grow it back, printing each stage
    Resize {
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        rows: i64,
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        cols: i64,
    },
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long)]
    generations: Option<usize>,
    #[arg(long)]
    interval_ms: Option<u64>,
    /// Seed pattern name (e.g. "Glider", "Pulsar")
    #[arg(long)]
    pattern: Option<String>,
    /// Random board seed, used when no pattern is given
    #[arg(long)]
    seed: Option<u32>,
    /// Keep going after the board repeats a recent generation
    #[arg(long)]
    no_stop_on_cycle: bool,
}

impl RunArgs {
    fn apply(self, cfg: &mut LifeConfig) {
        if let Some(rows) = self.rows { cfg.rows = rows; }
        if let Some(cols) = self.cols { cfg.cols = cols; }
        if let Some(generations) = self.generations { cfg.generations = generations; }
        if let Some(interval_ms) = self.interval_ms { cfg.interval_ms = interval_ms; }
        if self.pattern.is_some() { cfg.pattern = self.pattern; }
        if self.seed.is_some() { cfg.seed = self.seed; }
        if self.no_stop_on_cycle { cfg.stop_on_cycle = false; }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = LifeConfig::load(&cli.config)
        .with_context(|| format!("load {}", cli.config.display()))?;
    telemetry::init(&cfg.log_level);

    match cli.cmd {
        Cmd::Run(args) => {
            args.apply(&mut cfg);
            cfg.validate().context("invalid settings")?;
            run(&cfg).await
        }
        Cmd::Resize { rows, cols } => resize_demo(rows, cols),
    }
}

fn seed_board(cfg: &LifeConfig) -> Result<Grid> {
    let mut grid = Grid::new(cfg.rows, cfg.cols).context("allocate board")?;

    if let Some(pattern) = cfg.seed_pattern() {
        let origin = pattern.centered_origin(&grid);
        let placed = patterns::apply_pattern(&mut grid, pattern, origin);
        info!(pattern = pattern.name, placed, "seeded pattern");
    } else if let Some(seed) = cfg.seed {
        patterns::apply_random_pattern(&mut grid, seed);
        info!(seed, population = grid.population(), "seeded random board");
    } else {
        for &(row, col) in DEMO_CELLS {
            if row < grid.rows() && col < grid.cols() {
                grid.set_cell(row, col, true)?;
            }
        }
        info!(population = grid.population(), "seeded demo board");
    }
    Ok(grid)
}

async fn run(cfg: &LifeConfig) -> Result<()> {
    let mut grid = seed_board(cfg)?;
    print!("{grid}");

    let mut detector = CycleDetector::new();
    detector.observe(&grid);

    let mut ticker = tokio::time::interval(Duration::from_millis(cfg.interval_ms));
    ticker.tick().await; // first tick is immediate

    for iteration in 0..cfg.generations {
        ticker.tick().await;
        grid = grid.step().context("compute next generation")?;
        println!("Iteration {iteration}:");
        print!("{grid}");

        if detector.observe(&grid) && cfg.stop_on_cycle {
            info!(iteration, "board repeats a recent generation, stopping");
            break;
        }
    }

    info!(population = grid.population(), "finished");
    Ok(())
}

fn resize_demo(rows: i64, cols: i64) -> Result<()> {
    let mut board = Board::new(10, 10)?;
    for &(i, j) in DEMO_CELLS {
        board.set_cell(i as i64, j as i64, 1)?;
    }
    print!("{}", board.grid());

    board
        .resize(rows, cols)
        .with_context(|| format!("resize to {rows}x{cols}"))?;
    println!();
    print!("{}", board.grid());

    board.resize(10, 10).context("resize back to 10x10")?;
    println!();
    print!("{}", board.grid());
    Ok(())
}
