use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use compte_est_bon::{Draw, Status, solve_all, validate_draw};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// ceb - Le compte est bon
#[derive(Parser, Debug)]
#[command(name = "ceb")]
#[command(about = "Reach a target between 100 and 999 by combining six tiles with + - x /")]
#[command(version)]
pub struct CliArgs {
    /// Six tiles then the target, or the target (> 100) then the tiles.
    /// Anything missing is drawn at random.
    pub numbers: Vec<i64>,

    /// Tiles to play, overriding positional numbers
    #[arg(short = 'p', long = "tiles", num_args = 1..=6)]
    pub tiles: Vec<i64>,

    /// Target to reach, overriding positional numbers
    #[arg(short = 's', long = "target")]
    pub target: Option<i64>,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Solve this many random draws in parallel and print a summary
    #[arg(short = 'n', long, conflicts_with_all = ["numbers", "tiles", "target"])]
    pub count: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub tiles: Option<Vec<i64>>,
    pub target: Option<i64>,
    pub json: bool,
    pub count: Option<usize>,
    pub log_level: LogLevel,
}

/// Split positional numbers into tiles and target.
///
/// A leading value above 100 is the target and the rest are tiles;
/// otherwise the first six values are tiles and the seventh the target.
pub fn split_numbers(numbers: &[i64]) -> (Option<Vec<i64>>, Option<i64>) {
    match numbers {
        [] => (None, None),
        [first, rest @ ..] if *first > 100 => {
            let tiles = (!rest.is_empty()).then(|| rest.to_vec());
            (tiles, Some(*first))
        }
        _ => {
            let count = numbers.len().min(6);
            (Some(numbers[..count].to_vec()), numbers.get(6).copied())
        }
    }
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let (tiles, target) = split_numbers(&args.numbers);
        let tiles = if args.tiles.is_empty() {
            tiles
        } else {
            Some(args.tiles)
        };

        CliConfig {
            tiles,
            target: args.target.or(target),
            json: args.json,
            count: args.count,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    Ok(CliConfig::from(CliArgs::parse()))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Build the draw described by the configuration, drawing missing parts at random
pub fn build_draw(config: &CliConfig) -> Result<Draw> {
    let draw = match (&config.tiles, config.target) {
        (Some(tiles), Some(target)) => Draw::new(tiles, target),
        (Some(tiles), None) => Draw::with_tiles(tiles),
        (None, Some(target)) => Ok(Draw::with_target(target)),
        (None, None) => Ok(Draw::random()),
    };
    draw.context("Invalid tiles")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    if let Some(count) = config.count {
        return run_batch(count);
    }

    let mut draw = build_draw(&config)?;
    if config.json {
        draw.resolve();
        let json = draw.to_json().context("Failed to serialize result")?;
        println!("{}", json);
        return Ok(());
    }

    print_draw(&mut draw);
    Ok(())
}

fn join_tiles(draw: &Draw) -> String {
    draw.tiles()
        .iter()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_draw(draw: &mut Draw) {
    println!("#### Le compte est bon ####");
    println!("Tiles: {}\tTarget: {}", join_tiles(draw), draw.target());

    let start = Instant::now();
    let status = draw.resolve();
    let elapsed = start.elapsed();
    println!();

    match status {
        Status::ExactMatch => print!("{}", status),
        Status::ApproximateMatch => print!(
            "{}: {:?} (off by {})",
            status,
            draw.found(),
            draw.best_diff().unwrap_or_default()
        ),
        _ => {
            if let Err(err) = validate_draw(draw.tiles(), draw.target()) {
                warn!("{}", err);
                print!("Invalid draw: {}", err);
            } else {
                print!("{}", status);
            }
        }
    }
    println!(
        ", {} solutions found in {:.3} s",
        draw.count(),
        elapsed.as_secs_f64()
    );

    if draw.count() > 0 {
        println!("\nSolutions:");
        for (i, solution) in draw.solutions().iter().enumerate() {
            println!(
                "{}/{} ({}):\t{}",
                i + 1,
                draw.count(),
                solution.rank(),
                solution
            );
        }
    }
}

fn run_batch(count: usize) -> Result<()> {
    let mut draws: Vec<Draw> = (0..count).map(|_| Draw::random()).collect();

    info!("Solving {} random draws", count);
    let start = Instant::now();
    let statuses = solve_all(&mut draws);
    let elapsed = start.elapsed();

    for (draw, status) in draws.iter().zip(&statuses) {
        println!(
            "{}\t-> {}\t{} ({} solutions)",
            join_tiles(draw),
            draw.target(),
            status,
            draw.count()
        );
    }

    let exact = statuses
        .iter()
        .filter(|&&status| status == Status::ExactMatch)
        .count();
    println!(
        "\n{}/{} exact, solved in {:.3} s",
        exact,
        count,
        elapsed.as_secs_f64()
    );
    Ok(())
}
