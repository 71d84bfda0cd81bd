use clap::{Parser, ValueEnum};
use pegsearch::{
    board::BOARD_SIZE, config::DEFAULT_FRONTIER_CEILING, Board, Bookkeeping, SearchReport, SolverConfig, Strategy,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    Dfs,
    Bfs,
    Ids,
    Random,
    Heuristic,
    All,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Peg solitaire solver", long_about = None)]
struct Args {
    /// Search method to run
    #[clap(short, long, value_enum, default_value_t = Method::All)]
    strategy: Method,

    /// Time limit per method, in minutes [default: 60]
    #[clap(short, long)]
    minutes: Option<u64>,

    /// Largest depth cap for iterative deepening
    #[clap(long, default_value_t = 33)]
    max_depth: u32,

    /// Frontier size that counts as running out of memory [default: 3231848]
    #[clap(long)]
    ceiling: Option<usize>,

    /// Search without a time limit or a frontier ceiling
    #[clap(long, conflicts_with_all = ["minutes", "ceiling"])]
    no_limit: bool,

    /// Reset bookkeeping at every deepening iteration
    #[clap(long)]
    per_iteration: bool,

    /// Start position file (7 lines of 7 characters: 'O' peg, '.' hole, ' ' or '#' wall)
    #[clap(short, long)]
    board: Option<PathBuf>,

    /// Do not print the boards on the solution path
    #[clap(short, long)]
    quiet: bool,
}

fn read_board_file(path: &Path) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    // Editors tend to strip the trailing walls, so short rows are padded.
    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{:<width$}", line, width = BOARD_SIZE))
        .collect();
    Board::from_rows(&lines).map_err(|e| e.to_string())
}

const DEFAULT_MINUTES: u64 = 60;

fn time_limit(args: &Args) -> Option<Duration> {
    if args.no_limit {
        return None;
    }
    let minutes = args.minutes.unwrap_or(DEFAULT_MINUTES);
    Some(Duration::from_secs(minutes.saturating_mul(60)))
}

fn solver_config(args: &Args) -> SolverConfig {
    let ceiling = if args.no_limit {
        usize::MAX
    } else {
        args.ceiling.unwrap_or(DEFAULT_FRONTIER_CEILING)
    };
    let bookkeeping = if args.per_iteration {
        Bookkeeping::PerIteration
    } else {
        Bookkeeping::Cumulative
    };

    let config = SolverConfig::default()
        .with_frontier_ceiling(ceiling)
        .with_bookkeeping(bookkeeping);
    match time_limit(args) {
        Some(limit) => config.with_time_limit(limit),
        None => config,
    }
}

fn strategies(method: Method, max_depth: u32) -> Vec<Strategy> {
    match method {
        Method::Dfs => vec![Strategy::DepthFirst],
        Method::Bfs => vec![Strategy::BreadthFirst],
        Method::Ids => vec![Strategy::IterativeDeepening { max_depth }],
        Method::Random => vec![Strategy::RandomDepthFirst],
        Method::Heuristic => vec![Strategy::HeuristicDepthFirst],
        Method::All => Strategy::all(max_depth).to_vec(),
    }
}

fn print_report(report: &SearchReport<Board>, quiet: bool) {
    println!("{}", report.headline());

    if let Some(path) = &report.path {
        if !quiet {
            println!("Board states:");
            for (i, board) in path.iter().enumerate() {
                println!("{}. State:", i);
                println!("{}", board);
            }
        }
    }

    let stats = &report.statistics;
    println!("Runtime: {:.3} minutes.", stats.elapsed_minutes());
    println!("Number of expanded nodes: {}", stats.expanded_nodes);
    println!("Max number of nodes stored in the memory: {}", stats.peak_frontier);
    println!();
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.board {
        Some(path) => match read_board_file(path) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Could not load board from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Board::english(),
    };

    let config = solver_config(&args);
    let limit_label = match config.time_limit {
        Some(limit) => format!("{} minutes", limit.as_secs() / 60),
        None => "none".to_string(),
    };

    for strategy in strategies(args.strategy, args.max_depth) {
        println!("Search Method: {}, Time Limit: {}.", strategy, limit_label);

        let mut solver = strategy.solver(board.clone(), config.clone());
        match solver.search() {
            Ok(report) => print_report(&report, args.quiet),
            Err(e) => {
                eprintln!("Search failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
