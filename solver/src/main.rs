use std::fs;
use std::num::NonZero;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use numberlink_backtrack::parse::parse_puzzle;
use numberlink_backtrack::render::{framed, to_puzzle_text};
use numberlink_backtrack::{BacktrackSolver, Board, SolverConfig, SolverFailure};

/// Exit status when the search ends without a solution.
const NO_SOLUTION: u8 = 2;

/// numberlink: solve a Numberlink puzzle by backtracking path search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Puzzle file: a "rows columns" line, then one line per row with a space for each empty cell
    input: PathBuf,

    /// Where to write the solution, in the same format as the input
    #[arg(short, long, default_value = "numberlink_solution.txt")]
    output: PathBuf,

    /// Cap on enumerated paths per connector once past the exhaustive depth
    #[arg(long, default_value_t = numberlink_backtrack::config::DEFAULT_PATH_LIMIT, conflicts_with = "unlimited")]
    path_limit: NonZero<usize>,

    /// Never cap path enumeration
    #[arg(long, default_value_t = false)]
    unlimited: bool,

    /// Number of leading connectors whose paths are enumerated without a cap
    #[arg(long, default_value_t = numberlink_backtrack::config::DEFAULT_EXHAUSTIVE_DEPTH)]
    exhaustive_depth: usize,

    /// Search nodes allowed per connector ordering [default: none]
    #[arg(long)]
    node_budget: Option<u64>,

    /// Milliseconds allowed per connector ordering [default: none]
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Disable dead-end detection after each committed path
    #[arg(long, default_value_t = false)]
    no_forward_checking: bool,

    /// Re-check the solution against the puzzle before writing it
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print plain rows instead of framed grids
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// More logging; repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_path_limit(if self.unlimited { None } else { Some(self.path_limit) })
            .with_exhaustive_depth(self.exhaustive_depth)
            .with_forward_checking(!self.no_forward_checking)
            .with_node_budget(self.node_budget)
            .with_time_limit(self.time_limit_ms.map(Duration::from_millis))
    }

    fn show(&self, board: &Board) -> String {
        if self.plain {
            board.rows().map(|row| row + "\n").collect()
        } else {
            framed(board)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // RUST_LOG applies unless -v is given
    let mut logger = env_logger::Builder::from_default_env();
    match args.verbose {
        0 => {}
        1 => { logger.filter_level(LevelFilter::Debug); }
        _ => { logger.filter_level(LevelFilter::Trace); }
    }
    logger.init();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("couldn't read puzzle file '{}'", args.input.display()))?;
    let board = parse_puzzle(&text)
        .with_context(|| format!("couldn't load puzzle '{}'", args.input.display()))?;

    println!("Puzzle ({}x{}, {} connectors):", board.width(), board.height(), board.connectors().len());
    print!("{}", args.show(&board));

    let solver = BacktrackSolver::new(args.config());
    let solution = match solver.solve(&board) {
        Ok(solution) => solution,
        Err(failure @ (SolverFailure::Unsolvable | SolverFailure::Interrupted)) => {
            println!("No solution: {failure}");
            return Ok(ExitCode::from(NO_SOLUTION));
        }
    };

    if args.verify {
        solution.verify(&board).context("solver produced an invalid solution")?;
        info!("solution verified");
    }

    println!("Solution ({} ordering):", solution.strategy);
    print!("{}", args.show(&solution.board));
    info!("{:?}", solution.statistics);

    fs::write(&args.output, to_puzzle_text(&solution.board))
        .with_context(|| format!("couldn't write solution file '{}'", args.output.display()))?;
    println!("Solution written to '{}'", args.output.display());

    Ok(ExitCode::SUCCESS)
}
