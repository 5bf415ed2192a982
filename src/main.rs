//! Main CLI interface to the Octi engine.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use octi_engine::coretypes::{PlyKind, DEFAULT_BUFFER, DEFAULT_MAX_DEPTH};
use octi_engine::error::ErrorKind;
use octi_engine::octi::{OctiAction, OctiState};
use octi_engine::{Algorithm, Engine, EngineBuilder, GameState};

#[derive(Parser)]
#[command(name = "octi")]
#[command(version, about = "Time-bounded alpha-beta agent for Octi", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play both sides of a game
    Selfplay(SelfplayArgs),

    /// Search a single position reached from the start position
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct EngineArgs {
    /// Time limit of every decision in milliseconds
    #[arg(long, default_value_t = 1000)]
    time_ms: u64,

    /// Deepest ply searched by iterative deepening
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: PlyKind,

    /// Safety margin reserved from every time limit in milliseconds
    #[arg(long, default_value_t = DEFAULT_BUFFER.as_millis() as u64)]
    buffer_ms: u64,

    /// Search used for each iteration: alpha-beta or negamax
    #[arg(long, default_value = "alpha-beta")]
    algorithm: Algorithm,
}

impl EngineArgs {
    fn engine(&self) -> Result<Engine> {
        let engine = EngineBuilder::new()
            .max_depth(self.max_depth)
            .buffer(Duration::from_millis(self.buffer_ms))
            .algorithm(self.algorithm)
            .build()?;
        Ok(engine)
    }

    fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}

#[derive(Args)]
struct SelfplayArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Stop the game after this many turns
    #[arg(long, default_value_t = 200)]
    max_turns: usize,

    /// Number of uniformly random actions played before the engine takes over
    #[arg(long, default_value_t = 0)]
    random_openings: usize,

    /// Seed for the random openings
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Actions applied to the start position before searching, such as 1,1>1,2 or 1,1*3,1
    #[arg(long, num_args = 1..)]
    actions: Vec<OctiAction>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Selfplay(args) => selfplay(args),
        Commands::Analyze(args) => analyze(args),
    }
}

fn selfplay(args: SelfplayArgs) -> Result<()> {
    let engine = args.engine.engine()?;
    let time_limit = args.engine.time_limit();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = OctiState::start_position();
    println!("{state}\n");

    for turn in 1..=args.max_turns {
        if state.is_terminal() {
            break;
        }

        let action = if turn <= args.random_openings {
            let actions = state.legal_actions();
            *actions.choose(&mut rng).context("no legal action")?
        } else {
            match engine.decide_move(&state, time_limit) {
                Ok(result) => {
                    println!("{result}");
                    result.best_action.context("decision without an action")?
                }
                Err(error) if error.kind() == ErrorKind::NoDecision => {
                    // Play something rather than forfeit the turn.
                    warn!(turn, "engine made no decision, playing first legal action");
                    *state.legal_actions().first().context("no legal action")?
                }
                Err(error) => return Err(error.into()),
            }
        };

        println!("turn {turn}: {} plays {action}", state.to_move());
        state = state.try_apply(&action)?;
        println!("{state}\n");
    }

    match state.winner() {
        Some(winner) => info!(%winner, "game over"),
        None => info!(turns = args.max_turns, "game stopped without a winner"),
    }
    Ok(())
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let engine = args.engine.engine()?;

    let mut state = OctiState::start_position();
    for action in &args.actions {
        state = state
            .try_apply(action)
            .with_context(|| format!("cannot play {action}"))?;
    }
    println!("{state}\n");

    let result = engine.decide_move(&state, args.engine.time_limit())?;
    println!("{result}");
    Ok(())
}
