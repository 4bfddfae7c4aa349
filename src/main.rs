//! Mancala-Rust command line.
//!
//! ## Usage
//!
//! - `mancala-rust` - Show a fresh board
//! - `mancala-rust sow --player close --pit 1` - Sow one pit and show the result
//! - `mancala-rust simulate --player far` - Try every pit for a player
//! - `mancala-rust random --player close` - Sow a random non-empty pit
//!
//! Pits are numbered 1..=field size along the player's own row, starting next
//! to their store. Set `RUST_LOG=debug` to see every lap.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mancala_rust::board::{Board, Pit, Player};
use mancala_rust::constants::{FIELD_SIZE, STARTING_SEEDS};
use mancala_rust::simulate::run_simulations_with;
use mancala_rust::sow::{SowRule, sow_traced};

/// Mancala-Rust: a Mancala sowing engine
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pits per row
    #[arg(long, global = true, default_value_t = FIELD_SIZE)]
    field_size: usize,

    /// Seeds in every pit at the start
    #[arg(long, global = true, default_value_t = STARTING_SEEDS)]
    seeds: u32,

    /// Keep chain sowing from empty landing pits too
    #[arg(long, global = true)]
    always_chain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh board
    Show,
    /// Sow one pit and print the resulting board
    Sow {
        #[command(flatten)]
        side: SideArg,
        /// Pit on the player's row, 1 is next to their store
        #[arg(long)]
        pit: usize,
    },
    /// Sow every pit of a player on separate copies of the board
    Simulate {
        #[command(flatten)]
        side: SideArg,
    },
    /// Sow a random non-empty pit
    Random {
        #[command(flatten)]
        side: SideArg,
        /// Seed for the pit picker
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct SideArg {
    /// Acting player
    #[arg(long, value_enum, default_value_t = Side::Close)]
    player: Side,
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    Close,
    Far,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Close => Player::Close,
            Side::Far => Player::Far,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rule = if cli.always_chain {
        SowRule::AlwaysChain
    } else {
        SowRule::StopOnEmpty
    };
    let board = Board::new(cli.field_size, cli.seeds).context("invalid board configuration")?;
    info!(field_size = cli.field_size, seeds = cli.seeds, ?rule, "board ready");

    match cli.command {
        Some(Commands::Show) | None => print!("{board}"),
        Some(Commands::Sow { side, pit }) => {
            let player = side.player.into();
            let origin = row_pit(&board, player, pit)?;
            run_sow(board, player, origin, rule)?;
        }
        Some(Commands::Simulate { side }) => {
            let player: Player = side.player.into();
            for branch in run_simulations_with(&board, player, rule) {
                println!("pit {} ({:?})", branch.origin, branch.outcome);
                print!("{}", branch.board);
            }
        }
        Some(Commands::Random { side, seed }) => {
            let player = side.player.into();
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let candidates: Vec<Pit> = board.pits(player).filter(|&p| board.value(p) > 0).collect();
            if candidates.is_empty() {
                bail!("{player} has no seeds to sow");
            }
            let origin = candidates[rng.usize(..candidates.len())];
            run_sow(board, player, origin, rule)?;
        }
    }

    Ok(())
}

/// Map a 1-based position on the player's row to a board index.
fn row_pit(board: &Board, player: Player, pit: usize) -> Result<Pit> {
    if pit == 0 || pit > board.field_size() {
        bail!("pit must be between 1 and {}", board.field_size());
    }
    Ok(board.store_of(player) + pit)
}

fn run_sow(mut board: Board, player: Player, origin: Pit, rule: SowRule) -> Result<()> {
    let report = sow_traced(&mut board, origin, player, rule)
        .with_context(|| format!("{player} cannot sow pit {origin}"))?;
    println!(
        "{player} sowed pit {origin}: {} laps, extra turn: {}",
        report.laps.len(),
        report.extra_turn
    );
    print!("{board}");
    Ok(())
}
