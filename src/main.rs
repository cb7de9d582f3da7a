#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use ocean::{init_logging, ui, Board, ShotResult};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt a randomly placed fleet by typing `row col` coordinates.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place a fleet and print where every ship ended up.
    Reveal {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn new_board(seed: Option<u64>) -> anyhow::Result<Board> {
    let mut rng = make_rng(seed);
    let mut board = Board::new();
    board
        .place_fleet(&mut rng)
        .context("failed to place the fleet")?;
    Ok(board)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut board = new_board(seed)?;
            play(&mut board, io::stdin().lock(), &mut io::stdout().lock())?;
        }
        Commands::Reveal { seed } => {
            let board = new_board(seed)?;
            print!("{}", ui::render_fleet(&board));
            for (id, ship) in board.ships() {
                if let Some((r, c, o)) = ship.position() {
                    println!("  #{} {} at ({}, {}) {:?}", id.index(), ship.name(), r, c, o);
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    write!(out, "{}", ui::render_board(board))?;
    writeln!(out, "{}", ui::render_stats(&board.stats()))
}

/// Read `row col` lines from `input` and fire until the fleet is sunk, the
/// player types `quit`, or input runs out.
#[cfg(feature = "std")]
fn play(board: &mut Board, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Ten ships are hidden on the ocean. Enter `row col` (0-9), or `quit`.")?;
    write_board(out, board)?;

    let mut lines = input.lines();
    while !board.is_game_over() {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        let (row, col) = match ui::parse_coord(&line) {
            Ok(coord) => coord,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        match board.fire(row, col)? {
            ShotResult::Miss => writeln!(out, "Miss.")?,
            ShotResult::Hit => writeln!(out, "Hit!")?,
            ShotResult::Sunk(ship_type) => writeln!(out, "You sank a {}!", ship_type)?,
        }
        write_board(out, board)?;
    }

    if board.is_game_over() {
        writeln!(out, "\nGAME OVER - every ship is sunk.")?;
    }
    writeln!(out, "{}", ui::render_stats(&board.stats()))?;
    Ok(())
}
