#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use ocean::{init_logging, Board, BOARD_SIZE};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Place a seeded fleet, then sweep the board row by row until it is cleared.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet(&mut rng)?;

    let n = BOARD_SIZE as usize;
    for cell in 0..n * n {
        if board.is_game_over() {
            break;
        }
        board.shoot_at(cell / n, cell % n);
    }

    let stats = board.stats();
    let result = json!({
        "seed": seed,
        "shots_fired": stats.shots_fired,
        "hit_count": stats.hit_count,
        "ships_sunk": stats.ships_sunk,
        "game_over": board.is_game_over(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
