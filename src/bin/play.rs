use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use tiltgrid::{Direction, GameState, Tile};

/// Demo driver: plays random tilts against the reference spawn policy
/// (90% twos, 10% fours on a uniform empty cell). The spawn policy lives
/// here, not in the core; the core only ever sees `add_tile`.
#[derive(Debug, Parser)]
#[command(name = "play", about = "tiltgrid random self-play driver")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// RNG seed; equal seeds replay the exact same game
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Maximum number of tilts before giving up
    #[arg(long, default_value_t = 1000)]
    turns: usize,

    /// Print the board after every accepted tilt
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Write the final grid as JSON (rows bottom-up, 0 = empty)
    #[arg(long)]
    dump: Option<PathBuf>,
}

/// Insert one tile at a uniformly random empty cell: 2 with probability
/// 0.9, otherwise 4. Returns false when the board is full.
fn spawn_tile<R: Rng>(state: &mut GameState, rng: &mut R) -> bool {
    let grid = state.to_grid();
    let mut empties: Vec<(usize, usize)> = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v == 0 {
                empties.push((c, r));
            }
        }
    }
    let Some(&(col, row)) = empties.choose(rng) else {
        return false;
    };
    let value = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
    state.add_tile(Tile::new(value, col, row));
    true
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut rng = Pcg64::seed_from_u64(args.seed);
    let mut state = GameState::new(args.size);

    spawn_tile(&mut state, &mut rng);
    spawn_tile(&mut state, &mut rng);

    let mut tilts = 0usize;
    for _ in 0..args.turns {
        if state.game_over() {
            break;
        }
        let mut dirs = Direction::all();
        dirs.shuffle(&mut rng);
        let Some(dir) = dirs.into_iter().find(|&d| state.tilt(d)) else {
            // No direction changes the board; without a spawn this is settled.
            break;
        };
        tilts += 1;
        if args.verbose {
            println!("[play] tilt {tilts}: {dir:?}\n{state}");
        }
        spawn_tile(&mut state, &mut rng);
    }

    let over = state.game_over();
    println!("[play] finished after {tilts} tilts\n{state}");
    println!(
        "[play] score {} (max: {}), game over: {over}",
        state.score(),
        state.max_score()
    );

    if let Some(path) = args.dump {
        let json = serde_json::to_string_pretty(&state.to_grid())?;
        fs::write(&path, json)
            .map_err(|e| format!("Failed to write dump {}: {e}", path.display()))?;
        println!("[play] wrote grid dump to {}", path.display());
    }

    Ok(())
}
