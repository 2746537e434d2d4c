//! Polydice command-line entry point.
//!
//! Usage: `polydice [FACES] [ROLLS]` — defaults to one roll of a d6. The
//! generator seed comes from `POLYDICE_SEED` (default 42).

use std::error::Error;

use polydice_core::rng::{DEFAULT_SEED, FixedSeedRng};
use polydice_dice::Die;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Read configuration from environment and argv.
    let seed: u64 = std::env::var("POLYDICE_SEED")
        .unwrap_or_else(|_| DEFAULT_SEED.to_string())
        .parse()
        .map_err(|e| format!("POLYDICE_SEED must be a valid u64: {e}"))?;

    let mut args = std::env::args().skip(1);
    let faces: u32 = args
        .next()
        .unwrap_or_else(|| "6".to_string())
        .parse()
        .map_err(|e| format!("FACES must be a valid u32: {e}"))?;
    let rolls: i64 = args
        .next()
        .unwrap_or_else(|| "1".to_string())
        .parse()
        .map_err(|e| format!("ROLLS must be a valid i64: {e}"))?;

    tracing::debug!(faces, rolls, seed, "rolling");

    let mut rng = FixedSeedRng::new(seed);
    let mut die = Die::with_faces(faces, &mut rng)?;
    println!("fresh d{faces} shows {}", die.value());

    let results = die.roll_many(rolls, &mut rng)?;
    println!("{rolls} roll(s) of d{faces}: {results:?}");

    Ok(())
}
