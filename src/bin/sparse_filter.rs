//! Runs the sparse filtering pipeline on an image file.
//!
//! ```text
//! sparse_filter <input> <output> [num_samples] [radius] [sigma] [seed]
//! ```
//!
//! Defaults are 20 samples, radius 4 and sigma 0.9. Pass a seed for a
//! reproducible run; without one the RNG is seeded from entropy. Set
//! `RUST_LOG=debug` to print per-stage timings.

use std::{error::Error, str::FromStr};

use rand::{SeedableRng, rngs::StdRng};
use sparse_filter_kit::{SparseFilterExt, clamp_to_rgb8};

const DEFAULT_NUM_SAMPLES: usize = 20;
const DEFAULT_RADIUS: f32 = 4.0;
const DEFAULT_SIGMA: f32 = 0.9;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("Usage: sparse_filter <input> <output> [num_samples] [radius] [sigma] [seed]");
        return Err("missing input and output paths".into());
    };
    let num_samples = parse_or(args.next(), DEFAULT_NUM_SAMPLES)?;
    let radius = parse_or(args.next(), DEFAULT_RADIUS)?;
    let sigma = parse_or(args.next(), DEFAULT_SIGMA)?;
    let seed: Option<u64> = args.next().map(|arg| arg.parse()).transpose()?;

    let image = image::open(&input)?.to_rgb8();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (filtered, interpolated) = image.sparse_filter(num_samples, radius, sigma, &mut rng)?;

    clamp_to_rgb8(&filtered).save(&output)?;
    println!("interpolated values (r, g, b): {interpolated:?}");

    Ok(())
}

fn parse_or<T>(arg: Option<String>, default: T) -> Result<T, T::Err>
where
    T: FromStr,
{
    arg.map_or(Ok(default), |value| value.parse())
}
