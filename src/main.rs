mod asset;
mod breath;
mod config;
mod drone;
mod error;
mod mixing;
mod pad;
mod pcm;
mod shaping;
mod spectrum;
mod texture;
mod waveform;

use std::path::{Path, PathBuf};

use env_logger::Env;
use log::info;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::asset::LoopReport;
use crate::config::SynthConfig;

/// Loops land in a `loops/` directory beside the executable.
fn output_dir_for(executable: &Path) -> PathBuf {
    executable.parent().unwrap_or_else(|| Path::new(".")).join("loops")
}

/// Renders every loop into `output_dir`, stopping at the first failure.
fn generate_all<R: Rng + ?Sized>(
    config: &SynthConfig,
    output_dir: &Path,
    rng: &mut R,
) -> error::Result<Vec<LoopReport>> {
    Ok(vec![
        drone::run(config, output_dir, rng)?,
        texture::run(config, output_dir, rng)?,
        breath::run(config, output_dir)?,
        pad::run(config, output_dir)?,
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("THE HOLD - Loop Asset Generator");
    println!("{}", "=".repeat(40));

    let seed: u64 = rand::random();
    info!("random seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let output_dir = output_dir_for(&std::env::current_exe()?);
    let reports = generate_all(&SynthConfig::default(), &output_dir, &mut rng)?;

    println!("{}", "=".repeat(40));
    println!("Loop generation complete! ({} files)", reports.len());
    println!("Output directory: {}", output_dir.display());
    Ok(())
}
