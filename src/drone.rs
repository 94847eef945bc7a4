use std::path::Path;

use log::debug;
use rand::Rng;
use rand_distr::Uniform;

use crate::asset::{save_loop, LoopReport};
use crate::config::SynthConfig;
use crate::error::Result;
use crate::mixing::{mix, normalize};
use crate::shaping::fade;
use crate::waveform::sine;

pub const DURATION: f32 = 6.0;
pub const FILE_NAME: &str = "drone-base.wav";

const HARMONICS: usize = 4;
const FADE: f32 = 0.5;
const HEADROOM: f32 = 0.7;

/// Four detuned harmonics an octave below the tuning reference.
pub fn generate<R: Rng + ?Sized>(config: &SynthConfig, duration: f32, rng: &mut R) -> Vec<f32> {
    let base = config.tuning / 2.0;
    let detune = Uniform::new(-1.0f32, 1.0);

    let (voices, gains): (Vec<_>, Vec<_>) = config
        .harmonic_ratios
        .iter()
        .take(HARMONICS)
        .enumerate()
        .map(|(index, ratio)| {
            let freq = base * ratio + rng.sample(detune);
            // higher harmonics are quieter
            let gain = 1.0 / (index + 1) as f32;
            debug!("drone voice {}: {:.2} Hz, gain {:.3}", index, freq, gain);
            (sine(freq, duration, config.sample_rate), gain)
        })
        .unzip();

    let mut mixed = mix(&voices, Some(gains.as_slice()));
    fade(&mut mixed, FADE, config.sample_rate);
    normalize(&mut mixed, HEADROOM);
    mixed
}

pub fn run<R: Rng + ?Sized>(config: &SynthConfig, output_dir: &Path, rng: &mut R) -> Result<LoopReport> {
    println!("1 :: generating drone loop");
    let drone = generate(config, DURATION, rng);
    save_loop(&drone, output_dir, FILE_NAME, config)
}
