use std::path::Path;

use crate::asset::{save_loop, LoopReport};
use crate::config::SynthConfig;
use crate::error::Result;
use crate::mixing::{mix, normalize};
use crate::shaping::fade;
use crate::waveform::{sine, triangle};

pub const DURATION: f32 = 8.0;
pub const FILE_NAME: &str = "pad-warm.wav";

/// fundamental, octave, fifth
pub const GAINS: [f32; 3] = [0.5, 0.3, 0.2];
const FADE: f32 = 1.5;
const HEADROOM: f32 = 0.6;

/// Warm pad: a triangle two octaves below the tuning reference with sine
/// overtones at the octave and the fifth.
pub fn generate(config: &SynthConfig, duration: f32) -> Vec<f32> {
    let base = config.tuning / 4.0;
    let voices = vec![
        triangle(base, duration, config.sample_rate),
        sine(base * 2.0, duration, config.sample_rate),
        sine(base * 1.5, duration, config.sample_rate),
    ];

    let mut mixed = mix(&voices, Some(&GAINS[..]));
    fade(&mut mixed, FADE, config.sample_rate);
    normalize(&mut mixed, HEADROOM);
    mixed
}

pub fn run(config: &SynthConfig, output_dir: &Path) -> Result<LoopReport> {
    println!("4 :: generating pad loop");
    let pad = generate(config, DURATION);
    save_loop(&pad, output_dir, FILE_NAME, config)
}

#[test]
fn test_pad_gains_sum_to_unity() {
    approx::assert_abs_diff_eq!(GAINS.iter().sum::<f32>(), 1.0);
}

#[test]
fn test_pad_shape() {
    let config = SynthConfig::default();
    let pad = generate(&config, 8.0);
    assert_eq!(pad.len(), 384000);
    approx::assert_abs_diff_eq!(crate::mixing::peak(&pad), 0.6, epsilon = 1e-6);
    assert_eq!(pad[0], 0.0);
    assert_eq!(pad[383999], 0.0);

    let dominant = crate::spectrum::dominant_frequency(&pad, config.sample_rate).unwrap();
    approx::assert_abs_diff_eq!(dominant, 108.0, epsilon = 0.2);
}

#[test]
fn test_pad_is_deterministic() {
    let config = SynthConfig::default();
    assert_eq!(generate(&config, 2.0), generate(&config, 2.0));
}
