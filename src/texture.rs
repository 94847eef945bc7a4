use std::path::Path;

use itertools::Itertools;
use log::debug;
use rand::Rng;

use crate::asset::{save_loop, LoopReport};
use crate::config::SynthConfig;
use crate::error::Result;
use crate::mixing::{mix, normalize};
use crate::shaping::{envelope, fade};
use crate::waveform::sine;

pub const DURATION: f32 = 4.0;
pub const FILE_NAME: &str = "texture-grains.wav";

const GRAINS: usize = 5;
const ATTACK: f32 = 0.3;
const RELEASE: f32 = 0.3;
const FADE: f32 = 0.3;
const HEADROOM: f32 = 0.5;

/// Random parameters of one overlapping tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grain {
    pub frequency: f32,
    /// drawn placement inside the loop; the tone itself always spans the loop
    pub onset: f32,
    pub length: f32,
    /// level multiplier standing in for a stereo position
    pub pan: f32,
}

impl Grain {
    pub fn random<R: Rng + ?Sized>(duration: f32, rng: &mut R) -> Self {
        let frequency = rng.gen_range(200.0..800.0);
        let length = rng.gen_range(1.0..3.0);
        let onset = match duration - length {
            room if room > 0.0 => rng.gen_range(0.0..room),
            _ => 0.0,
        };
        let pan = rng.gen_range(0.5..1.0);
        Self {
            frequency,
            onset,
            length,
            pan,
        }
    }

    fn render(&self, duration: f32, sample_rate: u32) -> Vec<f32> {
        let mut tone = sine(self.frequency, duration, sample_rate);
        envelope(&mut tone, ATTACK, RELEASE, sample_rate);
        tone.iter_mut().for_each(|sample| *sample *= self.pan);
        tone
    }
}

/// Granular-style bed of five full-length tones at random pitches and levels.
pub fn generate<R: Rng + ?Sized>(config: &SynthConfig, duration: f32, rng: &mut R) -> Vec<f32> {
    let tones = (0..GRAINS)
        .map(|_| Grain::random(duration, rng))
        .inspect(|grain| {
            debug!(
                "texture grain {:.1} Hz, pan {:.2}, drawn onset {:.2}s length {:.2}s",
                grain.frequency, grain.pan, grain.onset, grain.length
            )
        })
        .map(|grain| grain.render(duration, config.sample_rate))
        .collect_vec();

    let mut mixed = mix(&tones, None);
    fade(&mut mixed, FADE, config.sample_rate);
    normalize(&mut mixed, HEADROOM);
    mixed
}

pub fn run<R: Rng + ?Sized>(config: &SynthConfig, output_dir: &Path, rng: &mut R) -> Result<LoopReport> {
    println!("2 :: generating texture loop");
    let texture = generate(config, DURATION, rng);
    save_loop(&texture, output_dir, FILE_NAME, config)
}
