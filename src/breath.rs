use std::path::Path;

use crate::asset::{save_loop, LoopReport};
use crate::config::SynthConfig;
use crate::error::Result;
use crate::mixing::normalize;
use crate::shaping::fade;
use crate::waveform::{linspace, sine, time_grid};

pub const DURATION: f32 = 11.0;
pub const FILE_NAME: &str = "breath-cycle.wav";

const CARRIER: f32 = 216.0;
const FADE: f32 = 1.0;
const HEADROOM: f32 = 0.4;

/// One linear segment of the breathing cycle, in absolute seconds.
struct Phase {
    until: f64,
    from: f32,
    to: f32,
}

/// 4s inhale, 6s exhale; anything after 10s is the pause and stays silent.
const CYCLE: [Phase; 2] = [
    Phase {
        until: 4.0,
        from: 0.0,
        to: 0.5,
    },
    Phase {
        until: 10.0,
        from: 0.5,
        to: 0.0,
    },
];

/// Gain over the loop. The phase boundaries do not scale with `duration`.
pub fn breath_shape(duration: f32, sample_rate: u32) -> Vec<f32> {
    let times = time_grid(duration, sample_rate).collect::<Vec<_>>();
    let mut shape = vec![0.0f32; times.len()];

    let mut start = 0;
    for phase in CYCLE.iter() {
        let len = times[start..].iter().take_while(|&&t| t < phase.until).count();
        shape[start..start + len].copy_from_slice(&linspace(phase.from, phase.to, len));
        start += len;
    }
    shape
}

/// Low carrier swelling and falling with a breath-paced cycle.
pub fn generate(config: &SynthConfig, duration: f32) -> Vec<f32> {
    let shape = breath_shape(duration, config.sample_rate);
    let mut modulated = sine(CARRIER, duration, config.sample_rate);
    modulated
        .iter_mut()
        .zip(shape)
        .for_each(|(sample, gain)| *sample *= gain);

    fade(&mut modulated, FADE, config.sample_rate);
    normalize(&mut modulated, HEADROOM);
    modulated
}

pub fn run(config: &SynthConfig, output_dir: &Path) -> Result<LoopReport> {
    println!("3 :: generating breath loop");
    let breath = generate(config, DURATION);
    save_loop(&breath, output_dir, FILE_NAME, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::peak;
    use crate::spectrum::dominant_frequency;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_breath_shape_phases() {
        let shape = breath_shape(11.0, 48000);
        assert_eq!(shape.len(), 528000);
        assert_eq!(shape[0], 0.0);
        // inhale peaks on its last sample, exhale restarts from the top
        assert_eq!(shape[191999], 0.5);
        assert_eq!(shape[192000], 0.5);
        assert_eq!(shape[479999], 0.0);
        assert!(shape[480000..].iter().all(|&g| g == 0.0));
        assert_abs_diff_eq!(shape[96000], 0.25, epsilon = 1e-5);
    }

    #[test]
    fn test_breath_shape_short_loop() {
        // a 2s loop only ever inhales
        let shape = breath_shape(2.0, 1000);
        assert_eq!(shape.len(), 2000);
        assert_eq!(shape[1999], 0.5);
    }

    #[test]
    fn test_breath_silences() {
        let config = SynthConfig::default();
        let breath = generate(&config, 11.0);
        assert_eq!(breath.len(), 528000);
        assert_eq!(breath[0], 0.0);
        assert_eq!(breath[(10.5 * 48000.0) as usize], 0.0);
        assert_abs_diff_eq!(peak(&breath), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_breath_carrier() {
        let config = SynthConfig::default();
        let breath = generate(&config, 11.0);
        let dominant = dominant_frequency(&breath, config.sample_rate).unwrap();
        assert!((dominant - 216.0).abs() < 0.5, "dominant {}", dominant);
    }
}
