/// Fixed synthesis settings shared by every loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// full-scale value for 16-bit output
    pub max_amplitude: f32,
    /// contemplative 432 Hz tuning
    pub tuning: f32,
    /// minor-like harmonic series, relative to a base frequency
    pub harmonic_ratios: [f32; 6],
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            bits_per_sample: 16,
            max_amplitude: i16::MAX as f32,
            tuning: 432.0,
            harmonic_ratios: [1.0, 1.2, 1.5, 2.0, 2.4, 3.0],
        }
    }
}

#[test]
fn test_default_config() {
    let config = SynthConfig::default();
    assert_eq!(config.sample_rate, 48000);
    assert_eq!(config.max_amplitude, 32767.0);
    assert_eq!(config.harmonic_ratios[..4], [1.0, 1.2, 1.5, 2.0]);
}
