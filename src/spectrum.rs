use rustfft::{num_complex::Complex, FftPlanner};

pub fn fft_of(buffer: &[f32]) -> Vec<Complex<f32>> {
    let mut spectrum = buffer
        .iter()
        .map(|&v| Complex { re: v, im: 0.0f32 })
        .collect::<Vec<_>>();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(spectrum.len());
    fft.process(&mut spectrum);
    spectrum
}

/// Magnitudes of the non-negative frequency bins.
pub fn magnitudes(buffer: &[f32]) -> Vec<f32> {
    let half = buffer.len() / 2 + 1;
    fft_of(buffer)
        .into_iter()
        .take(half)
        .map(|c| c.norm())
        .collect()
}

/// Frequency of the strongest bin, ignoring DC.
pub fn dominant_frequency(buffer: &[f32], sample_rate: u32) -> Option<f32> {
    if buffer.len() < 2 {
        return None;
    }
    let bin_width = sample_rate as f32 / buffer.len() as f32;
    magnitudes(buffer)
        .into_iter()
        .enumerate()
        .skip(1)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(bin, _)| bin as f32 * bin_width)
}

#[test]
fn test_dominant_frequency_of_sine() {
    let tone = crate::waveform::sine(440.0, 0.5, 48000);
    let found = dominant_frequency(&tone, 48000).unwrap();
    assert!((found - 440.0).abs() < 2.0, "found {}", found);
}

#[test]
fn test_dominant_frequency_picks_loudest() {
    let quiet = crate::waveform::sine(300.0, 1.0, 8000);
    let loud = crate::waveform::sine(1200.0, 1.0, 8000);
    let mixed = crate::mixing::mix(&[quiet, loud], Some(&[0.2, 0.8][..]));
    assert_eq!(dominant_frequency(&mixed, 8000), Some(1200.0));
}

#[test]
fn test_too_short_for_spectrum() {
    assert_eq!(dominant_frequency(&[0.3], 48000), None);
    assert_eq!(magnitudes(&[1.0, 1.0, 1.0, 1.0]).len(), 3);
}
