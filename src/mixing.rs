/// Weighted sum of equal-length voices.
///
/// Without `gains` every voice gets `1 / voices.len()`. Voices longer than the
/// first are cut to its length; shorter ones only contribute to their prefix.
pub fn mix(voices: &[Vec<f32>], gains: Option<&[f32]>) -> Vec<f32> {
    let first = match voices.first() {
        Some(first) => first,
        None => return vec![],
    };
    let equal = vec![1.0 / voices.len() as f32; voices.len()];
    let gains = gains.unwrap_or(equal.as_slice());

    let mut mixed = vec![0.0f32; first.len()];
    for (voice, gain) in voices.iter().zip(gains) {
        mixed
            .iter_mut()
            .zip(voice)
            .for_each(|(out, sample)| *out += sample * gain);
    }
    mixed
}

pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Rescales so the loudest sample sits at `headroom`. Silence stays silent.
pub fn normalize(buffer: &mut [f32], headroom: f32) {
    let peak = peak(buffer);
    if peak > 0.0 {
        let scale = headroom / peak;
        buffer.iter_mut().for_each(|sample| *sample *= scale);
    }
}

#[test]
fn test_mix_with_gains() {
    let voices = vec![vec![1.0, -1.0, 0.5], vec![0.5, 0.5, 0.5], vec![0.0, 1.0, -1.0]];
    let mixed = mix(&voices, Some(&[0.5, 0.3, 0.2][..]));
    let expected = (0..3)
        .map(|i| 0.5 * voices[0][i] + 0.3 * voices[1][i] + 0.2 * voices[2][i])
        .collect::<Vec<f32>>();
    for (got, want) in mixed.iter().zip(expected) {
        approx::assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
}

#[test]
fn test_mix_equal_weights() {
    let voices = vec![vec![1.0; 4], vec![0.0; 4], vec![-0.5; 4], vec![2.0; 4]];
    let mixed = mix(&voices, None);
    assert_eq!(mixed, vec![0.625; 4]);
}

#[test]
fn test_mix_mismatched_lengths() {
    let voices = vec![vec![1.0; 3], vec![1.0; 5], vec![1.0; 1]];
    let mixed = mix(&voices, Some(&[1.0, 1.0, 1.0][..]));
    assert_eq!(mixed, vec![3.0, 2.0, 2.0]);
}

#[test]
fn test_mix_empty() {
    assert!(mix(&[], None).is_empty());
}

#[test]
fn test_normalize_to_headroom() {
    let mut buffer = vec![0.25, -2.0, 1.0];
    normalize(&mut buffer, 0.7);
    approx::assert_abs_diff_eq!(peak(&buffer), 0.7);
    approx::assert_abs_diff_eq!(buffer[0], 0.0875, epsilon = 1e-6);
    approx::assert_abs_diff_eq!(buffer[1], -0.7, epsilon = 1e-6);
}

#[test]
fn test_normalize_silence() {
    let mut buffer = vec![0.0; 16];
    normalize(&mut buffer, 0.5);
    assert_eq!(buffer, vec![0.0; 16]);
}
