//! Gain ramps applied in place: loop-boundary fades and attack/release envelopes.

use crate::waveform::{linspace, sample_count};

fn apply_ramp<'a>(region: impl Iterator<Item = &'a mut f32>, ramp: &[f32]) {
    region.zip(ramp).for_each(|(sample, gain)| *sample *= gain);
}

/// Start index and visible part of `ramp` when it ends on the last of `len`
/// samples. A ramp longer than `len` loses its head.
fn anchor_end(len: usize, ramp: &[f32]) -> (usize, &[f32]) {
    let tail = len.saturating_sub(ramp.len());
    let skipped = ramp.len().saturating_sub(len);
    (tail, &ramp[skipped..])
}

/// Fades the first and last `fade_duration` seconds in and out.
///
/// The two ramps are applied one after the other, so a buffer shorter than
/// twice the fade gets both gains on the overlapping samples.
pub fn fade(buffer: &mut [f32], fade_duration: f32, sample_rate: u32) {
    let fade_samples = sample_count(fade_duration, sample_rate);
    if fade_samples == 0 {
        return;
    }
    apply_ramp(buffer.iter_mut(), &linspace(0.0, 1.0, fade_samples));

    let fade_out = linspace(1.0, 0.0, fade_samples);
    let (tail, fade_out) = anchor_end(buffer.len(), &fade_out);
    apply_ramp(buffer[tail..].iter_mut(), fade_out);
}

/// Linear attack from silence and linear release back to silence.
///
/// Where attack and release regions overlap, the release ramp wins. Ramps
/// longer than the buffer are cut, not squeezed, same as `fade`.
pub fn envelope(buffer: &mut [f32], attack: f32, release: f32, sample_rate: u32) {
    let length = buffer.len();
    let mut profile = vec![1.0f32; length];

    let attack_ramp = linspace(0.0, 1.0, sample_count(attack, sample_rate));
    profile
        .iter_mut()
        .zip(&attack_ramp)
        .for_each(|(gain, ramp)| *gain = *ramp);

    let release_ramp = linspace(1.0, 0.0, sample_count(release, sample_rate));
    let (tail, release_ramp) = anchor_end(length, &release_ramp);
    profile[tail..].copy_from_slice(release_ramp);

    apply_ramp(buffer.iter_mut(), &profile);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fade_leaves_middle_untouched() {
        let original = vec![0.8f32; 1000];
        let mut faded = original.clone();
        fade(&mut faded, 0.1, 1000);

        assert_eq!(&faded[100..900], &original[100..900]);
        assert_eq!(faded[0], 0.0);
        assert_eq!(faded[999], 0.0);
        assert_abs_diff_eq!(faded[99], 0.8);
        assert_abs_diff_eq!(faded[900], 0.8);
        assert_abs_diff_eq!(faded[50], 0.8 * 50.0 / 99.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fade_overlap_composes() {
        // 6 samples with 4-sample ramps: indices 2 and 3 get both gains
        let mut buffer = vec![1.0f32; 6];
        fade(&mut buffer, 4.0, 1);

        let fade_in = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0];
        let fade_out = [1.0, 1.0, 1.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
        for index in 0..6 {
            assert_abs_diff_eq!(buffer[index], fade_in[index] * fade_out[index], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fade_longer_than_buffer() {
        let mut buffer = vec![1.0f32; 3];
        fade(&mut buffer, 5.0, 1);
        // ramps are clipped to the buffer, anchored at its start and end
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer, vec![0.0, 0.0625, 0.0]);
    }

    #[test]
    fn test_zero_fade_is_noop() {
        let mut buffer = vec![0.5f32; 10];
        fade(&mut buffer, 0.0, 48000);
        assert_eq!(buffer, vec![0.5f32; 10]);
    }

    #[test]
    fn test_envelope_attack_and_release() {
        let mut buffer = vec![1.0f32; 10];
        envelope(&mut buffer, 3.0, 2.0, 1);
        assert_eq!(buffer, vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_envelope_longer_than_buffer_is_cut() {
        // an 8-sample attack over 4 samples keeps its first half
        let mut buffer = vec![1.0f32; 4];
        envelope(&mut buffer, 8.0, 0.0, 1);
        for (index, gain) in [0.0, 1.0 / 7.0, 2.0 / 7.0, 3.0 / 7.0].iter().enumerate() {
            assert_abs_diff_eq!(buffer[index], *gain, epsilon = 1e-6);
        }

        // and an 8-sample release keeps its second half
        let mut buffer = vec![1.0f32; 4];
        envelope(&mut buffer, 0.0, 8.0, 1);
        for (index, gain) in [3.0 / 7.0, 2.0 / 7.0, 1.0 / 7.0, 0.0].iter().enumerate() {
            assert_abs_diff_eq!(buffer[index], *gain, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_envelope_matches_fade_when_clipped() {
        let mut enveloped = vec![1.0f32; 3];
        envelope(&mut enveloped, 5.0, 0.0, 1);
        let mut faded = vec![1.0f32; 3];
        fade(&mut faded, 5.0, 1);
        // fade also applies its out-ramp, so compare the in-ramp alone
        assert_eq!(enveloped, vec![0.0, 0.25, 0.5]);
        assert_eq!(faded[1], enveloped[1] * 0.25);
    }

    #[test]
    fn test_envelope_release_wins_overlap() {
        let mut buffer = vec![1.0f32; 4];
        envelope(&mut buffer, 4.0, 3.0, 1);
        assert_eq!(buffer, vec![0.0, 1.0, 0.5, 0.0]);
    }
}
