use std::f64::consts::PI;

use itertools::Itertools;

/// Number of samples covering `duration` seconds, truncated.
///
/// The product stays in `f32` so decimal durations like 0.7s land on the
/// count they read as, not one sample short.
pub fn sample_count(duration: f32, sample_rate: u32) -> usize {
    (duration * sample_rate as f32) as usize
}

/// Sample instants over `[0, duration)`, one per output sample.
pub fn time_grid(duration: f32, sample_rate: u32) -> impl Iterator<Item = f64> {
    let length = sample_count(duration, sample_rate);
    let duration = duration as f64;
    (0..length).map(move |index| index as f64 * duration / length as f64)
}

/// `n` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end as f64 - start as f64) / (n - 1) as f64;
            (0..n)
                .map(|index| match index {
                    last if last == n - 1 => end,
                    _ => (start as f64 + step * index as f64) as f32,
                })
                .collect_vec()
        }
    }
}

pub fn sine(freq: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let omega = 2.0 * PI * freq as f64;
    time_grid(duration, sample_rate)
        .map(|t| (omega * t).sin() as f32)
        .collect_vec()
}

/// Triangle wave built as `asin(sin(x))`, scaled to [-1, 1].
pub fn triangle(freq: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let omega = 2.0 * PI * freq as f64;
    time_grid(duration, sample_rate)
        .map(|t| (2.0 * (omega * t).sin().asin() / PI) as f32)
        .collect_vec()
}
