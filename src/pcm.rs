use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use itertools::Itertools;

use crate::config::SynthConfig;
use crate::error::{LoopError, Result};

/// Fixed-point conversion: scale to full range, truncate toward zero.
///
/// Out-of-range input saturates at the `i16` limits.
pub fn to_pcm_i16(buffer: &[f32], max_amplitude: f32) -> Vec<i16> {
    buffer
        .iter()
        .map(|sample| (sample * max_amplitude) as i16)
        .collect_vec()
}

/// Writes `buffer` as a mono 16-bit WAV, creating parent directories first.
pub fn write_pcm(buffer: &[f32], path: &Path, config: &SynthConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoopError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let spec = WavSpec {
        channels: 1, // mono
        sample_rate: config.sample_rate,
        bits_per_sample: config.bits_per_sample,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).map_err(LoopError::wav(path))?;
    for sample in to_pcm_i16(buffer, config.max_amplitude) {
        writer.write_sample(sample).map_err(LoopError::wav(path))?;
    }
    writer.finalize().map_err(LoopError::wav(path))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn read_pcm(path: &Path) -> (WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).unwrap();
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .unwrap();
    (reader.spec(), samples)
}
