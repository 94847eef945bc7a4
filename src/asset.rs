use std::path::{Path, PathBuf};

use log::{info, log_enabled, Level};

use crate::config::SynthConfig;
use crate::error::Result;
use crate::mixing::peak;
use crate::pcm::write_pcm;
use crate::spectrum::dominant_frequency;

/// What one generator left on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopReport {
    pub path: PathBuf,
    pub samples: usize,
    pub peak: f32,
    /// only measured when info logging is on
    pub dominant_frequency: Option<f32>,
}

pub fn save_loop(
    buffer: &[f32],
    output_dir: &Path,
    file_name: &str,
    config: &SynthConfig,
) -> Result<LoopReport> {
    let path = output_dir.join(file_name);
    write_pcm(buffer, &path, config)?;

    let report = LoopReport {
        path,
        samples: buffer.len(),
        peak: peak(buffer),
        dominant_frequency: if log_enabled!(Level::Info) {
            dominant_frequency(buffer, config.sample_rate)
        } else {
            None
        },
    };
    println!("Saved: {}", report.path.display());
    info!(
        "{}: {} samples ({:.2}s), peak {:.3}, dominant {}",
        file_name,
        report.samples,
        report.samples as f32 / config.sample_rate as f32,
        report.peak,
        report
            .dominant_frequency
            .map(|hz| format!("{:.1} Hz", hz))
            .unwrap_or_else(|| "n/a".to_string()),
    );
    Ok(report)
}
