use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoopError>;

#[derive(Error, Debug)]
pub enum LoopError {
    #[error("failed to create output directory: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write audio file: {}", .path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

impl LoopError {
    pub(crate) fn wav(path: &std::path::Path) -> impl FnOnce(hound::Error) -> Self + '_ {
        move |source| LoopError::Wav {
            path: path.to_path_buf(),
            source,
        }
    }
}
