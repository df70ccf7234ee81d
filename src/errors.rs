use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerfGateError {
    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No current benchmark results found in {}", .0.display())]
    NoCurrentResults(PathBuf),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PerfGateError {
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        PerfGateError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn no_current_results<P: AsRef<Path>>(path: P) -> Self {
        PerfGateError::NoCurrentResults(path.as_ref().to_path_buf())
    }

    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        PerfGateError::InvalidConfig(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        PerfGateError::InvalidInput(msg.into())
    }
}
