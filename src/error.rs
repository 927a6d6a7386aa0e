use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a run. Malformed label lines are never reported here.
#[derive(Debug, Error)]
pub enum LabelStatsError {
    #[error("failed to read val file {}: {source}", .path.display())]
    ValFile { path: PathBuf, source: io::Error },

    #[error("label directory does not exist or is not a directory: {}", .path.display())]
    LabelDir { path: PathBuf },

    #[error("failed to scan label directory: {0}")]
    LabelDirScan(#[from] glob::GlobError),

    #[error("invalid label directory pattern: {0}")]
    LabelDirPattern(#[from] glob::PatternError),

    #[error("failed to read label file {}: {source}", .path.display())]
    LabelFile { path: PathBuf, source: io::Error },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LabelStatsError>;
