use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavCueError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("Invalid input file '{}': {reason}", path.display())]
    InvalidInputFile { path: PathBuf, reason: String },
    #[error("Multiple BASE lines found (line {line})")]
    MultipleBaseLines { line: usize },
    #[error("Invalid input format - missing BASE or tracks")]
    MissingRequiredSections,
    #[error("Invalid line format in input file (line {line}: {reason})")]
    InvalidLineFormat { line: usize, reason: String },
    #[error("Invalid time format: '{0}'")]
    InvalidTimeFormat(String),
    #[error("Time mismatch too large ({gap:.3}s >= {threshold:.3}s)")]
    MismatchTooLarge { gap: f64, threshold: f64 },
    #[error("Aborted by user")]
    AbortedByUser,
    #[error("First track must start at 00:00:00.000 (found {found})")]
    FirstTrackMustStartAtZero { found: String },
    #[error("Track starts must be strictly increasing (track {track} starts at {start})")]
    StartsNotIncreasing { track: usize, start: String },
    #[error("Last track start {start} exceeds file duration {duration}")]
    LastStartExceedsDuration { start: String, duration: String },
    #[error("Failed to write {target}")]
    IoFailure {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl WavCueError {
    /// Process exit status reported for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            WavCueError::FileNotFound(_) | WavCueError::InvalidInputFile { .. } => 3,
            WavCueError::MultipleBaseLines { .. }
            | WavCueError::MissingRequiredSections
            | WavCueError::InvalidLineFormat { .. }
            | WavCueError::InvalidTimeFormat(_) => 4,
            WavCueError::MismatchTooLarge { .. }
            | WavCueError::FirstTrackMustStartAtZero { .. }
            | WavCueError::StartsNotIncreasing { .. }
            | WavCueError::LastStartExceedsDuration { .. } => 5,
            WavCueError::AbortedByUser => 6,
            WavCueError::IoFailure { .. } => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, WavCueError>;
