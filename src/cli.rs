use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build a CD cue sheet or an audio-editor label file from a plain-text track list
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Track list: a `name,duration` base line, a `---` separator, then one line per track
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write an audio-editor label file (labels.txt) instead of a cue sheet (tracks.cue)
    #[arg(long)]
    pub labels: bool,

    /// Treat track times as absolute start offsets instead of durations
    #[arg(long)]
    pub cumulative: bool,

    /// Field order of track lines. `name-time` reads the legacy `name,duration` layout.
    #[arg(long, value_enum, default_value_t = FieldOrder::TimeName)]
    pub field_order: FieldOrder,

    /// Proceed without prompting when the total/sum mismatch is borderline
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Output file (default: tracks.cue or labels.txt in the working directory)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Cue sheet `REM GENRE` value
    #[arg(long)]
    pub genre: Option<String>,

    /// Cue sheet `REM DATE` value
    #[arg(long)]
    pub date: Option<String>,

    /// Cue sheet album `TITLE`
    #[arg(long)]
    pub title: Option<String>,

    /// Cue sheet album `PERFORMER`
    #[arg(long)]
    pub performer: Option<String>,

    /// JSON file with output settings (output_path, genre, date, title, performer). CLI arguments override values in the file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the resolved output settings to this file as JSON. If no file is provided, the input file name with a .json extension is used.
    #[arg(short = 'w', long = "write-config", num_args = 0..=1, value_name = "FILE")]
    pub write_config: Option<Option<PathBuf>>,

    /// Show debug logs.
    #[arg(short = 'g', long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldOrder {
    /// `<time>,<name>`
    TimeName,
    /// `<name>,<time>`
    NameTime,
}
