use std::fs;
use std::path::Path;

use crate::boundaries::BoundarySet;
use crate::config::CueHeader;
use crate::error::{Result, WavCueError};
use crate::input::ParsedInput;
use crate::timecode::{format_label, format_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    CueSheet,
    Labels,
}

impl OutputFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::CueSheet => "tracks.cue",
            OutputFormat::Labels => "labels.txt",
        }
    }
}

/// Render the document and write it to `path`, replacing any existing file.
pub fn write_output(
    format: OutputFormat,
    path: &Path,
    input: &ParsedInput,
    boundaries: &BoundarySet,
    header: &CueHeader,
) -> Result<()> {
    let contents = match format {
        OutputFormat::CueSheet => render_cue_sheet(input, boundaries, header),
        OutputFormat::Labels => render_labels(input, boundaries),
    };
    fs::write(path, contents).map_err(|source| WavCueError::IoFailure {
        target: path.display().to_string(),
        source,
    })?;
    log::debug!("wrote {:?} to {}", format, path.display());
    Ok(())
}

pub fn render_cue_sheet(input: &ParsedInput, boundaries: &BoundarySet, header: &CueHeader) -> String {
    let mut out = String::new();
    out.push_str(&format!("REM GENRE {}\n", header.genre));
    out.push_str(&format!("REM DATE {}\n", header.date));
    out.push_str(&format!("TITLE {}\n", cue_value(&header.title)));
    out.push_str(&format!("PERFORMER {}\n", cue_value(&header.performer)));
    out.push_str(&format!("FILE \"{}.wav\" WAVE\n\n", input.base_name));

    for (idx, track) in input.tracks.iter().enumerate() {
        let (start, _) = boundaries.span(idx);
        out.push_str(&format!("  TRACK {:02} AUDIO\n", idx + 1));
        out.push_str(&format!("    TITLE \"{}\"\n", track.name));
        out.push_str(&format!("    INDEX 01 {}\n\n", format_time(start)));
    }
    out
}

pub fn render_labels(input: &ParsedInput, boundaries: &BoundarySet) -> String {
    let mut out = String::new();
    for (idx, track) in input.tracks.iter().enumerate() {
        let (start, end) = boundaries.span(idx);
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            format_label(start),
            format_label(end),
            track.name
        ));
    }
    out
}

/// Bare single words stay unquoted so the default placeholders read as before.
fn cue_value(value: &str) -> String {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
