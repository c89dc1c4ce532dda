use std::fs;
use std::io;
use std::path::Path;

use crate::cli::FieldOrder;
use crate::error::{Result, WavCueError};
use crate::timecode::parse_time;

const SEPARATOR: &str = "---";

/// One track line. `seconds` is a duration or an absolute start offset,
/// depending on the boundary mode the caller picks.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    pub name: String,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub base_name: String,
    pub base_duration: f64,
    pub tracks: Vec<TrackEntry>,
}

pub fn read_input(path: &Path, order: FieldOrder) -> Result<ParsedInput> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => WavCueError::FileNotFound(path.to_path_buf()),
        _ => WavCueError::InvalidInputFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    })?;
    let contents = String::from_utf8(bytes).map_err(|err| WavCueError::InvalidInputFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    parse_input(&contents, order)
}

pub fn parse_input(contents: &str, order: FieldOrder) -> Result<ParsedInput> {
    let mut separator_found = false;
    let mut base_line: Option<(usize, &str)> = None;
    let mut track_lines = Vec::new();

    let lines = contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    for (number, line) in lines {
        if line == SEPARATOR {
            // a repeated separator is tolerated and changes nothing
            separator_found = true;
            continue;
        }

        if !separator_found {
            if base_line.is_some() {
                return Err(WavCueError::MultipleBaseLines { line: number });
            }
            base_line = Some((number, line));
        } else if line.contains(',') {
            track_lines.push((number, line));
        } else {
            log::debug!("skipping line {} without a comma: {:?}", number, line);
        }
    }

    let Some((base_number, base_line)) = base_line else {
        return Err(WavCueError::MissingRequiredSections);
    };
    if track_lines.is_empty() {
        return Err(WavCueError::MissingRequiredSections);
    }

    let (base_name, base_time) = split_fields(base_line, FieldOrder::NameTime)
        .ok_or_else(|| WavCueError::InvalidLineFormat {
            line: base_number,
            reason: "expected <name>,<duration>".to_string(),
        })?;
    let base_duration = parse_time_field(base_number, base_time)?;

    let mut tracks = Vec::with_capacity(track_lines.len());
    for (number, line) in track_lines {
        let (name, time) = split_fields(line, order).ok_or_else(|| {
            WavCueError::InvalidLineFormat {
                line: number,
                reason: "expected two comma-separated fields".to_string(),
            }
        })?;
        if name.is_empty() {
            return Err(WavCueError::InvalidLineFormat {
                line: number,
                reason: "track name is empty".to_string(),
            });
        }
        tracks.push(TrackEntry {
            name: name.to_string(),
            seconds: parse_time_field(number, time)?,
        });
    }

    log::debug!(
        "parsed base {:?} ({:.3}s) with {} tracks",
        base_name,
        base_duration,
        tracks.len()
    );

    Ok(ParsedInput {
        base_name: base_name.to_string(),
        base_duration,
        tracks,
    })
}

/// Split a line into trimmed `(name, time)` according to the field order.
/// Names keep any commas of their own: the split happens on the comma next
/// to the time field.
fn split_fields(line: &str, order: FieldOrder) -> Option<(&str, &str)> {
    match order {
        FieldOrder::TimeName => {
            let (time, name) = line.split_once(',')?;
            Some((name.trim(), time.trim()))
        }
        FieldOrder::NameTime => {
            let (name, time) = line.rsplit_once(',')?;
            Some((name.trim(), time.trim()))
        }
    }
}

fn parse_time_field(line: usize, text: &str) -> Result<f64> {
    parse_time(text).map_err(|err| WavCueError::InvalidLineFormat {
        line,
        reason: err.to_string(),
    })
}
