use comfy_table::{Table, presets::UTF8_FULL};

use crate::boundaries::{BoundaryMode, BoundarySet};
use crate::input::ParsedInput;
use crate::timecode::format_time;

pub fn track_table(input: &ParsedInput, boundaries: &BoundarySet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Title", "Start", "End", "Length"]);

    for (idx, track) in input.tracks.iter().enumerate() {
        let (start, end) = boundaries.span(idx);
        table.add_row(vec![
            format!("{:02}", idx + 1),
            track.name.clone(),
            format_time(start),
            format_time(end),
            format_time(end - start),
        ]);
    }
    table
}

pub fn summary_table(
    input: &ParsedInput,
    boundaries: &BoundarySet,
    mode: BoundaryMode,
    output: &str,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Parameter", "Value"]);

    table
        .add_row(vec!["Mode".to_string(), format!("{} mode", mode)])
        .add_row(vec![
            format!("{} duration", input.base_name),
            format_time(input.base_duration),
        ])
        .add_row(vec![
            "Tracks sum".to_string(),
            format_time(boundaries.track_total),
        ])
        .add_row(vec![
            "Total difference".to_string(),
            format!("{:.3}s", boundaries.gap),
        ])
        .add_row(vec![
            "Track count".to_string(),
            boundaries.track_count.to_string(),
        ]);

    if mode == BoundaryMode::Duration {
        table
            .add_row(vec![
                "Adjustment per track".to_string(),
                format!("{:+.3}s", boundaries.adjustment_per_track),
            ])
            .add_row(vec![
                "Total adjustment".to_string(),
                format!(
                    "{:+.3}s",
                    boundaries.adjustment_per_track * boundaries.track_count as f64
                ),
            ]);
    }

    table.add_row(vec!["Output File".to_string(), output.to_string()]);
    table
}

pub fn print_report(
    input: &ParsedInput,
    boundaries: &BoundarySet,
    mode: BoundaryMode,
    output: &str,
) {
    println!("\n▶️ Tracks:");
    println!("{}", track_table(input, boundaries));
    println!("\n▶️ {} mode summary:", mode);
    println!("{}", summary_table(input, boundaries, mode, output));
    println!("✅ Generated: {}", output);
}
