use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::boundaries::{BoundaryMode, compute_boundaries};
use crate::cli::Args;
use crate::config::OutputConfig;
use crate::confirm::{Confirm, FixedAnswer, StdinConfirm};
use crate::input::read_input;
use crate::report::print_report;
use crate::writer::{OutputFormat, write_output};

pub fn run(args: Args) -> Result<()> {
    let format = if args.labels {
        OutputFormat::Labels
    } else {
        OutputFormat::CueSheet
    };
    let mode = if args.cumulative {
        BoundaryMode::Cumulative
    } else {
        BoundaryMode::Duration
    };

    // CLI arguments override values from the config file
    let file_config = OutputConfig::load(args.config.as_deref())?.unwrap_or_default();
    let config = cli_overrides(&args).or(file_config);
    let output = config
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    if output == args.input {
        bail!("Input and output file cannot be the same.");
    }
    let settings_target = args
        .write_config
        .as_ref()
        .map(|path| config_target(&args.input, path.as_deref()))
        .transpose()?;
    log::debug!("resolved settings: {:?}", config);

    let input = read_input(&args.input, args.field_order)?;

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(StdinConfirm)
    };
    let boundaries = compute_boundaries(
        input.base_duration,
        &input.tracks,
        mode,
        confirm.as_mut(),
    )?;

    write_output(format, &output, &input, &boundaries, &config.cue_header())?;

    if let Some(target) = settings_target {
        write_config_file(&target, &config)?;
        println!("✅ Wrote settings to {}", target.display());
    }

    print_report(&input, &boundaries, mode, &output.display().to_string());
    Ok(())
}

fn cli_overrides(args: &Args) -> OutputConfig {
    OutputConfig {
        output_path: args.output.clone(),
        genre: args.genre.clone(),
        date: args.date.clone(),
        title: args.title.clone(),
        performer: args.performer.clone(),
    }
}

/// The input path with its extension replaced by `.json`.
fn default_config_path(input: &Path) -> PathBuf {
    let mut out = input.to_path_buf();
    out.set_extension("json");
    out
}

/// Where `--write-config` saves settings. Never the input file itself.
fn config_target(input: &Path, requested: Option<&Path>) -> Result<PathBuf> {
    let target = requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_config_path(input));
    if target == input {
        bail!(
            "Settings file {} would overwrite the input file; pass a path to --write-config.",
            target.display()
        );
    }
    Ok(target)
}

fn write_config_file(path: &Path, config: &OutputConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
