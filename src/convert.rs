//! End-to-end conversion: project file in, SRT file out.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::errors::Result;
use crate::srt::{writer, Assembler};
use crate::vvproj::parser;

pub struct ConversionSummary {
    pub cue_count: usize,
    pub total_seconds: f64,
    pub output_path: PathBuf,
}

/// Default output path: the input path with its extension replaced.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("srt")
}

/// Convert one project file. Nothing is written when assembly fails, so a
/// fatal error never leaves a partial SRT behind.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<ConversionSummary> {
    let project = parser::load_project(input)?;

    let assembler = Assembler::from_config(config.clone());
    let cues = assembler.assemble(&project)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };
    std::fs::write(&output_path, writer::render(&cues))?;

    let total_seconds = cues.last().map(|cue| cue.end).unwrap_or(0.0);
    info!(
        output = %output_path.display(),
        cues = cues.len(),
        total_seconds,
        "SRT written"
    );

    Ok(ConversionSummary {
        cue_count: cues.len(),
        total_seconds,
        output_path,
    })
}
