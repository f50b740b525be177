use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vvsrt::config::Config;
use vvsrt::convert;

/// Generate gapless SRT subtitles from VOICEVOX project files
#[derive(Parser, Debug)]
#[command(name = "vvsrt", version)]
struct Args {
    /// Input project file (.vvproj)
    input: PathBuf,

    /// Output SRT path [default: input path with .srt extension]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum characters per subtitle line
    #[arg(long)]
    max_chars: Option<usize>,

    /// Maximum lines per cue (0 = unlimited)
    #[arg(long)]
    max_lines: Option<usize>,

    /// Keep trailing emotive punctuation runs intact when splitting
    #[arg(long)]
    preserve_emotion: bool,

    /// Settings file [default: ./vvsrt.toml when present]
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Settings file first, CLI flags on top.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new("vvsrt.toml");
            if default_path.exists() {
                read_config(default_path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(max_chars) = args.max_chars {
        config.max_chars = max_chars;
    }
    if let Some(max_lines) = args.max_lines {
        config.max_lines = max_lines;
    }
    if args.preserve_emotion {
        config.preserve_emotion = true;
    }
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let config = load_config(&args)?;
    let summary = convert::convert_file(&args.input, args.output.as_deref(), &config)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    println!(
        "{} cues, {:.3} s -> {}",
        summary.cue_count,
        summary.total_seconds,
        summary.output_path.display()
    );
    Ok(())
}
