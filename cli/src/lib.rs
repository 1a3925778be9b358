//! fontinline CLI (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::{info, LevelFilter};
use thiserror::Error;

use fontinline_core::catalog::CatalogOptions;
use fontinline_core::config::FontDirs;
use fontinline_core::names::NameDecoding;
use fontinline_core::pipeline::{embed_fonts, EmbedOptions, EmbedReport, UnresolvedPolicy};

/// Exit status for configuration mistakes detected before any work is done.
pub const CONFIG_ERROR_STATUS: i32 = 2;

/// Problems with the invocation itself, as opposed to the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input and output refer to the same file: {0}")]
    SameFile(PathBuf),
    #[error("--json writes to stdout, so --output cannot be `-`")]
    JsonWithStdout,
}

/// CLI entrypoint for fontinline.
#[derive(Debug, Parser)]
#[command(
    name = "fontinline",
    about = "Embed the fonts an SVG references as base64 @font-face rules (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// SVG file to embed fonts into (`-` for stdin)
    #[arg(short = 'i', long = "input", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// SVG file to write (`-` for stdout)
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Extra font directory searched before the defaults (repeatable)
    #[arg(long = "font-dir", value_hint = ValueHint::DirPath)]
    font_dirs: Vec<PathBuf>,

    /// Skip the user, working, GS_LIB and system font directories
    #[arg(long = "no-default-dirs", action = ArgAction::SetTrue)]
    no_default_dirs: bool,

    /// Follow symlinks while walking font directories
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Decode font names by platform/encoding ID instead of guessing
    #[arg(long = "strict-names", action = ArgAction::SetTrue)]
    strict_names: bool,

    /// Fail when a referenced font cannot be found
    #[arg(long = "strict", action = ArgAction::SetTrue, conflicts_with = "quiet")]
    strict: bool,

    /// Do not warn about referenced fonts that cannot be found
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Print a JSON summary of the resolution to stdout
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn font_dirs(&self) -> FontDirs {
        let defaults = if self.no_default_dirs {
            FontDirs::default()
        } else {
            FontDirs::from_env()
        };
        defaults.with_leading(self.font_dirs.iter().cloned())
    }

    fn embed_options(&self) -> EmbedOptions {
        let decoding = if self.strict_names {
            NameDecoding::Platform
        } else {
            NameDecoding::NullByteHeuristic
        };
        let policy = if self.strict {
            UnresolvedPolicy::Error
        } else if self.quiet {
            UnresolvedPolicy::Ignore
        } else {
            UnresolvedPolicy::Warn
        };

        EmbedOptions::default()
            .with_catalog(
                CatalogOptions::default()
                    .with_follow_symlinks(self.follow_symlinks)
                    .with_decoding(decoding),
            )
            .with_unresolved(policy)
    }
}

/// Parse CLI args, set up logging, and execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    run_with(&cli)
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

pub fn run_with(cli: &Cli) -> Result<()> {
    check_paths(&cli.input, &cli.output)?;
    if cli.json && is_stdio(&cli.output) {
        return Err(ConfigError::JsonWithStdout.into());
    }

    let svg = read_input(&cli.input)?;
    let report = embed_fonts(&svg, &cli.font_dirs(), &cli.embed_options())?;
    log_report(&report);

    write_output(&cli.output, &report.output)?;

    if cli.json {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report.summary())?;
        writeln!(handle)?;
    }

    Ok(())
}

fn log_report(report: &EmbedReport) {
    info!(
        "{} reference(s), {} embedded, {} unresolved; {} font file(s) cataloged",
        report.references.len(),
        report.resolved.len(),
        report.unresolved.len(),
        report.catalog_size
    );
    for (family, font) in &report.resolved {
        info!("using {} for {family:?} ({})", font.path.display(), font.pass);
    }
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reject an output path that names the input file.
fn check_paths(input: &Path, output: &Path) -> Result<(), ConfigError> {
    if is_stdio(input) || is_stdio(output) {
        return Ok(());
    }
    if same_file(input, output) {
        return Err(ConfigError::SameFile(output.to_path_buf()));
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(ma), Ok(mb)) = (fs::metadata(a), fs::metadata(b)) {
            return ma.dev() == mb.dev() && ma.ino() == mb.ino();
        }
    }

    match (normalize(a), normalize(b)) {
        (Some(na), Some(nb)) => na == nb,
        _ => false,
    }
}

/// Canonical form of a path whose final component may not exist yet.
fn normalize(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Some(canonical);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.canonicalize().ok()?,
        _ => std::env::current_dir().ok()?,
    };
    Some(parent.join(name))
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading SVG from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if is_stdio(path) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        return Ok(());
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests;
