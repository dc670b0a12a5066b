//! Binary entry point for the `dv` command.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use diffview::cli::{Cli, ColorWhen};
use diffview::config::{ColorChoice, Config};
use diffview::{diff, output};
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

/// Parse arguments, load configuration, and run the diff.
fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let (Some(original), Some(modified)) = (&cli.original, &cli.modified) else {
        bail!("two files are required (see 'dv --help')");
    };

    let config = Config::load(&Config::default_path()?)?;
    apply_color_choice(cli.color, config.output.color);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let old_label = original.display().to_string();
    let new_label = modified.display().to_string();

    // Binary inputs get a notice instead of a meaningless diff
    if diff::is_binary_file(original)? || diff::is_binary_file(modified)? {
        output::render_binary_notice(&old_label, &new_label, &mut writer)?;
        return Ok(());
    }

    let old_content = read_text(original)?;
    let new_content = read_text(modified)?;

    enforce_size_ceiling(&old_content, &new_content, config.diff.max_cells)?;

    let context_lines = cli.context.unwrap_or(config.diff.context_lines);
    let lines = diff::compute_diff(&old_content, &new_content, context_lines);
    debug!(lines = lines.len(), context_lines, "Computed diff");

    if cli.json {
        output::render_json(&lines, &old_label, &new_label, &mut writer)?;
    } else if cli.stat {
        output::render_stats(&lines, &mut writer)?;
    } else {
        output::render_diff(&lines, &old_label, &new_label, &mut writer)?;
    }
    writer.flush()?;

    Ok(())
}

/// Read a file as UTF-8 text.
fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Refuse inputs whose LCS table would exceed the configured cell ceiling.
///
/// The engine itself is total but O(m·n); this guard lives here, at the
/// integration boundary, so library callers can choose their own policy.
fn enforce_size_ceiling(original: &str, modified: &str, max_cells: u64) -> Result<()> {
    let m = original.lines().count() as u64;
    let n = modified.lines().count() as u64;
    let cells = m.saturating_mul(n);
    if cells > max_cells {
        bail!(
            "input too large to diff: {m} x {n} lines exceeds the configured \
             ceiling of {max_cells} table cells (see max_cells in the config file)"
        );
    }
    Ok(())
}

/// Resolve the effective colorization policy; the CLI flag wins over config.
fn apply_color_choice(flag: Option<ColorWhen>, configured: ColorChoice) {
    let choice = match flag {
        Some(ColorWhen::Auto) => ColorChoice::Auto,
        Some(ColorWhen::Always) => ColorChoice::Always,
        Some(ColorWhen::Never) => ColorChoice::Never,
        None => configured,
    };
    match choice {
        // `colored` handles tty detection and NO_COLOR on its own
        ColorChoice::Auto => {}
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

/// Initialize the tracing subscriber, writing to stderr.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DIFFVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Write shell completions for the given shell to stdout.
fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
