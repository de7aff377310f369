//! # ruwaid-footer
//!
//! Renders the Ruwaid's Clothing storefront footer to static HTML through
//! Leptos SSR, and lists the navigation targets it hands to the router.
//!
//! ## Usage
//!
//! ```bash
//! # Standalone preview page (with CSS) for the current year
//! ruwaid-footer render --out footer.html
//!
//! # Bare <footer> fragment, pinned year, custom content
//! ruwaid-footer render --fragment --year 2025 --config footer.toml
//!
//! # Every router-bound target, for route registration checks
//! ruwaid-footer links --json
//! ```
//!
//! Without `--config`, a `footer.toml` in the working directory is picked up
//! if present.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use ruwaid_footer::{FooterConfig, current_year, render_footer, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "ruwaid-footer")]
#[command(about = "Render the Ruwaid's Clothing footer to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the footer to HTML
    Render {
        /// Year for the copyright line (default: config, then system clock)
        #[arg(long)]
        year: Option<i32>,
        /// Content overrides (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit only the <footer> element instead of a full page
        #[arg(long)]
        fragment: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print every navigation target the footer links to
    Links {
        /// Content overrides (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

/// Explicit `--config` must load; the implicit `./footer.toml` may be absent.
fn load_config(path: Option<&Path>) -> Result<FooterConfig> {
    match path {
        Some(path) => FooterConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("reading working directory")?;
            Ok(FooterConfig::load(&cwd))
        }
    }
}

fn render(
    year: Option<i32>,
    config: Option<&Path>,
    fragment: bool,
    out: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let year = year.or(config.year).unwrap_or_else(current_year);
    debug!(year, fragment, "rendering footer");

    let html = if fragment {
        render_footer(&config.content, year)
    } else {
        render_page(&config.content, year)
    };

    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("footer written to {} ({} bytes)", path.display(), html.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn links(config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let targets = config.content.navigation_targets();
    debug!("{} navigation targets", targets.len());

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &targets)?;
        writeln!(stdout)?;
    } else {
        for target in &targets {
            writeln!(stdout, "{}\t{}\t{}", target.list, target.label, target.href)?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    // Logs go to stderr, stdout carries the HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Render {
            year,
            config,
            fragment,
            out,
        } => render(year, config.as_deref(), fragment, out.as_deref()),
        Command::Links { config, json } => links(config.as_deref(), json),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ruwaid-footer] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_flags() {
        let args = Args::parse_from([
            "ruwaid-footer",
            "render",
            "--year",
            "2025",
            "--fragment",
            "-o",
            "out.html",
        ]);
        match args.command {
            Command::Render {
                year,
                fragment,
                out,
                config,
            } => {
                assert_eq!(year, Some(2025));
                assert!(fragment);
                assert_eq!(out, Some(PathBuf::from("out.html")));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn log_level_is_global() {
        let args = Args::parse_from(["ruwaid-footer", "links", "--json", "--log-level", "debug"]);
        assert_eq!(args.log_level, "debug");
        assert!(matches!(args.command, Command::Links { json: true, .. }));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let err = load_config(Some(Path::new("/definitely/not/here/footer.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("loading config"));
    }
}
