//! geometa CLI: check, canonicalize and inspect reference lists.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use geometa_core::config::MetaConfig;
use geometa_core::mount::Mount;
use geometa_core::schema::render_time;
use geometa_core::types::SpanEnd;
use geometa_io::{is_canonical, load, store, CsvRows};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "geometa")]
#[command(about = "Check and canonicalize geodetic mount reference lists", long_about = None)]
struct Cli {
    /// Directory that relative list paths are resolved against (overrides GEOMETA_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a mount list
    Check {
        /// Mount list CSV (defaults to the configured mounts file)
        file: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a mount list in canonical form (sorted, trimmed)
    Fmt {
        file: Option<PathBuf>,

        /// Write here instead of replacing the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only report whether the file is already canonical
        #[arg(long, conflicts_with = "output")]
        check: bool,
    },

    /// Print mounts
    Show {
        file: Option<PathBuf>,

        /// Only mounts with this code
        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0} is not in canonical form (run `geometa fmt`)")]
    NotCanonical(String),
}

#[derive(Serialize)]
struct Summary<'a> {
    path: String,
    mounts: usize,
    codes: usize,
    open: usize,
    first: Option<&'a str>,
    last: Option<&'a str>,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = MetaConfig::from_env();
    if let Some(dir) = cli.dir {
        config.base_dir = dir;
    }

    let rows = CsvRows::new(&config.base_dir);
    let result = match cli.command {
        Commands::Check { file, json } => check_list(&rows, &resolve(&config, file), json),
        Commands::Fmt {
            file,
            output,
            check,
        } => fmt_list(&rows, &resolve(&config, file), output.as_deref(), check),
        Commands::Show { file, code, json } => {
            show_list(&rows, &resolve(&config, file), code.as_deref(), json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(core) = e.downcast_ref::<geometa_core::error::Error>() {
            for hint in core.suggestions() {
                eprintln!("  hint: {}", hint);
            }
        }
        std::process::exit(1);
    }
}

/// List location relative to the base directory (absolute paths pass through).
fn resolve(config: &MetaConfig, file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| config.mounts_file.clone())
}

fn load_mounts(rows: &CsvRows, location: &Path) -> Result<Vec<Mount>, Box<dyn std::error::Error>> {
    let path = rows.path(location);
    let mounts = load::<Mount, _>(rows, location)
        .map_err(|e| e.with_context(format!("loading {}", path.display())))?;
    tracing::info!(path = %path.display(), mounts = mounts.len(), "loaded mount list");
    Ok(mounts)
}

fn check_list(
    rows: &CsvRows,
    location: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mounts = load_mounts(rows, location)?;

    let mut codes: Vec<&str> = mounts.iter().map(|m| m.reference.code.as_str()).collect();
    codes.dedup();
    let summary = Summary {
        path: rows.path(location).display().to_string(),
        mounts: mounts.len(),
        codes: codes.len(),
        open: mounts.iter().filter(|m| m.span.is_open()).count(),
        first: codes.first().copied(),
        last: codes.last().copied(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("✓ {} is valid", summary.path);
        println!("  Mounts: {}", summary.mounts);
        println!("  Codes: {}", summary.codes);
        println!("  Open: {}", summary.open);
    }
    Ok(())
}

fn fmt_list(
    rows: &CsvRows,
    location: &Path,
    output: Option<&Path>,
    check: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = rows.path(location);

    if check {
        let canonical = is_canonical::<Mount>(rows, location)
            .map_err(|e| e.with_context(format!("checking {}", path.display())))?;
        if !canonical {
            return Err(CliError::NotCanonical(path.display().to_string()).into());
        }
        println!("✓ {} is canonical", path.display());
        return Ok(());
    }

    let mounts = load_mounts(rows, location)?;
    let target = output.unwrap_or(location);
    store(rows, target, &mounts)?;
    println!(
        "✓ Wrote {} mounts to {}",
        mounts.len(),
        rows.path(target).display()
    );
    Ok(())
}

fn show_list(
    rows: &CsvRows,
    location: &Path,
    code: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mounts = load_mounts(rows, location)?;
    let selected: Vec<&Mount> = mounts
        .iter()
        .filter(|m| code.map_or(true, |c| m.reference.code == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for m in selected {
        let end = match m.span.end {
            SpanEnd::Open => "open".to_string(),
            SpanEnd::At(t) => render_time(&t),
        };
        println!(
            "{:<6} {:<4} {:>11} {:>12} {:>9} {} {:<20} {}",
            m.reference.code,
            m.reference.network,
            m.point.latitude,
            m.point.longitude,
            m.point.elevation,
            render_time(&m.span.start),
            end,
            m.reference.name,
        );
    }
    Ok(())
}
