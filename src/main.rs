//! docs-index — write the README index for an application's docs.
//!
//! Reads a docs config set as JSON, either from a file or stdin:
//!
//! - **write mode** (default): `docs-index docs.json` writes `<docsRoot>/README.md`
//! - **stdout mode**: `docs-index --stdout < docs.json`
//! - **check mode**: `docs-index --check docs.json` fails when the README is out of date

use anyhow::{Context, Result};
use clap::Parser;
use docs_index::render::DEFAULT_MARKER;
use docs_index::{logging, writer, DocsConfigSet, IndexRenderer, IndexStatus, RenderOptions, TableStyle};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docs-index",
    about = "Generate a Markdown index of an application's docs, plugins and configuration"
)]
struct Cli {
    /// Docs config set (JSON). If omitted, reads from stdin.
    config: Option<PathBuf>,

    /// Print the index instead of writing README.md
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Exit with an error when README.md is missing or out of date
    #[arg(long)]
    check: bool,

    /// Pad table cells so columns line up
    #[arg(long)]
    align: bool,

    /// Marker comment written at the top of the index
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Configuration file named in the Configurations section
    #[arg(long)]
    config_file: Option<String>,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            marker: self.marker.clone(),
            table_style: if self.align {
                TableStyle::Aligned
            } else {
                TableStyle::Compact
            },
            config_file: self.config_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let set = load_config(cli.config.as_deref())?;
    let options = cli.render_options();

    if cli.stdout {
        print!("{}", IndexRenderer::new(options).render(&set));
        return Ok(());
    }

    if cli.check {
        return match writer::check_index(&set, &options)? {
            IndexStatus::Fresh => Ok(()),
            status => {
                let path = writer::index_path(&set.docs_root);
                tracing::warn!(path = %path.display(), ?status, "docs index needs regenerating");
                anyhow::bail!("{} is {:?}; rerun docs-index", path.display(), status)
            }
        };
    }

    let path = writer::generate_index(&set, &options)?;
    println!("{}", path.display());
    Ok(())
}

/// Read and parse the config set, resolving relative roots against the
/// config file's directory (or the working directory for stdin).
fn load_config(path: Option<&Path>) -> Result<DocsConfigSet> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let (input, base) = match path {
        Some(path) => {
            let input = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let base = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
                _ => cwd,
            };
            (input, base)
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            (input, cwd)
        }
    };

    let mut set: DocsConfigSet =
        serde_json::from_str(&input).context("failed to parse docs config set")?;
    set.absolutize(&base);
    Ok(set)
}
