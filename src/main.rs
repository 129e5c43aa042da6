//! Session Manager backup to HTML exporter CLI

use anyhow::Context;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use colored::*;
use session2html::{prepare_export, EntryLayout, ExportError, ExportOptions, RenderOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "session2html")]
#[command(about = "Export a Session Manager backup as an HTML link collection", long_about = None)]
#[command(version)]
struct Cli {
    /// Session Manager backup file
    backup: PathBuf,

    /// Write the link collection here instead of <BACKUP>.html
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Interpolate titles and URLs without HTML escaping
    #[arg(long)]
    raw: bool,

    /// How multi-entry and pinned tabs are laid out
    #[arg(long, value_enum, default_value_t = Layout::Legacy)]
    layout: Layout,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Legacy,
    Corrected,
}

impl From<Layout> for EntryLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Legacy => EntryLayout::Legacy,
            Layout::Corrected => EntryLayout::Corrected,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !wrong_positional_count(&e) => e.exit(),
        Err(e) => {
            println!("Please specify a Session Manager backup file as parameter.");
            println!("An HTML file will be generated with all links.");
            eprintln!();
            eprintln!("{}", e.render().to_string().dimmed());
            std::process::exit(ExportError::Usage.exit_code());
        }
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        let code = match err.downcast_ref::<ExportError>() {
            Some(not_found @ ExportError::FileNotFound(_)) => {
                println!("The specified parameter is not an existing file.");
                not_found.exit_code()
            }
            Some(export_error) => {
                eprintln!("{}", "❌ Export failed!".red().bold());
                eprintln!("{}", format!("Error: {err:#}").red());
                export_error.exit_code()
            }
            None => {
                eprintln!("{}", format!("Error: {err:#}").red());
                1
            }
        };
        std::process::exit(code);
    }
}

/// Missing backup path or extra positionals, as opposed to a bad flag.
fn wrong_positional_count(error: &clap::Error) -> bool {
    match error.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            error.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = ExportOptions {
        render: RenderOptions {
            escape_html: !cli.raw,
            layout: cli.layout.into(),
        },
        output: cli.output,
    };

    let prepared = prepare_export(&cli.backup, &options)
        .with_context(|| format!("exporting {}", cli.backup.display()))?;

    println!(
        "writing link collection into {}",
        prepared.result.output_path.display()
    );
    let result = prepared
        .write()
        .with_context(|| format!("exporting {}", cli.backup.display()))?;
    println!("{}", "✅ Export completed successfully!".green().bold());
    println!("  - Tab groups: {}", result.group_count);
    println!("  - Tabs: {}", result.tab_count);
    if result.default_group_tabs > 0 {
        println!(
            "  - {}",
            format!(
                "{} tab(s) had no group data and were placed in the first group",
                result.default_group_tabs
            )
            .yellow()
        );
    }

    Ok(())
}
