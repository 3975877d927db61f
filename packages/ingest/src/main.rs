#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the registry owner-list extraction tool.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tohon_extract_ingest::{
    AggregateOptions, Extraction, OnUnreadable, aggregate, combined_stats, export,
};
use tohon_extract_parser::document::{PageBoundary, ParseOptions};

#[derive(Parser)]
#[command(name = "tohon_extract", about = "Registry owner-list extraction tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract owner records from every registry file in a directory into CSV
    Extract {
        /// Directory containing registry PDF or text files
        dir: PathBuf,
        /// Output CSV path (default: `tohon_owners_<timestamp>.csv` in the input directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Keep a record open across page boundaries instead of flushing per page
        #[arg(long)]
        carry_pages: bool,
        /// Skip unreadable files instead of aborting the batch
        #[arg(long)]
        skip_unreadable: bool,
        /// Parse documents in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Parse a directory and print the validation summary without writing output
    Validate {
        /// Directory containing registry PDF or text files
        dir: PathBuf,
        /// Print the summary and per-document reports as JSON
        #[arg(long)]
        json: bool,
        /// Keep a record open across page boundaries instead of flushing per page
        #[arg(long)]
        carry_pages: bool,
        /// Skip unreadable files instead of aborting the batch
        #[arg(long)]
        skip_unreadable: bool,
    },
}

fn batch_options(carry_pages: bool, skip_unreadable: bool, parallel: bool) -> AggregateOptions {
    AggregateOptions {
        parse: ParseOptions {
            page_boundary: if carry_pages {
                PageBoundary::Carry
            } else {
                PageBoundary::Flush
            },
        },
        on_unreadable: if skip_unreadable {
            OnUnreadable::SkipAndReport
        } else {
            OnUnreadable::Abort
        },
        parallel,
    }
}

fn run_batch(
    dir: &Path,
    options: &AggregateOptions,
) -> Result<Extraction, Box<dyn std::error::Error>> {
    let sources = tohon_extract_source::scan_sources(dir)?;
    if sources.is_empty() {
        return Err(format!("no registry files found in {}", dir.display()).into());
    }

    log::info!("extracting {} file(s) from {}", sources.len(), dir.display());
    Ok(aggregate(&sources, options)?)
}

fn print_summary(extraction: &Extraction) {
    let summary = &extraction.summary;
    println!("Total records:     {}", summary.total_records);
    println!("Unique addresses:  {}", summary.unique_addresses);
    println!("Unique names:      {}", summary.unique_names);
    println!("Duplicate records: {}", summary.duplicate_records);

    let stats = combined_stats(&extraction.reports);
    if stats.orphan_continuations > 0 || stats.empty_data_lines > 0 {
        println!(
            "Dropped input:     {} ownerless continuation(s), {} empty data line(s)",
            stats.orphan_continuations, stats.empty_data_lines,
        );
    }

    for report in &extraction.reports {
        if let Some(error) = &report.error {
            println!("Skipped {}: {error}", report.source);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            dir,
            out,
            carry_pages,
            skip_unreadable,
            parallel,
        } => {
            let start = Instant::now();
            let options = batch_options(carry_pages, skip_unreadable, parallel);
            let extraction = run_batch(&dir, &options)?;

            let out = out.unwrap_or_else(|| {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                dir.join(format!("tohon_owners_{timestamp}.csv"))
            });
            export::write_csv(&out, &extraction.records)?;

            print_summary(&extraction);
            println!("Wrote {}", out.display());

            let elapsed = start.elapsed();
            log::info!(
                "extraction complete: {} record(s) in {:.1}s",
                extraction.summary.total_records,
                elapsed.as_secs_f64()
            );
        }
        Commands::Validate {
            dir,
            json,
            carry_pages,
            skip_unreadable,
        } => {
            let options = batch_options(carry_pages, skip_unreadable, false);
            let extraction = run_batch(&dir, &options)?;

            if json {
                let report = serde_json::json!({
                    "summary": extraction.summary,
                    "documents": extraction.reports,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&extraction);
            }
        }
    }

    Ok(())
}
