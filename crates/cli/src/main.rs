// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod paths;

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use ticketgen::parse_seating;
use ticketgen_api::{TicketBatch, decode_seating_bytes, generate_batch, manual_seating};
use ticketgen_domain::{SeatDescriptor, TicketConfig, validate_ticket_count};
use ticketgen_render::compose_layout_test;
use tracing::{error, info};

/// ticketgen - printable event tickets with QR codes from a seating export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ticket configuration JSON file
    #[arg(short, long)]
    config: PathBuf,

    /// Path to the seating export file
    #[arg(short, long, conflicts_with = "manual_count")]
    seating: Option<PathBuf>,

    /// Generate this many identical tickets instead of reading a seating file
    #[arg(long)]
    manual_count: Option<usize>,

    /// First freeform ticket line in manual mode
    #[arg(long, default_value = "")]
    line1: String,

    /// Second freeform ticket line in manual mode
    #[arg(long, default_value = "")]
    line2: String,

    /// Path to the template PDF for the layout-test overlay
    #[arg(short, long, default_value = "template.pdf")]
    template: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

fn main() {
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config: TicketConfig = load_config(&args.config)?;
    info!(
        artist = %config.event.artist,
        date = %config.event.date,
        "Loaded configuration"
    );

    let seats: Vec<SeatDescriptor> = load_seats(args)?;

    let batch: TicketBatch = generate_batch(&seats, &config)?;

    let batch_dir: PathBuf = args
        .output
        .join(paths::output_folder_name(&config.event.artist, &config.event.date));
    let tickets_dir: PathBuf = batch_dir.join("tickets");
    fs::create_dir_all(&tickets_dir)?;

    for (index, document) in batch.documents.iter().enumerate() {
        let path: PathBuf = tickets_dir.join(format!("tickets-{:03}.pdf", index + 1));
        fs::write(&path, document.bytes())?;
        info!(path = %path.display(), pages = document.page_count(), "Wrote ticket document");
    }

    let manifest_path: PathBuf = batch_dir.join("ids.csv");
    fs::write(&manifest_path, &batch.manifest_csv)?;
    info!(path = %manifest_path.display(), "Wrote ticket manifest");

    write_layout_test(&args.template, &batch, &batch_dir)?;

    info!(
        tickets = batch.tickets.len(),
        documents = batch.documents.len(),
        "Ticket generation complete"
    );
    Ok(())
}

/// Loads seats from the export file, or builds the manual seat list.
fn load_seats(args: &Args) -> Result<Vec<SeatDescriptor>, Box<dyn std::error::Error>> {
    match (&args.seating, args.manual_count) {
        (Some(path), None) => {
            let bytes: Vec<u8> = fs::read(path)
                .map_err(|err| format!("Failed to read seating file {}: {err}", path.display()))?;
            let text: String = decode_seating_bytes(&bytes);
            let seats: Vec<SeatDescriptor> = parse_seating(&text);
            info!(seats = seats.len(), "Parsed seating export");
            Ok(seats)
        }
        (None, Some(count)) => {
            validate_ticket_count(count)?;
            Ok(manual_seating(count, &args.line1, &args.line2))
        }
        _ => Err("Provide either --seating <file> or --manual-count <n>".into()),
    }
}

/// Composes the layout-test overlay when a template PDF is available.
///
/// A missing template is not an error: the overlay is simply not
/// configured for this run.
fn write_layout_test(
    template: &Path,
    batch: &TicketBatch,
    batch_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !template.exists() {
        info!(template = %template.display(), "No template PDF found, skipping layout test");
        return Ok(());
    }
    let Some(first_document) = batch.documents.first() else {
        return Ok(());
    };

    let template_bytes: Vec<u8> = fs::read(template)?;
    let overlay: Vec<u8> = compose_layout_test(first_document.bytes(), &template_bytes)?;
    let path: PathBuf = batch_dir.join("layout-test.pdf");
    fs::write(&path, overlay)?;
    info!(path = %path.display(), "Wrote layout test");
    Ok(())
}

fn load_config(path: &Path) -> Result<TicketConfig, Box<dyn std::error::Error>> {
    let content: String = fs::read_to_string(path)
        .map_err(|err| format!("Failed to load config {}: {err}", path.display()))?;
    let config: TicketConfig = serde_json::from_str(&content)
        .map_err(|err| format!("Invalid config {}: {err}", path.display()))?;
    Ok(config)
}
