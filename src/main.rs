// ==============================================================================
// main.rs - SNAPP Converter Entry Point
// ==============================================================================
// Description: CLI for converting one-SNP-per-locus VCF files to SNAPP input
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapp_convert::processor::SnappConverter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input VCF with one biallelic SNP per locus (.vcf or .vcf.gz)
    #[arg(short, long)]
    in_vcf: PathBuf,

    /// Directory the SNAPP NEXUS file is written into
    #[arg(short, long)]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snapp_convert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let converter = SnappConverter::new(args.in_vcf, args.out_dir);
    match converter.convert() {
        Ok(out_path) => {
            info!("output SNAPP input file called {}", out_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
