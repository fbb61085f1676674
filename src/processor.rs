// ==============================================================================
// processor.rs - Conversion Pipeline
// ==============================================================================
// Description: Drives the VCF to SNAPP conversion: parse, transpose, write
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::output::write_nexus;
use crate::parsers::VcfParser;

pub struct SnappConverter {
    in_vcf: PathBuf,
    out_dir: PathBuf,
}

impl SnappConverter {
    pub fn new(in_vcf: PathBuf, out_dir: PathBuf) -> Self {
        Self { in_vcf, out_dir }
    }

    /// Main conversion pipeline
    ///
    /// Runs the four stages in order and returns the path of the written
    /// NEXUS file. Any failure aborts the run before output is persisted.
    pub fn convert(&self) -> Result<PathBuf> {
        info!("Converting {} to SNAPP input", self.in_vcf.display());

        // 1. Parse: header individuals + locus-major matrix, one pass
        let genotypes = VcfParser::new()
            .parse(&self.in_vcf)
            .with_context(|| format!("Failed to parse VCF file {}", self.in_vcf.display()))?;

        info!(
            "Parsed {} individuals, {} loci",
            genotypes.individuals.len(),
            genotypes.matrix.locus_count()
        );

        // 2. Transpose to one sequence per individual
        let sequences = genotypes.matrix.transpose();

        // 3. Write the NEXUS container into the output directory
        let out_path = write_nexus(&self.out_dir, &genotypes.individuals, &sequences)
            .with_context(|| {
                format!("Failed to write SNAPP input into {}", self.out_dir.display())
            })?;

        Ok(out_path)
    }
}

/// Convert `in_vcf` into a SNAPP NEXUS file under `out_dir`
pub fn convert(in_vcf: &Path, out_dir: &Path) -> Result<PathBuf> {
    SnappConverter::new(in_vcf.to_path_buf(), out_dir.to_path_buf()).convert()
}
