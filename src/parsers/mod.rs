// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for genotype call file formats
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================

pub mod vcf;

pub use vcf::{VcfGenotypes, VcfParseError, VcfParser};
