// ==============================================================================
// lib.rs - SNAPP Converter Library
// ==============================================================================
// Description: Library interface for VCF to SNAPP conversion modules
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================

pub mod genotype;
pub mod matrix;
pub mod output;
pub mod parsers;
pub mod processor;
