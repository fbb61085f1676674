// ==============================================================================
// parsers/vcf.rs - VCF genotype call file parser
// ==============================================================================
// Description: Single-pass reader for tab-delimited VCF genotype calls
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================
// Expected input (one biallelic SNP per locus, e.g. from ipyrad):
// - '##' lines: file metadata, skipped
// - one '#' line: column header; fields 10+ are individual identifiers
// - data lines: fields 10+ carry 'GT:extra...' sample fields; only the GT
//   token before the first ':' is consumed
// ==============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::genotype::{recode_genotype, GenotypeError, Symbol};
use crate::matrix::LocusMatrix;

/// Fixed metadata columns (CHROM..FORMAT) preceding the sample columns
const STRUCTURAL_COLUMNS: usize = 9;

/// VCF parsing errors
#[derive(Error, Debug)]
pub enum VcfParseError {
    #[error("Failed to open VCF file: {0}")]
    FileOpenError(String),

    #[error("No column header line found: {0}")]
    MissingHeader(String),

    #[error("Line {line}: malformed data row (expected {expected} genotype columns, found {found})")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, sample column {column}: {source}")]
    UnrecognizedGenotype {
        line: usize,
        column: usize,
        source: GenotypeError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parsed genotype calls: the header's individual list plus the locus-major
/// symbol matrix, collected in one pass. Column k of the matrix belongs to
/// `individuals[k]`.
#[derive(Debug)]
pub struct VcfGenotypes {
    pub individuals: Vec<String>,
    pub matrix: LocusMatrix,
}

/// VCF genotype parser
///
/// Reads plain or gzipped input in a single buffered pass, producing the
/// ordered individual list and the recoded locus-major matrix together.
#[derive(Default)]
pub struct VcfParser;

impl VcfParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a VCF file into individuals and the locus-major symbol matrix
    ///
    /// # Arguments
    /// * `path` - Path to the input file (.vcf, .vcf.gz, or .vcf.bgz)
    ///
    /// # Returns
    /// * `Ok(VcfGenotypes)` - Individual list and matrix, dimension-consistent
    /// * `Err(VcfParseError)` - First malformed line or unrecognized token
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<VcfGenotypes, VcfParseError> {
        let path = path.as_ref();
        let reader = open_reader(path)?;

        let mut individuals: Option<Vec<String>> = None;
        let mut matrix = LocusMatrix::new(0);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = index + 1;

            if line.starts_with("##") {
                continue;
            }

            if let Some(rest) = line.strip_prefix('#') {
                // First single-# line is the column header; any later
                // #-prefixed line is ignored like the data pass ignores it.
                if individuals.is_none() {
                    let names = parse_header_fields(rest);
                    debug!("Header found at line {}: {} individuals", line_num, names.len());
                    matrix = LocusMatrix::new(names.len());
                    individuals = Some(names);
                }
                continue;
            }

            if individuals.is_none() {
                return Err(VcfParseError::MissingHeader(format!(
                    "data line encountered at line {} before the #CHROM header",
                    line_num
                )));
            }

            let row = recode_data_line(&line, line_num, matrix.individual_count())?;
            matrix
                .push_locus(row)
                .map_err(|e| match e {
                    crate::matrix::MatrixError::MalformedRow { expected, found } => {
                        VcfParseError::MalformedRow {
                            line: line_num,
                            expected,
                            found,
                        }
                    }
                })?;
        }

        let individuals = individuals.ok_or_else(|| {
            VcfParseError::MissingHeader("end of file reached without a #CHROM header".to_string())
        })?;

        debug!(
            "Parsed {} loci across {} individuals",
            matrix.locus_count(),
            individuals.len()
        );

        Ok(VcfGenotypes {
            individuals,
            matrix,
        })
    }
}

/// Open the input as a buffered reader, transparently decompressing gzip
fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, VcfParseError> {
    let file = File::open(path)
        .map_err(|e| VcfParseError::FileOpenError(format!("{}: {}", path.display(), e)))?;

    let name = path.to_string_lossy().to_ascii_lowercase();
    if name.ends_with(".gz") || name.ends_with(".bgz") {
        let decoder = MultiGzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(64 * 1024, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(64 * 1024, file)))
    }
}

/// Extract the individual identifiers from the header line (leading '#'
/// already stripped): the first 9 structural columns are discarded, every
/// later field is one identifier in column order.
fn parse_header_fields(header: &str) -> Vec<String> {
    header
        .split('\t')
        .skip(STRUCTURAL_COLUMNS)
        .map(|name| name.trim_end_matches(['\n', '\r']).to_string())
        .collect()
}

/// Recode one data line into a row of exactly `expected` symbols
///
/// The genotype token is each sample field's content before the first ':'
/// (which would otherwise introduce per-sample metadata such as read depth).
fn recode_data_line(
    line: &str,
    line_num: usize,
    expected: usize,
) -> Result<Vec<Symbol>, VcfParseError> {
    let fields: Vec<&str> = line.split('\t').skip(STRUCTURAL_COLUMNS).collect();

    if fields.len() != expected {
        return Err(VcfParseError::MalformedRow {
            line: line_num,
            expected,
            found: fields.len(),
        });
    }

    let mut row = Vec::with_capacity(expected);
    for (k, field) in fields.iter().enumerate() {
        let token = field.split(':').next().unwrap_or("");
        let symbol =
            recode_genotype(token).map_err(|source| VcfParseError::UnrecognizedGenotype {
                line: line_num,
                column: k + 1,
                source,
            })?;
        row.push(symbol);
    }

    Ok(row)
}
