// ==============================================================================
// output.rs - SNAPP NEXUS Matrix Output
// ==============================================================================
// Description: Serializes the individual-major matrix into a SNAPP NEXUS file
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================
// Container layout (SNAPP integerdata block):
//   #NEXUS
//   Begin data;
//   \tDimensions ntax=<N> nchar=<L>;
//   \tFormat datatype=integerdata symbols="012" gap="-";
//   \tMatrix
//   <id>\t<sequence>   (one row per individual, header order)
//   \t;
//   End;
// ==============================================================================

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Fixed output filename expected by downstream SNAPP runs
pub const OUTPUT_FILENAME: &str = "snapp_input_vcf.nex";

/// NEXUS writer errors
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Failed to write output file: {0}")]
    WriteFailure(#[from] std::io::Error),

    #[error("Failed to persist output file: {0}")]
    PersistFailure(String),
}

/// Write the SNAPP NEXUS file into `out_dir`
///
/// `individuals` and `sequences` are paired by position: row i of the matrix
/// is `individuals[i]` followed by `sequences[i]`. Every sequence must have
/// the same length (L); a ragged input is rejected before anything touches
/// the filesystem. Content is written to a temporary file in `out_dir` and
/// persisted to the final name, so a failed run leaves no truncated output.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written file (`out_dir/snapp_input_vcf.nex`)
/// * `Err(OutputError)` - Dimension mismatch or I/O failure
pub fn write_nexus(
    out_dir: impl AsRef<Path>,
    individuals: &[String],
    sequences: &[String],
) -> Result<PathBuf, OutputError> {
    let out_dir = out_dir.as_ref();

    if individuals.len() != sequences.len() {
        return Err(OutputError::DimensionMismatch(format!(
            "{} individuals but {} sequences",
            individuals.len(),
            sequences.len()
        )));
    }

    let nchar = sequences.first().map(String::len).unwrap_or(0);
    if let Some((i, seq)) = sequences.iter().enumerate().find(|(_, s)| s.len() != nchar) {
        return Err(OutputError::DimensionMismatch(format!(
            "sequence {} has length {} (expected {})",
            i,
            seq.len(),
            nchar
        )));
    }

    let ntax = individuals.len();

    let mut file = NamedTempFile::new_in(out_dir)?;
    writeln!(file, "#NEXUS")?;
    writeln!(file, "Begin data;")?;
    writeln!(file, "\tDimensions ntax={} nchar={};", ntax, nchar)?;
    writeln!(file, "\tFormat datatype=integerdata symbols=\"012\" gap=\"-\";")?;
    writeln!(file, "\tMatrix")?;
    for (name, sequence) in individuals.iter().zip(sequences) {
        writeln!(file, "{}\t{}", name, sequence)?;
    }
    writeln!(file, "\t;")?;
    write!(file, "End;")?;
    file.flush()?;

    let out_path = out_dir.join(OUTPUT_FILENAME);
    file.persist(&out_path)
        .map_err(|e| OutputError::PersistFailure(format!("{}: {}", out_path.display(), e)))?;

    info!("Wrote SNAPP input ({} taxa, {} characters): {}", ntax, nchar, out_path.display());
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_nexus_container_layout() {
        let dir = TempDir::new().unwrap();
        let path = write_nexus(
            dir.path(),
            &strings(&["indA", "indB"]),
            &strings(&["012-", "2101"]),
        )
        .unwrap();

        assert_eq!(path, dir.path().join(OUTPUT_FILENAME));
        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = "#NEXUS\n\
                        Begin data;\n\
                        \tDimensions ntax=2 nchar=4;\n\
                        \tFormat datatype=integerdata symbols=\"012\" gap=\"-\";\n\
                        \tMatrix\n\
                        indA\t012-\n\
                        indB\t2101\n\
                        \t;\n\
                        End;";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_empty_matrix_declares_nchar_zero() {
        let dir = TempDir::new().unwrap();
        let path = write_nexus(dir.path(), &strings(&["indA"]), &strings(&[""])).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Dimensions ntax=1 nchar=0;"));
        assert!(contents.contains("indA\t\n"));
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let dir = TempDir::new().unwrap();
        let err = write_nexus(dir.path(), &strings(&["indA", "indB"]), &strings(&["01"]))
            .unwrap_err();
        assert!(matches!(err, OutputError::DimensionMismatch(_)));
        assert!(!dir.path().join(OUTPUT_FILENAME).exists());
    }

    #[test]
    fn test_ragged_sequences_rejected() {
        let dir = TempDir::new().unwrap();
        let err = write_nexus(
            dir.path(),
            &strings(&["indA", "indB"]),
            &strings(&["012", "01"]),
        )
        .unwrap_err();
        assert!(matches!(err, OutputError::DimensionMismatch(_)));
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let individuals = strings(&["a", "b", "c"]);
        let sequences = strings(&["000", "111", "2-2"]);

        let path = write_nexus(dir.path(), &individuals, &sequences).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_nexus(dir.path(), &individuals, &sequences).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        write_nexus(dir.path(), &strings(&["indA"]), &strings(&["0"])).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
