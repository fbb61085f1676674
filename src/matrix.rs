// ==============================================================================
// matrix.rs - Locus-Major Genotype Matrix
// ==============================================================================
// Description: Width-checked locus-major matrix and individual-major transpose
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================

use thiserror::Error;

use crate::genotype::Symbol;

/// Errors that can occur while accumulating the matrix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Malformed row: expected {expected} genotype columns, found {found}")]
    MalformedRow { expected: usize, found: usize },
}

/// Locus-major matrix of recoded symbols: one row per locus, one column per
/// individual. Row width is fixed at construction (N, the individual count)
/// and enforced on every append.
#[derive(Debug, Clone)]
pub struct LocusMatrix {
    individuals: usize,
    rows: Vec<Vec<Symbol>>,
}

impl LocusMatrix {
    /// Create an empty matrix for `individuals` columns
    pub fn new(individuals: usize) -> Self {
        Self {
            individuals,
            rows: Vec::new(),
        }
    }

    /// Number of individuals (N, the fixed row width)
    pub fn individual_count(&self) -> usize {
        self.individuals
    }

    /// Number of loci appended so far (L)
    pub fn locus_count(&self) -> usize {
        self.rows.len()
    }

    /// Append one locus row, rejecting any width other than N
    pub fn push_locus(&mut self, row: Vec<Symbol>) -> Result<(), MatrixError> {
        if row.len() != self.individuals {
            return Err(MatrixError::MalformedRow {
                expected: self.individuals,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Transpose to individual-major sequences
    ///
    /// Returns N strings of length L: entry k is individual k's symbol at
    /// every locus, concatenated in original locus order. Column k of the
    /// matrix corresponds to position k of the header's individual list.
    pub fn transpose(&self) -> Vec<String> {
        let mut sequences: Vec<String> = (0..self.individuals)
            .map(|_| String::with_capacity(self.rows.len()))
            .collect();
        for row in &self.rows {
            for (k, symbol) in row.iter().enumerate() {
                sequences[k].push(symbol.as_char());
            }
        }
        sequences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::Symbol::{Het, HomAlt, HomRef, Missing};

    #[test]
    fn test_push_locus_enforces_width() {
        let mut matrix = LocusMatrix::new(3);
        assert!(matrix.push_locus(vec![HomRef, Het, HomAlt]).is_ok());

        let err = matrix.push_locus(vec![HomRef, Het]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::MalformedRow {
                expected: 3,
                found: 2
            }
        );
        // Rejected row is not retained
        assert_eq!(matrix.locus_count(), 1);
    }

    #[test]
    fn test_transpose_orientation() {
        // 2 loci x 3 individuals
        let mut matrix = LocusMatrix::new(3);
        matrix.push_locus(vec![HomRef, Het, HomAlt]).unwrap();
        matrix.push_locus(vec![Missing, HomAlt, HomRef]).unwrap();

        let sequences = matrix.transpose();
        assert_eq!(sequences, vec!["0-", "12", "20"]);
    }

    #[test]
    fn test_transpose_preserves_locus_order() {
        let mut matrix = LocusMatrix::new(1);
        for symbol in [HomRef, Het, HomAlt, Missing, Het] {
            matrix.push_locus(vec![symbol]).unwrap();
        }
        assert_eq!(matrix.transpose(), vec!["012-1"]);
    }

    #[test]
    fn test_transpose_empty_matrix() {
        // Header-only input: L = 0, every sequence is empty
        let matrix = LocusMatrix::new(4);
        let sequences = matrix.transpose();
        assert_eq!(sequences.len(), 4);
        assert!(sequences.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_transpose_does_not_consume_matrix() {
        let mut matrix = LocusMatrix::new(2);
        matrix.push_locus(vec![Het, Het]).unwrap();

        let first = matrix.transpose();
        let second = matrix.transpose();
        assert_eq!(first, second);
        assert_eq!(matrix.locus_count(), 1);
    }
}
