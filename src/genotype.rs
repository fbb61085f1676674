// ==============================================================================
// genotype.rs - Genotype Token to SNAPP Symbol Recoding
// ==============================================================================
// Description: Converts diploid VCF genotype calls to SNAPP integer symbols
// Author: Matt Barham
// Created: 2026-02-09
// Modified: 2026-02-09
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   Given the pre-colon GT token of a biallelic sample field:
//   - ./. (no call)          → '-' (SNAPP gap)
//   - 0/0 (homozygous ref)   → '0'
//   - 1/0 or 0/1 (het)       → '1'
//   - 1/1 (homozygous alt)   → '2'
//   Any other token is an error; SNAPP input is strictly biallelic unphased.
// ==============================================================================

use thiserror::Error;

/// Errors that can occur during genotype recoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenotypeError {
    #[error("Unrecognized genotype token: '{0}' (expected ./., 0/0, 0/1, 1/0, or 1/1)")]
    UnrecognizedToken(String),
}

/// One recoded SNAPP matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Homozygous for allele 1 (0/0)
    HomRef,
    /// Heterozygous (0/1 or 1/0)
    Het,
    /// Homozygous for allele 2 (1/1)
    HomAlt,
    /// Missing call (./.)
    Missing,
}

impl Symbol {
    /// Character emitted into the NEXUS matrix
    pub fn as_char(&self) -> char {
        match self {
            Symbol::HomRef => '0',
            Symbol::Het => '1',
            Symbol::HomAlt => '2',
            Symbol::Missing => '-',
        }
    }
}

/// Recode a raw diploid genotype token to its SNAPP symbol
///
/// The token is the sample field's content before the first `:` (the GT
/// value, with per-sample metadata such as read depth already stripped).
/// Matching is exact: no case folding, no partial matches, no phased (`|`)
/// separators.
///
/// # Arguments
/// * `token` - Raw genotype token (e.g., "0/1")
///
/// # Returns
/// * `Ok(Symbol)` - Recoded SNAPP symbol
/// * `Err(GenotypeError)` - Token is not one of the five recognized calls
///
/// # Example
/// ```
/// use snapp_convert::genotype::{recode_genotype, Symbol};
///
/// assert_eq!(recode_genotype("0/0").unwrap(), Symbol::HomRef);
/// assert_eq!(recode_genotype("1/0").unwrap(), Symbol::Het);
/// assert_eq!(recode_genotype("./.").unwrap(), Symbol::Missing);
/// assert!(recode_genotype("2/1").is_err());
/// ```
pub fn recode_genotype(token: &str) -> Result<Symbol, GenotypeError> {
    match token {
        "./." => Ok(Symbol::Missing),
        "0/0" => Ok(Symbol::HomRef),
        "1/0" | "0/1" => Ok(Symbol::Het),
        "1/1" => Ok(Symbol::HomAlt),
        _ => Err(GenotypeError::UnrecognizedToken(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_tokens() {
        assert_eq!(recode_genotype("./.").unwrap(), Symbol::Missing);
        assert_eq!(recode_genotype("0/0").unwrap(), Symbol::HomRef);
        assert_eq!(recode_genotype("0/1").unwrap(), Symbol::Het);
        assert_eq!(recode_genotype("1/0").unwrap(), Symbol::Het);
        assert_eq!(recode_genotype("1/1").unwrap(), Symbol::HomAlt);
    }

    #[test]
    fn test_symbol_characters() {
        assert_eq!(Symbol::HomRef.as_char(), '0');
        assert_eq!(Symbol::Het.as_char(), '1');
        assert_eq!(Symbol::HomAlt.as_char(), '2');
        assert_eq!(Symbol::Missing.as_char(), '-');
    }

    #[test]
    fn test_exact_match_only() {
        // No phased separators, multi-allelic calls, or partial matches
        assert!(recode_genotype("0|1").is_err());
        assert!(recode_genotype("2/2").is_err());
        assert!(recode_genotype("2/1").is_err());
        assert!(recode_genotype("0/0/0").is_err());
        assert!(recode_genotype("0/0 ").is_err());
        assert!(recode_genotype(".").is_err());
        assert!(recode_genotype("").is_err());
    }

    #[test]
    fn test_error_names_token() {
        let err = recode_genotype("3/3").unwrap_err();
        assert_eq!(err, GenotypeError::UnrecognizedToken("3/3".to_string()));
        assert!(err.to_string().contains("3/3"));
    }
}
