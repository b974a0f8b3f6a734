//! Data model for nucleotide sequences.
//!
//! This module contains the value types shared by every operation:
//! - The nucleic acid type (DNA or RNA)
//! - The five-way nucleotide composition of a sequence

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kind of nucleic acid a sequence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NucleicAcidType {
    /// Alphabet {A, C, G, T}
    #[default]
    Dna,
    /// Alphabet {A, C, G, U}
    Rna,
}

impl NucleicAcidType {
    /// The four lower-case symbols of this alphabet.
    pub fn symbols(self) -> [char; 4] {
        match self {
            NucleicAcidType::Dna => ['a', 'c', 'g', 't'],
            NucleicAcidType::Rna => ['a', 'c', 'g', 'u'],
        }
    }

    /// Base-pairing partner of a lower-case nucleotide.
    ///
    /// Returns `None` for symbols outside this alphabet.
    pub fn pair(self, base: char) -> Option<char> {
        match (self, base) {
            (_, 'c') => Some('g'),
            (_, 'g') => Some('c'),
            (NucleicAcidType::Dna, 'a') => Some('t'),
            (NucleicAcidType::Dna, 't') => Some('a'),
            (NucleicAcidType::Rna, 'a') => Some('u'),
            (NucleicAcidType::Rna, 'u') => Some('a'),
            _ => None,
        }
    }
}

impl fmt::Display for NucleicAcidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NucleicAcidType::Dna => write!(f, "DNA"),
            NucleicAcidType::Rna => write!(f, "RNA"),
        }
    }
}

/// Error returned when parsing a [`NucleicAcidType`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown nucleic acid type: {0} (expected DNA or RNA)")]
pub struct UnknownNucleicAcidType(pub String);

impl FromStr for NucleicAcidType {
    type Err = UnknownNucleicAcidType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DNA" => Ok(NucleicAcidType::Dna),
            "RNA" => Ok(NucleicAcidType::Rna),
            _ => Err(UnknownNucleicAcidType(s.to_string())),
        }
    }
}

/// Counts of each of the five nucleotide symbols in a sequence.
///
/// For a composition produced by the counter, at most one of `t` and `u`
/// is non-zero and the counts sum to the sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Composition {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub u: usize,
}

impl Composition {
    /// Sum of all five counts.
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t + self.u
    }

    /// Number of G and C symbols.
    pub fn gc_count(&self) -> usize {
        self.c + self.g
    }

    /// RNA when any U was counted, DNA otherwise.
    pub fn kind(&self) -> NucleicAcidType {
        if self.u > 0 {
            NucleicAcidType::Rna
        } else {
            NucleicAcidType::Dna
        }
    }

    /// Counts in `(a, c, g, t, u)` order.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize, usize) {
        (self.a, self.c, self.g, self.t, self.u)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} {:>5} {:>5} {:>5} {:>5}", "A", "C", "G", "T", "U")?;
        write!(
            f,
            "{:>5} {:>5} {:>5} {:>5} {:>5}",
            self.a, self.c, self.g, self.t, self.u
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_tables() {
        assert_eq!(NucleicAcidType::Dna.pair('a'), Some('t'));
        assert_eq!(NucleicAcidType::Dna.pair('t'), Some('a'));
        assert_eq!(NucleicAcidType::Rna.pair('a'), Some('u'));
        assert_eq!(NucleicAcidType::Rna.pair('u'), Some('a'));
        assert_eq!(NucleicAcidType::Rna.pair('c'), Some('g'));
        assert_eq!(NucleicAcidType::Dna.pair('u'), None);
        assert_eq!(NucleicAcidType::Rna.pair('t'), None);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("rna".parse::<NucleicAcidType>(), Ok(NucleicAcidType::Rna));
        assert_eq!("DNA".parse::<NucleicAcidType>(), Ok(NucleicAcidType::Dna));
        assert_eq!(
            "protein".parse::<NucleicAcidType>(),
            Err(UnknownNucleicAcidType("protein".to_string()))
        );
        assert_eq!(
            UnknownNucleicAcidType("x".to_string()).to_string(),
            "unknown nucleic acid type: x (expected DNA or RNA)"
        );
    }

    #[test]
    fn test_composition_kind_and_totals() {
        let comp = Composition { a: 1, c: 2, g: 3, t: 0, u: 4 };
        assert_eq!(comp.total(), 10);
        assert_eq!(comp.gc_count(), 5);
        assert_eq!(comp.kind(), NucleicAcidType::Rna);
        assert_eq!(Composition::default().kind(), NucleicAcidType::Dna);
    }

    #[test]
    fn test_composition_table() {
        let comp = Composition { a: 1, c: 2, g: 3, t: 4, u: 0 };
        assert_eq!(
            comp.to_string(),
            "    A     C     G     T     U\n    1     2     3     4     0"
        );
    }
}
