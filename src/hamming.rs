//! Hamming distance between two sequences.

use crate::composition::count_nucleotides;
use crate::outcome::{Invalid, Outcome};

/// Counts the positions at which two equal-length sequences differ.
///
/// Each sequence is validated on its own; a DNA sequence may be compared
/// with an RNA one. Comparison is case-insensitive.
pub fn hamming_distance(first: &str, second: &str) -> Outcome<usize> {
    if first.is_empty() || second.is_empty() {
        return Outcome::Absent;
    }

    count_nucleotides(first)
        .and_then(|_| count_nucleotides(second))
        .and_then(|_| {
            // Validated sequences are ASCII, so byte lengths are symbol counts.
            if first.len() != second.len() {
                return Outcome::Invalid(Invalid::LengthMismatch {
                    left: first.len(),
                    right: second.len(),
                });
            }

            let distance = first
                .bytes()
                .zip(second.bytes())
                .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
                .count();
            Outcome::Success(distance)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences() {
        assert_eq!(hamming_distance("GATTACA", "GATTACA"), Outcome::Success(0));
        assert_eq!(hamming_distance("gattaca", "GATTACA"), Outcome::Success(0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(
            hamming_distance("GAGCCTACTAACGGGAT", "CATCGTAATGACGGCCT"),
            Outcome::Success(7)
        );
        assert_eq!(hamming_distance("A", "C"), Outcome::Success(1));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            hamming_distance("aaa", "aa"),
            Outcome::Invalid(Invalid::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_absent_when_either_empty() {
        assert_eq!(hamming_distance("", "ACGT"), Outcome::Absent);
        assert_eq!(hamming_distance("ACGT", ""), Outcome::Absent);
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            hamming_distance("ACTU", "ACGT"),
            Outcome::Invalid(Invalid::MixedAlphabet)
        );
        assert_eq!(
            hamming_distance("ACGT", "ACTU"),
            Outcome::Invalid(Invalid::MixedAlphabet)
        );
    }

    #[test]
    fn test_alphabet_checked_before_length() {
        assert_eq!(
            hamming_distance("ATU", "AC"),
            Outcome::Invalid(Invalid::MixedAlphabet)
        );
        assert_eq!(
            hamming_distance("AC", "ATU"),
            Outcome::Invalid(Invalid::MixedAlphabet)
        );
    }

    #[test]
    fn test_dna_against_rna_is_permitted() {
        assert_eq!(hamming_distance("ACGT", "ACGU"), Outcome::Success(1));
    }
}
