//! Alphabet validation and nucleotide counting.
//!
//! Every other operation classifies its input through [`count_nucleotides`].

use crate::model::Composition;
use crate::outcome::{Invalid, Outcome};

/// Returns true if every character is one of `ACGTU`, in either case.
///
/// The core assumes this holds; front ends should check it before calling.
pub fn is_supported_alphabet(seq: &str) -> bool {
    seq.chars().all(|c| matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'g' | 't' | 'u'))
}

/// Counts the nucleotides of a DNA or RNA sequence, case-insensitively.
///
/// - Empty input is [`Outcome::Absent`].
/// - A sequence holding both T and U is [`Invalid::MixedAlphabet`].
///
/// # Panics
///
/// Panics if the sequence contains symbols outside `ACGTU`. That is a
/// caller contract violation, not a data error; see [`is_supported_alphabet`].
pub fn count_nucleotides(seq: &str) -> Outcome<Composition> {
    if seq.is_empty() {
        return Outcome::Absent;
    }

    let mut comp = Composition::default();
    let mut length = 0;
    for c in seq.chars() {
        length += 1;
        match c.to_ascii_lowercase() {
            'a' => comp.a += 1,
            'c' => comp.c += 1,
            'g' => comp.g += 1,
            't' => comp.t += 1,
            'u' => comp.u += 1,
            _ => {}
        }
    }

    if comp.t > 0 && comp.u > 0 {
        return Outcome::Invalid(Invalid::MixedAlphabet);
    }

    assert_eq!(
        comp.total(),
        length,
        "sequence contains symbols outside the ACGTU alphabet"
    );

    Outcome::Success(comp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(count_nucleotides(""), Outcome::Absent);
    }

    #[test]
    fn test_mixed_t_and_u_is_invalid() {
        assert_eq!(count_nucleotides("tu"), Outcome::Invalid(Invalid::MixedAlphabet));
        assert_eq!(count_nucleotides("ACGTU"), Outcome::Invalid(Invalid::MixedAlphabet));
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let comp = count_nucleotides("AaCgTt").success().unwrap();
        assert_eq!(comp.as_tuple(), (2, 1, 1, 2, 0));

        let comp = count_nucleotides("ACGUu").success().unwrap();
        assert_eq!(comp.as_tuple(), (1, 1, 1, 0, 2));
    }

    #[test]
    fn test_no_t_or_u() {
        let comp = count_nucleotides("GGCCA").success().unwrap();
        assert_eq!(comp.as_tuple(), (1, 2, 2, 0, 0));
    }

    #[test]
    #[should_panic(expected = "outside the ACGTU alphabet")]
    fn test_illegal_symbol_is_fatal() {
        let _ = count_nucleotides("ACGN");
    }

    #[test]
    fn test_mixed_checked_before_illegal_symbols() {
        assert!(count_nucleotides("tun").is_invalid());
    }

    #[test]
    fn test_supported_alphabet() {
        assert!(is_supported_alphabet("ACGTUacgtu"));
        assert!(is_supported_alphabet(""));
        assert!(!is_supported_alphabet("ACGN"));
        assert!(!is_supported_alphabet("AC-GT"));
    }
}
