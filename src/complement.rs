//! Base-pairing complement and reverse complement.
//!
//! DNA pairs A with T, RNA pairs A with U, both pair C with G. Output is
//! always lower-case.

use crate::composition::count_nucleotides;
use crate::model::{Composition, NucleicAcidType};
use crate::outcome::Outcome;

/// Picks the pairing table for a counted sequence.
///
/// A U forces RNA and a T forces DNA, whatever the hint says; only a
/// sequence with neither falls back to the hint.
fn pairing_type(comp: &Composition, hint: Option<NucleicAcidType>) -> NucleicAcidType {
    if comp.u > 0 {
        NucleicAcidType::Rna
    } else if comp.t > 0 {
        NucleicAcidType::Dna
    } else {
        hint.unwrap_or_default()
    }
}

fn complement_with(seq: &str, kind: NucleicAcidType) -> String {
    seq.chars()
        .filter_map(|c| kind.pair(c.to_ascii_lowercase()))
        .collect()
}

/// Returns the base-paired complement of `seq`.
///
/// `kind` defaults to DNA and is overridden when the sequence itself
/// contains U (or T).
pub fn complement(seq: &str, kind: Option<NucleicAcidType>) -> Outcome<String> {
    count_nucleotides(seq).map(|comp| complement_with(seq, pairing_type(&comp, kind)))
}

/// Returns `reverse(complement(seq))`, detecting the type from the sequence.
///
/// RNA without any A complements to a sequence without U, which is read
/// back as DNA: `reverse_complement("U")` is `"a"` and its reverse
/// complement is `"t"`.
pub fn reverse_complement(seq: &str) -> Outcome<String> {
    complement(seq, None).map(|comp| comp.chars().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Invalid;

    fn success(out: Outcome<String>) -> String {
        out.success().expect("expected a successful outcome")
    }

    #[test]
    fn test_complement_dna() {
        assert_eq!(success(complement("ACGT", None)), "tgca");
        assert_eq!(success(complement("aacg", Some(NucleicAcidType::Dna))), "ttgc");
    }

    #[test]
    fn test_complement_rna() {
        assert_eq!(success(complement("ACGU", Some(NucleicAcidType::Rna))), "ugca");
    }

    #[test]
    fn test_u_forces_rna_pairing() {
        assert_eq!(success(complement("ACGU", Some(NucleicAcidType::Dna))), "ugca");
        assert_eq!(success(complement("AU", None)), "ua");
    }

    #[test]
    fn test_hint_applies_without_t_or_u() {
        assert_eq!(success(complement("AAC", None)), "ttg");
        assert_eq!(success(complement("AAC", Some(NucleicAcidType::Rna))), "uug");
    }

    #[test]
    fn test_t_keeps_dna_pairing() {
        assert_eq!(success(complement("AT", Some(NucleicAcidType::Rna))), "ta");
    }

    fn detected(seq: &str) -> NucleicAcidType {
        count_nucleotides(seq).success().expect("valid sequence").kind()
    }

    #[test]
    fn test_double_complement() {
        for seq in ["ACGT", "acgu", "GGGA", "UUAGC", "TtAa", "U", "UUG", "ucg"] {
            let once = success(complement(seq, None));
            assert_eq!(success(complement(&once, Some(detected(seq)))), seq.to_lowercase());
        }
        let rna = success(complement("AAC", Some(NucleicAcidType::Rna)));
        assert_eq!(success(complement(&rna, None)), "aac");
    }

    #[test]
    fn test_rna_without_a_needs_the_original_type() {
        assert_eq!(success(complement("U", None)), "a");
        assert_eq!(success(complement("a", None)), "t");
        assert_eq!(success(complement("a", Some(NucleicAcidType::Rna))), "u");

        assert_eq!(success(complement("UUG", None)), "aac");
        assert_eq!(success(complement("aac", None)), "ttg");
        assert_eq!(success(complement("aac", Some(NucleicAcidType::Rna))), "uug");

        assert_eq!(success(complement("ucg", None)), "agc");
        assert_eq!(success(complement("agc", Some(NucleicAcidType::Rna))), "ucg");
    }

    #[test]
    fn test_complement_signals() {
        assert_eq!(complement("", None), Outcome::Absent);
        assert_eq!(complement("tu", None), Outcome::Invalid(Invalid::MixedAlphabet));
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(success(reverse_complement("ACGT")), "acgt");
        assert_eq!(success(reverse_complement("AATT")), "aatt");
        assert_eq!(success(reverse_complement("AACG")), "cgtt");
        assert_eq!(success(reverse_complement("AACU")), "aguu");
    }

    #[test]
    fn test_reverse_complement_twice() {
        for seq in ["GATTACA", "gauuaca", "CCGA"] {
            let once = success(reverse_complement(seq));
            assert_eq!(success(reverse_complement(&once)), seq.to_lowercase());
        }
    }

    #[test]
    fn test_reverse_complement_of_rna_without_a_comes_back_as_dna() {
        assert_eq!(success(reverse_complement("U")), "a");
        assert_eq!(success(reverse_complement("a")), "t");

        assert_eq!(success(reverse_complement("UUG")), "caa");
        assert_eq!(success(reverse_complement("caa")), "ttg");

        assert_eq!(success(reverse_complement("ucg")), "cga");
        assert_eq!(success(reverse_complement("cga")), "tcg");
    }

    #[test]
    fn test_reverse_complement_signals() {
        assert!(reverse_complement("").is_absent());
        assert!(reverse_complement("ATU").is_invalid());
    }
}
