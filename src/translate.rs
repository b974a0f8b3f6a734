//! RNA to protein translation.

use crate::composition::count_nucleotides;
use crate::genetic_code::{CodonMeaning, GeneticCode};
use crate::outcome::{Invalid, Outcome};

/// Translates RNA sequences with a fixed genetic code.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    code: GeneticCode,
}

impl Translator {
    /// Creates a translator that reads codons through `code`.
    pub fn new(code: GeneticCode) -> Self {
        Self { code }
    }

    pub fn genetic_code(&self) -> &GeneticCode {
        &self.code
    }

    /// Translates an RNA sequence into a protein.
    ///
    /// Codons are read three symbols at a time from the first position.
    /// Translation ends at the first Stop codon or when fewer than three
    /// symbols remain; the stop itself is not emitted, and an empty
    /// protein is a valid result.
    ///
    /// - Sequences shorter than three symbols are [`Outcome::Absent`].
    /// - A sequence containing T is [`Invalid::DnaNotTranslatable`].
    pub fn translate(&self, seq: &str) -> Outcome<String> {
        if seq.chars().count() < 3 {
            return Outcome::Absent;
        }

        count_nucleotides(seq).and_then(|comp| {
            if comp.t > 0 {
                return Outcome::Invalid(Invalid::DnaNotTranslatable);
            }

            let mut protein = String::with_capacity(seq.len() / 3);
            for codon in seq.as_bytes().chunks_exact(3) {
                match self.code.lookup(codon) {
                    Some(CodonMeaning::AminoAcid(aa)) => protein.push(aa),
                    Some(CodonMeaning::Stop) => break,
                    None => unreachable!("validated RNA codon missing from genetic code"),
                }
            }
            Outcome::Success(protein)
        })
    }
}
