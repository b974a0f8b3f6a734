//! DNA to RNA transcription.

use crate::composition::count_nucleotides;
use crate::outcome::{Invalid, Outcome};

/// Transcribes a DNA sequence into RNA by replacing every T with U.
///
/// The result is lower-case. A sequence that already contains U is
/// [`Invalid::AlreadyRna`]; a sequence with neither T nor U transcribes
/// to itself.
pub fn transcribe(seq: &str) -> Outcome<String> {
    count_nucleotides(seq).and_then(|comp| {
        if comp.u > 0 {
            return Outcome::Invalid(Invalid::AlreadyRna);
        }
        let rna = seq
            .chars()
            .map(|c| match c.to_ascii_lowercase() {
                't' => 'u',
                other => other,
            })
            .collect();
        Outcome::Success(rna)
    })
}
