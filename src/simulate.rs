//! Random sequences and point mutations.
//!
//! Both helpers take the random generator as a parameter so callers can
//! seed it for reproducible output.

use rand::seq::index::sample;
use rand::Rng;
use thiserror::Error;

use crate::composition::{count_nucleotides, is_supported_alphabet};
use crate::model::NucleicAcidType;
use crate::outcome::{Invalid, Outcome};

/// Errors that can occur while mutating a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("cannot mutate {requested} positions of a sequence of length {length}")]
    TooManyMutations { requested: usize, length: usize },

    #[error("sequence contains symbols outside ACGTU")]
    UnsupportedAlphabet,

    #[error("invalid sequence: {0}")]
    InvalidSequence(Invalid),
}

/// Draws a lower-case sequence of `length` symbols uniformly from the
/// alphabet of `kind`.
pub fn random_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    kind: NucleicAcidType,
    length: usize,
) -> String {
    let symbols = kind.symbols();
    (0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}

/// Changes exactly `k` distinct positions of `seq` to a different symbol.
///
/// Replacement symbols come from the sequence's own alphabet (RNA when it
/// holds U, DNA otherwise). The result is lower-case, so its Hamming
/// distance to `seq` is exactly `k`.
pub fn mutate<R: Rng + ?Sized>(rng: &mut R, seq: &str, k: usize) -> Result<String, MutationError> {
    if !is_supported_alphabet(seq) {
        return Err(MutationError::UnsupportedAlphabet);
    }
    if k > seq.len() {
        return Err(MutationError::TooManyMutations {
            requested: k,
            length: seq.len(),
        });
    }

    let kind = match count_nucleotides(seq) {
        Outcome::Absent => return Ok(String::new()),
        Outcome::Invalid(reason) => return Err(MutationError::InvalidSequence(reason)),
        Outcome::Success(comp) => comp.kind(),
    };

    let symbols = kind.symbols();
    let mut bases: Vec<char> = seq.chars().map(|c| c.to_ascii_lowercase()).collect();
    for pos in sample(&mut *rng, bases.len(), k) {
        let current = bases[pos];
        let alternatives: Vec<char> = symbols.iter().copied().filter(|&s| s != current).collect();
        bases[pos] = alternatives[rng.random_range(0..alternatives.len())];
    }
    Ok(bases.into_iter().collect())
}
