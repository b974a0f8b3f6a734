//! Motif search with overlapping matches.

use crate::outcome::{Invalid, Outcome};

/// Finds every 1-based start position of `motif` in `seq`.
///
/// Matching is case-insensitive and literal: neither input is checked
/// against the nucleotide alphabet. After a hit at position `p` the search
/// resumes at `p + 1`, so overlapping occurrences are all reported. A
/// motif that never occurs yields an empty list.
pub fn find_motif(seq: &str, motif: &str) -> Outcome<Vec<usize>> {
    if seq.is_empty() || motif.is_empty() {
        return Outcome::Absent;
    }

    let haystack: Vec<char> = seq.chars().map(|c| c.to_ascii_lowercase()).collect();
    let needle: Vec<char> = motif.chars().map(|c| c.to_ascii_lowercase()).collect();

    if needle.len() > haystack.len() {
        return Outcome::Invalid(Invalid::MotifTooLong {
            motif: needle.len(),
            sequence: haystack.len(),
        });
    }

    let positions = haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(i, _)| i + 1)
        .collect();
    Outcome::Success(positions)
}
