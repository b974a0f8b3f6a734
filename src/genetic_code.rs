//! Genetic code tables.
//!
//! This module provides:
//! - An immutable 64-codon RNA table mapping each codon to an amino acid or Stop
//! - A registry of NCBI genetic codes, the standard code being table 1

use std::fmt;

/// What a single codon encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonMeaning {
    /// One-letter amino acid symbol
    AminoAcid(char),
    /// Translation terminator
    Stop,
}

/// NCBI base order for the first, second and third codon positions.
const BASES: [u8; 4] = [b'u', b'c', b'a', b'g'];

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_lowercase() {
        b'u' => Some(0),
        b'c' => Some(1),
        b'a' => Some(2),
        b'g' => Some(3),
        _ => None,
    }
}

/// A genetic code: an immutable table over all 64 RNA codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// Indexed by `16 * first + 4 * second + third` in NCBI base order
    table: [CodonMeaning; 64],
}

impl GeneticCode {
    /// Builds a code from an NCBI `ncbieaa` string.
    ///
    /// The string lists 64 amino acids in NCBI codon order
    /// (UUU, UUC, UUA, UUG, UCU, ...), with `*` marking Stop.
    fn from_ncbieaa(id: u8, name: &'static str, ncbieaa: &str) -> Self {
        debug_assert_eq!(ncbieaa.len(), 64, "genetic code {} is incomplete", id);
        let mut table = [CodonMeaning::Stop; 64];
        for (slot, aa) in table.iter_mut().zip(ncbieaa.chars()) {
            if aa != '*' {
                *slot = CodonMeaning::AminoAcid(aa);
            }
        }
        Self { id, name, table }
    }

    /// The standard code (NCBI table 1).
    pub fn standard() -> Self {
        Self::from_ncbieaa(1, "Standard", NCBI_TABLES[0].2)
    }

    /// Looks up an RNA codon, case-insensitively.
    ///
    /// Returns `None` when the codon is not three symbols of `ACGU`.
    pub fn lookup(&self, codon: &[u8]) -> Option<CodonMeaning> {
        match codon {
            [b1, b2, b3] => {
                let index = 16 * base_index(*b1)? + 4 * base_index(*b2)? + base_index(*b3)?;
                Some(self.table[index])
            }
            _ => None,
        }
    }

    /// Iterates over all 64 codons (lower-case) with their meaning.
    pub fn codons(&self) -> impl Iterator<Item = ([u8; 3], CodonMeaning)> + '_ {
        self.table.iter().enumerate().map(|(i, &meaning)| {
            ([BASES[i / 16], BASES[(i / 4) % 4], BASES[i % 4]], meaning)
        })
    }

    /// Codons that terminate translation under this code.
    pub fn stop_codons(&self) -> Vec<String> {
        self.codons()
            .filter(|(_, meaning)| *meaning == CodonMeaning::Stop)
            .map(|(codon, _)| String::from_utf8_lossy(&codon).into_owned())
            .collect()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}  {}", self.id, self.name)
    }
}

/// `(id, name, ncbieaa)` for each supported NCBI genetic code.
const NCBI_TABLES: &[(u8, &str, &str)] = &[
    (1, "Standard",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (2, "Vertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    (3, "Yeast Mitochondrial",
        "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (4, "Mold/Protozoan/Coelenterate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (5, "Invertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    (6, "Ciliate/Dasycladacean/Hexamita Nuclear",
        "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (9, "Echinoderm/Flatworm Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (10, "Euplotid Nuclear",
        "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (11, "Bacterial/Archaeal/Plant Plastid",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (12, "Alternative Yeast Nuclear",
        "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (13, "Ascidian Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    (14, "Alternative Flatworm Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
];

/// The NCBI genetic codes available for translation.
pub struct GeneticCodes {
    codes: Vec<GeneticCode>,
}

impl GeneticCodes {
    pub fn new() -> Self {
        let codes = NCBI_TABLES
            .iter()
            .map(|&(id, name, ncbieaa)| GeneticCode::from_ncbieaa(id, name, ncbieaa))
            .collect();
        Self { codes }
    }

    pub fn all(&self) -> &[GeneticCode] {
        &self.codes
    }

    /// Gets a genetic code by NCBI ID.
    pub fn get(&self, id: u8) -> Option<&GeneticCode> {
        self.codes.iter().find(|c| c.id == id)
    }
}

impl Default for GeneticCodes {
    fn default() -> Self {
        Self::new()
    }
}
