//! # nucleokit - DNA/RNA sequence primitives
//!
//! Pure, stateless operations on nucleotide strings over the alphabet
//! `ACGT` (DNA) or `ACGU` (RNA), case-insensitive.
//!
//! ## Architecture
//!
//! Every operation returns an [`Outcome`]: `Absent` for empty input,
//! `Invalid` for input it cannot handle, `Success` otherwise.
//! - `composition`: alphabet validation and nucleotide counting
//! - `transcribe`: DNA to RNA
//! - `complement`: complement and reverse complement
//! - `hamming`: Hamming distance
//! - `motif`: overlapping motif search
//! - `genetic_code` / `translate`: RNA to protein
//! - `gc`: GC content
//! - `report`: optional diagnostic reporting around the pure operations
//! - `simulate`: random sequences and point mutations
//!
//! ```
//! use nucleokit::{find_motif, Outcome};
//!
//! assert_eq!(find_motif("AAAA", "AA"), Outcome::Success(vec![1, 2, 3]));
//! ```

pub mod complement;
pub mod composition;
pub mod gc;
pub mod genetic_code;
pub mod hamming;
pub mod model;
pub mod motif;
pub mod outcome;
pub mod report;
pub mod simulate;
pub mod transcribe;
pub mod translate;

pub use complement::{complement, reverse_complement};
pub use composition::{count_nucleotides, is_supported_alphabet};
pub use gc::gc_content;
pub use genetic_code::{CodonMeaning, GeneticCode, GeneticCodes};
pub use hamming::hamming_distance;
pub use model::{Composition, NucleicAcidType, UnknownNucleicAcidType};
pub use motif::find_motif;
pub use outcome::{Invalid, Outcome};
pub use report::{Analyzer, CollectingReporter, Reporter, SilentReporter, TracingReporter};
pub use transcribe::transcribe;
pub use translate::Translator;
