//! GC content.

use crate::composition::count_nucleotides;
use crate::outcome::Outcome;

/// Percentage of C and G among all nucleotides of `seq`, in `[0, 100]`.
pub fn gc_content(seq: &str) -> Outcome<f64> {
    count_nucleotides(seq).map(|comp| comp.gc_count() as f64 / comp.total() as f64 * 100.0)
}
