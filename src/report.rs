//! Diagnostic reporting for sequence operations.
//!
//! The operations in this crate are pure functions. [`Analyzer`] runs them
//! and hands a human-readable summary of each outcome to a [`Reporter`]
//! afterwards, so reporting never influences results:
//! - [`SilentReporter`] discards everything
//! - [`TracingReporter`] emits `tracing` events
//! - [`CollectingReporter`] keeps summaries in memory

use std::fmt;
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::complement::{complement, reverse_complement};
use crate::composition::count_nucleotides;
use crate::gc::gc_content;
use crate::hamming::hamming_distance;
use crate::model::{Composition, NucleicAcidType};
use crate::motif::find_motif;
use crate::outcome::Outcome;
use crate::transcribe::transcribe;
use crate::translate::Translator;

/// The operation a report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CountNucleotides,
    Transcribe,
    Complement,
    ReverseComplement,
    HammingDistance,
    FindMotif,
    Translate,
    GcContent,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CountNucleotides => "count_nucleotides",
            Operation::Transcribe => "transcribe",
            Operation::Complement => "complement",
            Operation::ReverseComplement => "reverse_complement",
            Operation::HammingDistance => "hamming_distance",
            Operation::FindMotif => "find_motif",
            Operation::Translate => "translate",
            Operation::GcContent => "gc_content",
        };
        f.write_str(name)
    }
}

/// Which of the three outcome tiers a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Absent,
    Invalid,
    Success,
}

impl<T> From<&Outcome<T>> for Tier {
    fn from(outcome: &Outcome<T>) -> Self {
        match outcome {
            Outcome::Absent => Tier::Absent,
            Outcome::Invalid(_) => Tier::Invalid,
            Outcome::Success(_) => Tier::Success,
        }
    }
}

/// Sink for operation summaries.
pub trait Reporter: Send + Sync {
    fn report(&self, operation: Operation, tier: Tier, summary: &str);

    /// When false, summaries are not even formatted.
    fn enabled(&self) -> bool {
        true
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, operation: Operation, tier: Tier, summary: &str) {
        (**self).report(operation, tier, summary)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _operation: Operation, _tier: Tier, _summary: &str) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Emits reports as `tracing` events.
///
/// Successes are logged at INFO, rejected input at WARN and empty input
/// at DEBUG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, operation: Operation, tier: Tier, summary: &str) {
        match tier {
            Tier::Success => info!(%operation, "{}", summary),
            Tier::Invalid => warn!(%operation, "{}", summary),
            Tier::Absent => debug!(%operation, "{}", summary),
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    entries: Mutex<Vec<(Operation, Tier, String)>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far, oldest first.
    pub fn entries(&self) -> Vec<(Operation, Tier, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, operation: Operation, tier: Tier, summary: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((operation, tier, summary.to_string()));
    }
}

/// Runs sequence operations and reports each outcome.
#[derive(Debug, Default)]
pub struct Analyzer<R = SilentReporter> {
    reporter: R,
    translator: Translator,
}

impl<R: Reporter> Analyzer<R> {
    /// Creates an analyzer translating with the standard genetic code.
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            translator: Translator::default(),
        }
    }

    /// Replaces the translator (and so the genetic code).
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    fn emit<T>(
        &self,
        operation: Operation,
        outcome: &Outcome<T>,
        describe: impl FnOnce(&T) -> String,
    ) {
        if !self.reporter.enabled() {
            return;
        }
        let summary = match outcome {
            Outcome::Absent => format!("{}: no sequence provided", operation),
            Outcome::Invalid(reason) => format!("{}: {}", operation, reason),
            Outcome::Success(value) => format!("{} result:\n{}", operation, describe(value)),
        };
        self.reporter.report(operation, Tier::from(outcome), &summary);
    }

    pub fn count_nucleotides(&self, seq: &str) -> Outcome<Composition> {
        let outcome = count_nucleotides(seq);
        self.emit(Operation::CountNucleotides, &outcome, |comp| comp.to_string());
        outcome
    }

    pub fn transcribe(&self, seq: &str) -> Outcome<String> {
        let outcome = transcribe(seq);
        self.emit(Operation::Transcribe, &outcome, String::clone);
        outcome
    }

    pub fn complement(&self, seq: &str, kind: Option<NucleicAcidType>) -> Outcome<String> {
        let outcome = complement(seq, kind);
        self.emit(Operation::Complement, &outcome, String::clone);
        outcome
    }

    pub fn reverse_complement(&self, seq: &str) -> Outcome<String> {
        let outcome = reverse_complement(seq);
        self.emit(Operation::ReverseComplement, &outcome, String::clone);
        outcome
    }

    pub fn hamming_distance(&self, first: &str, second: &str) -> Outcome<usize> {
        let outcome = hamming_distance(first, second);
        self.emit(Operation::HammingDistance, &outcome, usize::to_string);
        outcome
    }

    pub fn find_motif(&self, seq: &str, motif: &str) -> Outcome<Vec<usize>> {
        let outcome = find_motif(seq, motif);
        self.emit(Operation::FindMotif, &outcome, |positions| {
            if positions.is_empty() {
                "no occurrence".to_string()
            } else {
                format_positions(positions)
            }
        });
        outcome
    }

    pub fn translate(&self, seq: &str) -> Outcome<String> {
        let outcome = self.translator.translate(seq);
        self.emit(Operation::Translate, &outcome, |protein| {
            if protein.is_empty() {
                "empty protein".to_string()
            } else {
                protein.clone()
            }
        });
        outcome
    }

    pub fn gc_content(&self, seq: &str) -> Outcome<f64> {
        let outcome = gc_content(seq);
        self.emit(Operation::GcContent, &outcome, |gc| format!("{:.2}%", gc));
        outcome
    }
}

/// Space-separated motif positions.
pub fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
