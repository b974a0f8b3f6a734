//! Three-tier outcome shared by every sequence operation.
//!
//! An operation either had nothing to do ([`Outcome::Absent`]), was handed
//! input it cannot work with ([`Outcome::Invalid`]), or produced a value
//! ([`Outcome::Success`]). A success may itself be "empty" (no motif hits,
//! an empty protein) without being an error.

use std::fmt;

use thiserror::Error;

/// Reasons an operation rejects its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    #[error("both T and U found in the sequence")]
    MixedAlphabet,

    #[error("sequence already contains U (already RNA)")]
    AlreadyRna,

    #[error("sequences have different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("motif of length {motif} is longer than the sequence ({sequence})")]
    MotifTooLong { motif: usize, sequence: usize },

    #[error("DNA sequence cannot be translated (T found, RNA required)")]
    DnaNotTranslatable,
}

/// Result of a sequence operation.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Empty input: nothing to do.
    Absent,
    /// Input violates a precondition of the operation.
    Invalid(Invalid),
    /// A computed value.
    Success(T),
}

impl<T> Outcome<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns the success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn invalid(&self) -> Option<&Invalid> {
        match self {
            Outcome::Invalid(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Absent => Outcome::Absent,
            Outcome::Invalid(reason) => Outcome::Invalid(reason),
            Outcome::Success(value) => Outcome::Success(f(value)),
        }
    }

    /// Chains a further operation that may itself be absent or invalid.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Absent => Outcome::Absent,
            Outcome::Invalid(reason) => Outcome::Invalid(reason),
            Outcome::Success(value) => f(value),
        }
    }

    /// Converts into a standard `Result`, with `Absent` as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, Invalid> {
        match self {
            Outcome::Absent => Ok(None),
            Outcome::Invalid(reason) => Err(reason),
            Outcome::Success(value) => Ok(Some(value)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Absent => write!(f, "no sequence provided"),
            Outcome::Invalid(reason) => write!(f, "invalid input: {}", reason),
            Outcome::Success(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_tiers() {
        let absent: Outcome<usize> = Outcome::Absent;
        assert_eq!(absent.map(|n| n + 1), Outcome::Absent);

        let invalid: Outcome<usize> = Outcome::Invalid(Invalid::MixedAlphabet);
        assert_eq!(invalid.map(|n| n + 1), Outcome::Invalid(Invalid::MixedAlphabet));

        assert_eq!(Outcome::Success(1).map(|n| n + 1), Outcome::Success(2));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let out: Outcome<usize> = Outcome::Invalid(Invalid::AlreadyRna);
        let chained = out.and_then(|_| -> Outcome<usize> { panic!("must not run") });
        assert!(chained.is_invalid());

        let chained = Outcome::Success(3).and_then(|_| Outcome::<u8>::Absent);
        assert!(chained.is_absent());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::<u8>::Absent.into_result(), Ok(None));
        assert_eq!(Outcome::Success(7u8).into_result(), Ok(Some(7)));
        assert_eq!(
            Outcome::<u8>::Invalid(Invalid::DnaNotTranslatable).into_result(),
            Err(Invalid::DnaNotTranslatable)
        );
    }

    #[test]
    fn test_display() {
        let out: Outcome<String> = Outcome::Invalid(Invalid::LengthMismatch { left: 3, right: 2 });
        assert_eq!(
            out.to_string(),
            "invalid input: sequences have different lengths (3 vs 2)"
        );
        assert_eq!(Outcome::<String>::Absent.to_string(), "no sequence provided");
    }
}
