use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// A cast source value has no exact, sign-preserving representation in the
/// target type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("value out of range for target type")]
pub struct OutOfRange;

/// Failure of a decimal parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The text is not an optionally signed base-10 integer literal.
    #[error("invalid decimal integer literal: {source}")]
    Syntax {
        #[source]
        source: ParseIntError,
    },

    /// The literal is well formed but does not fit the `bits` wide range it
    /// was checked against.
    #[error("decimal value out of range for {bits}-bit integer")]
    Range { bits: u32 },
}

impl ParseFailure {
    /// Classifies an error coming out of the delegate parser. Overflow kinds
    /// become range failures, everything else is a syntax failure.
    pub(crate) fn from_delegate(source: ParseIntError, bits: u32) -> Self {
        match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::Range { bits },
            _ => ParseFailure::Syntax { source },
        }
    }

    #[inline]
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseFailure::Syntax { .. })
    }

    #[inline]
    pub fn is_range(&self) -> bool {
        matches!(self, ParseFailure::Range { .. })
    }
}

/// Umbrella error for callers mixing casts and parses behind one `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

pub type Result<T> = std::result::Result<T, Error>;
