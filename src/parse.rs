// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{cast::cast, error::ParseFailure, integers::Integer};
use tracing::debug;

/// ## Parse a decimal integer bounded by the width of `T`
///
/// The text is handed to a signed base-10 parser configured with the width
/// class of `T` (8, 16, 32 or 64 bits, pointer sized types use 64). It accepts
/// an optional leading sign followed by ASCII digits, nothing else.
///
/// The width class only carries a width, never a signedness: the range check
/// always uses the **signed** range of that width. An unsigned target
/// therefore rejects the upper half of its own range, e.g. `parse::<u64>`
/// fails for anything above `i64::MAX`, and `parse::<u8>` for anything above
/// `127`. Use [`parse_full_range`] to check against the real range of `T`.
///
/// A negative literal for an unsigned target is a range failure.
///
/// ### Arguments
///
/// * `text` - The decimal literal
///
/// ### Returns
///
/// The parsed value, [`ParseFailure::Syntax`] with the delegate's error for
/// malformed text, or [`ParseFailure::Range`] for a well formed literal that
/// does not fit
///
/// ```
/// use safe_conversion::parse;
///
/// assert_eq!(parse::<i32>("2147483647"), Ok(i32::MAX));
/// assert!(parse::<i32>("2147483648").unwrap_err().is_range());
/// assert!(parse::<u64>("18446744073709551615").unwrap_err().is_range());
/// ```
pub fn parse<T: Integer>(text: &str) -> Result<T, ParseFailure> {
    let bits = T::WIDTH.parse_bits();

    let value = parse_signed(text, bits).map_err(|failure| rejected::<T>(text, failure))?;

    cast::<i64, T>(value).map_err(|_| rejected::<T>(text, ParseFailure::Range { bits: T::BITS }))
}

/// ## Parse a decimal integer bounded by the full range of `T`
///
/// Same syntax as [`parse`], but the value is checked against `T::MIN..=T::MAX`
/// so unsigned targets accept their whole range.
///
/// ```
/// use safe_conversion::parse_full_range;
///
/// assert_eq!(parse_full_range::<u64>("18446744073709551615"), Ok(u64::MAX));
/// assert!(parse_full_range::<u8>("-1").unwrap_err().is_range());
/// ```
pub fn parse_full_range<T: Integer>(text: &str) -> Result<T, ParseFailure> {
    let value = text
        .parse::<i128>()
        .map_err(|source| rejected::<T>(text, ParseFailure::from_delegate(source, T::BITS)))?;

    if value < T::MIN.widen() || value > T::MAX.widen() {
        return Err(rejected::<T>(text, ParseFailure::Range { bits: T::BITS }));
    }

    Ok(T::wrap(value))
}

/// Signed base-10 parse checked against the two's complement range of `bits`.
fn parse_signed(text: &str, bits: u32) -> Result<i64, ParseFailure> {
    let value = text
        .parse::<i64>()
        .map_err(|source| ParseFailure::from_delegate(source, bits))?;

    let bound = 1i128 << (bits - 1);
    if (value as i128) < -bound || (value as i128) >= bound {
        return Err(ParseFailure::Range { bits });
    }

    Ok(value)
}

#[cold]
fn rejected<T: Integer>(text: &str, failure: ParseFailure) -> ParseFailure {
    debug!(text, into = %T::DESCRIPTOR, error = %failure, "decimal parse rejected");
    failure
}
