// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{error::OutOfRange, integers::Integer};
use tracing::trace;

/// ## Checked conversion between two integer types
///
/// The value is converted the raw way (truncating when narrowing, sign or zero
/// extending when widening) and the result is accepted only if it kept the
/// sign of the source and converts back to the exact same source value. This
/// covers every signed/unsigned width pair without looking at the direction
/// of the conversion.
///
/// ### Arguments
///
/// * `value` - The value to convert
///
/// ### Returns
///
/// The converted value, or [`OutOfRange`] if `value` has no exact
/// representation in `T`
///
/// ```
/// use safe_conversion::{cast, OutOfRange};
///
/// assert_eq!(cast::<i8, u16>(127), Ok(127));
/// assert_eq!(cast::<i8, u16>(-128), Err(OutOfRange));
/// assert_eq!(cast::<u16, i8>(256), Err(OutOfRange));
/// ```
#[inline]
pub fn cast<F: Integer, T: Integer>(value: F) -> Result<T, OutOfRange> {
    let source_nonnegative = value >= F::ZERO;
    let converted = T::wrap(value.widen());

    // negative -> unsigned, or the truncated bit pattern flipped the sign bit
    if source_nonnegative != (converted >= T::ZERO) {
        return Err(rejected::<F, T>(value));
    }

    // truncated magnitude without touching the sign
    if F::wrap(converted.widen()) != value {
        return Err(rejected::<F, T>(value));
    }

    Ok(converted)
}

#[cold]
#[inline(never)]
fn rejected<F: Integer, T: Integer>(value: F) -> OutOfRange {
    trace!(%value, from = %F::DESCRIPTOR, to = %T::DESCRIPTOR, "integer cast out of range");
    OutOfRange
}
