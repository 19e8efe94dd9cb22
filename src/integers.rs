use crate::{cast, error::OutOfRange, macros::impl_integer};
use std::{fmt, hash::Hash};

/// Width class of a fixed-width integer type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
    /// Pointer sized (`isize` / `usize`).
    Native,
}

impl BitWidth {
    /// Number of bits of the concrete type on the current platform.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
            BitWidth::Native => usize::BITS,
        }
    }

    /// Width the decimal parser validates against. Anything that is not one
    /// of the explicit widths falls back to 64.
    #[inline]
    pub const fn parse_bits(self) -> u32 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 | BitWidth::Native => 64,
        }
    }
}

/// Static `(width, signedness)` pair describing an [`Integer`] type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntDescriptor {
    pub width: BitWidth,
    pub signed: bool,
}

impl IntDescriptor {
    #[inline]
    pub const fn bits(self) -> u32 {
        self.width.bits()
    }
}

impl fmt::Display for IntDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        match self.width {
            BitWidth::Native => write!(f, "{}size", prefix),
            width => write!(f, "{}{}", prefix, width.bits()),
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer usable with [`cast`](crate::cast()) and
/// [`parse`](crate::parse()).
///
/// Implemented for `i8 i16 i32 i64 isize u8 u16 u32 u64 usize`; sealed.
pub trait Integer: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + sealed::Sealed + 'static {
    const WIDTH: BitWidth;
    const SIGNED: bool;
    const BITS: u32 = Self::WIDTH.bits();
    const DESCRIPTOR: IntDescriptor = IntDescriptor { width: Self::WIDTH, signed: Self::SIGNED };

    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    /// Exact value, sign or zero extended to 128 bits.
    fn widen(self) -> i128;

    /// Raw conversion keeping the low `BITS` bits of `value`, the same as an
    /// `as` cast between primitives.
    fn wrap(value: i128) -> Self;

    /// ## Checked conversion into another integer type
    ///
    /// Method form of [`cast`](crate::cast()).
    ///
    /// ### Returns
    ///
    /// The converted value, or [`OutOfRange`] if `self` has no exact
    /// representation in `T`
    #[inline]
    fn checked_cast<T: Integer>(self) -> Result<T, OutOfRange> {
        cast::cast(self)
    }
}

impl_integer! {
    i8 => W8, signed;
    i16 => W16, signed;
    i32 => W32, signed;
    i64 => W64, signed;
    isize => Native, signed;
    u8 => W8, unsigned;
    u16 => W16, unsigned;
    u32 => W32, unsigned;
    u64 => W64, unsigned;
    usize => Native, unsigned;
}
