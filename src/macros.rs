/// Implements [`Integer`](crate::Integer) for primitive integer types.
///
/// Usage example:
///
/// impl_integer! {
///     i8 => W8, signed;
///     u64 => W64, unsigned;
/// }
macro_rules! impl_integer {
    (@signed signed) => { true };
    (@signed unsigned) => { false };
    ( $( $ty:ty => $width:ident, $sign:ident; )* ) => { $(
        impl $crate::integers::sealed::Sealed for $ty {}

        impl $crate::integers::Integer for $ty {
            const WIDTH: $crate::integers::BitWidth = $crate::integers::BitWidth::$width;
            const SIGNED: bool = $crate::macros::impl_integer!(@signed $sign);
            const ZERO: Self = 0;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline]
            fn wrap(value: i128) -> Self {
                value as $ty
            }
        }
    )* };
}

pub(crate) use impl_integer;
