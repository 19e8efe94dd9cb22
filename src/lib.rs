//! Checked conversions between fixed-width integers and width-bounded decimal
//! parsing.
//!
//! ```
//! use safe_conversion::{cast, parse, Integer, OutOfRange};
//!
//! assert_eq!(cast::<i64, u32>(4_294_967_295), Ok(u32::MAX));
//! assert_eq!(300i32.checked_cast::<i8>(), Err(OutOfRange));
//! assert_eq!(parse::<i64>("-9223372036854775808"), Ok(i64::MIN));
//! ```

pub mod error;
mod macros;
pub mod cast;
pub mod integers;
pub mod parse;

pub use cast::cast;
pub use error::{Error, OutOfRange, ParseFailure, Result};
pub use integers::{BitWidth, IntDescriptor, Integer};
pub use parse::{parse, parse_full_range};

#[cfg(test)]
mod test {
    use tracing::Level;

    #[ctor::ctor]
    fn init_test_logging() {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .try_init()
            .ok();
    }
}
