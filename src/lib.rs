//! String calculator
//!
//! Sums a delimited string of integers. The input may start with a
//! delimiter header (`//[d1][d2]\n` or the legacy `//d\n`) that replaces the
//! default `,` and `\n` separators.
//!
//! ```rust
//! assert_eq!(strcalc::add("1,2\n3"), Ok(6));
//! assert_eq!(strcalc::add("//[***][%]\n3***2%4"), Ok(9));
//! assert_eq!(
//!     strcalc::add("-2,3,-4").unwrap_err().to_string(),
//!     "Negatives not allowed: -2,-4"
//! );
//! ```

pub mod engine;
pub mod header;
pub mod reading;

pub use engine::calculator::{add, Breakdown, Calculator};
pub use engine::config::CalcConfig;
pub use engine::error::{CalcError, ErrorKind};
pub use header::DelimiterSpec;

#[cfg(test)]
mod proptests;
