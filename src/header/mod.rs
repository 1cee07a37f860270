//! Delimiter header module
//!
//! Resolves the optional `//...\n` prefix of a calculator input into a
//! [`DelimiterSpec`] before the body is split.
//!
//! ## Module Structure
//!
//! - **spec.rs**: the `DelimiterSpec` variant type
//! - **parser.rs**: manual string parsing of the bracketed and legacy forms
//!
//! ## Header grammar
//!
//! ```text
//! //[d1][d2]...\n<body>    any non-empty run of non-']' characters per group
//! //d\n<body>              legacy form, exactly one character
//! ```

pub mod parser;
pub mod spec;

pub use parser::{parse_header, HEADER_MARKER};
pub use spec::DelimiterSpec;
