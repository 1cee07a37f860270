pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{add, Breakdown, Calculator};
pub use config::CalcConfig;
pub use error::{CalcError, ErrorKind};
