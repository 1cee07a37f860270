use lazy_static::lazy_static;
use log::{debug, trace};

use crate::engine::config::CalcConfig;
use crate::engine::error::CalcError;
use crate::header::{parse_header, DelimiterSpec};
use crate::reading::{split_body, validate_token};

lazy_static! {
    static ref DEFAULT_CALCULATOR: Calculator = Calculator::default();
}

/// Sums `input` with the default rules.
///
/// Equivalent to `Calculator::default().add(input)`.
pub fn add(input: &str) -> Result<i64, CalcError> {
    DEFAULT_CALCULATOR.add(input)
}

/// Outcome of a successful scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub sum: i64,
    /// Values that contributed to `sum`, in input order
    pub summed: Vec<i64>,
    /// Values above the configured maximum, parsed but not summed
    pub ignored: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn add(&self, input: &str) -> Result<i64, CalcError> {
        self.breakdown(input).map(|breakdown| breakdown.sum)
    }

    /// Parses, validates and sums `input`, keeping track of what was summed.
    ///
    /// Structural errors abort on the first offending token. Negative values
    /// are collected over the whole body and reported together afterwards.
    pub fn breakdown(&self, input: &str) -> Result<Breakdown, CalcError> {
        if input.is_empty() {
            return Ok(Breakdown::default());
        }

        let (delimiters, body): (Vec<&str>, &str) = match parse_header(input) {
            DelimiterSpec::Default { body } => (
                self.config
                    .default_delimiters
                    .iter()
                    .map(String::as_str)
                    .collect(),
                body,
            ),
            DelimiterSpec::Custom { delimiters, body } => (delimiters, body),
            DelimiterSpec::Malformed(reason) => {
                debug!("Rejecting delimiter header: {}", reason);
                return Err(CalcError::MalformedHeader(reason));
            }
        };
        debug!("Splitting body on delimiters {:?}", delimiters);

        let mut breakdown = Breakdown::default();
        let mut negatives = Vec::new();

        for token in split_body(body, &delimiters) {
            let value = validate_token(&token)?;
            trace!("Token {} = {}", token.position, value);

            if value < 0 {
                negatives.push(value);
            } else if value <= self.config.max_value {
                breakdown.sum = breakdown.sum.saturating_add(value);
                breakdown.summed.push(value);
            } else {
                breakdown.ignored.push(value);
            }
        }

        if !negatives.is_empty() {
            return Err(CalcError::NegativeNumbers(negatives));
        }

        debug!(
            "Sum {} from {} values ({} ignored)",
            breakdown.sum,
            breakdown.summed.len(),
            breakdown.ignored.len()
        );
        Ok(breakdown)
    }
}
