// Configuration for the calculator engine
// Defaults reproduce the fixed rules of `add`

/// Calculator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    /// Delimiters used when the input has no header (default `,` and `\n`)
    pub default_delimiters: Vec<String>,

    /// Largest value that still counts towards the sum (default 1000, inclusive)
    pub max_value: i64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            default_delimiters: vec![",".to_string(), "\n".to_string()],
            max_value: 1000,
        }
    }
}
