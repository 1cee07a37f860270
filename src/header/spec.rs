/// Result of scanning the start of an input for a delimiter header
///
/// Both non-malformed variants borrow the number body from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterSpec<'a> {
    /// No header; the whole input is the body and the default delimiters apply
    Default { body: &'a str },

    /// Header declared its own delimiters, in declaration order without duplicates
    Custom {
        delimiters: Vec<&'a str>,
        body: &'a str,
    },

    /// Header started with the marker but did not follow the grammar
    Malformed(String),
}

impl<'a> DelimiterSpec<'a> {
    /// Number body following the header, if the header was well formed
    pub fn body(&self) -> Option<&'a str> {
        match self {
            DelimiterSpec::Default { body } | DelimiterSpec::Custom { body, .. } => Some(*body),
            DelimiterSpec::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DelimiterSpec::Malformed(_))
    }
}
