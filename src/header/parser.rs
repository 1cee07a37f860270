use super::DelimiterSpec;

/// Two-character prefix that opens a delimiter header
pub const HEADER_MARKER: &str = "//";

/// Parse the delimiter header at the start of `input`
///
/// Supports:
/// - no `//` prefix → `Default` with the whole input as body
/// - `//[d1][d2]...\n` → `Custom` with every bracketed delimiter
/// - `//d\n` → `Custom` with the single legacy delimiter
/// - anything else after `//` → `Malformed`
pub fn parse_header(input: &str) -> DelimiterSpec<'_> {
    let Some(rest) = input.strip_prefix(HEADER_MARKER) else {
        return DelimiterSpec::Default { body: input };
    };

    if rest.starts_with('[') {
        parse_bracketed(rest)
    } else {
        parse_legacy(rest)
    }
}

fn parse_bracketed(mut rest: &str) -> DelimiterSpec<'_> {
    let mut delimiters: Vec<&str> = Vec::new();

    while let Some(group) = rest.strip_prefix('[') {
        let Some(end) = group.find(']') else {
            return malformed("unclosed '[' in delimiter header");
        };
        if end == 0 {
            return malformed("empty delimiter group '[]'");
        }

        let delimiter = &group[..end];
        if !delimiters.contains(&delimiter) {
            delimiters.push(delimiter);
        }
        rest = &group[end + 1..];
    }

    match rest.strip_prefix('\n') {
        Some(body) => DelimiterSpec::Custom { delimiters, body },
        None => malformed("delimiter groups must be followed by a newline"),
    }
}

fn parse_legacy(rest: &str) -> DelimiterSpec<'_> {
    let Some(delimiter) = rest.chars().next() else {
        return malformed("missing delimiter after '//'");
    };
    if delimiter == '\n' {
        return malformed("missing delimiter after '//'");
    }

    let (declared, after) = rest.split_at(delimiter.len_utf8());
    match after.strip_prefix('\n') {
        Some(body) => DelimiterSpec::Custom {
            delimiters: vec![declared],
            body,
        },
        None => malformed(&format!(
            "delimiter '{}' must be followed by a newline",
            delimiter.escape_debug()
        )),
    }
}

fn malformed(reason: &str) -> DelimiterSpec<'static> {
    DelimiterSpec::Malformed(reason.to_string())
}
