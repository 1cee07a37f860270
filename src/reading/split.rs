use std::cmp::Reverse;

use super::Token;

/// Splits `body` at every occurrence of any delimiter.
///
/// Delimiters are literal text. Where several match at the same offset the
/// longest one wins, so `**` is not read as two `*` separators.
///
/// An empty final token (the body ends with a delimiter) is dropped, while
/// empty tokens anywhere else are kept and rejected later by validation.
pub fn split_body<'a>(body: &'a str, delimiters: &[&str]) -> Vec<Token<'a>> {
    let mut ordered: Vec<&str> = delimiters
        .iter()
        .copied()
        .filter(|d| !d.is_empty())
        .collect();
    ordered.sort_by_key(|d| Reverse(d.len()));

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    while offset < body.len() {
        let rest = &body[offset..];
        match ordered.iter().find(|d| rest.starts_with(**d)) {
            Some(delimiter) => {
                tokens.push(Token::new(&body[start..offset], tokens.len()));
                offset += delimiter.len();
                start = offset;
            }
            None => {
                offset += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    tokens.push(Token::new(&body[start..], tokens.len()));

    if tokens.last().is_some_and(|t| t.text.is_empty()) {
        tokens.pop();
    }

    tokens
}
