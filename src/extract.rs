//! Token extraction off the front of a statement stream.
//!
//! Every extractor consumes one item from the front of its input and returns
//! the item together with the unconsumed remainder, so decoding a record is a
//! chain of extractions in field order. There is no lookahead: the caller's
//! field tag decides whether a scalar or a bracketed span is pulled next.
//!
//! The stream these functions see has already been stripped of comments and
//! whitespace (see the `de` module), so `,` is always a separator and never
//! part of a token.

use memchr::{memchr, memchr2, memchr_iter};

use crate::error::{Bracket, Error};
use crate::parse_scalars::{parse_bool, parse_float, parse_int};

/// Extract one comma-delimited scalar token.
///
/// Returns the token (everything before the first `,`) and the remainder
/// after that comma.
///
/// Errors:
/// - `EmptyInput` if `input` is empty
/// - `MissingSeparator` if no `,` exists
/// - `UnexpectedBracket` if the token contains `{`, `}`, `[` or `]`; the
///   field should have been routed through [`list`] or [`tuple`] instead
pub fn scalar(input: &str) -> Result<(&str, &str), Error> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    let bytes = input.as_bytes();
    let comma = memchr(b',', bytes).ok_or(Error::MissingSeparator)?;
    let token = &input[..comma];
    if memchr2(b'{', b'}', token.as_bytes()).is_some()
        || memchr2(b'[', b']', token.as_bytes()).is_some()
    {
        return Err(Error::unexpected_bracket(token));
    }
    Ok((token, &input[comma + 1..]))
}

/// Extract one scalar token and convert it to `i64`.
pub fn int(input: &str) -> Result<(i64, &str), Error> {
    let (token, rest) = scalar(input)?;
    Ok((parse_int(token)?, rest))
}

/// Extract one scalar token and convert it to `f64`.
pub fn float(input: &str) -> Result<(f64, &str), Error> {
    let (token, rest) = scalar(input)?;
    Ok((parse_float(token)?, rest))
}

/// Extract one scalar token and convert it to `bool`.
pub fn boolean(input: &str) -> Result<(bool, &str), Error> {
    let (token, rest) = scalar(input)?;
    Ok((parse_bool(token)?, rest))
}

/// Extract one balanced `[...]` span, delimiters included.
pub fn list(input: &str) -> Result<(&str, &str), Error> {
    bracketed(input, Bracket::List)
}

/// Extract one balanced `{...}` span, delimiters included.
pub fn tuple(input: &str) -> Result<(&str, &str), Error> {
    bracketed(input, Bracket::Tuple)
}

/// Pull one balanced bracketed span off the front of `input`.
///
/// Depth counting only considers the requested bracket kind, so a tuple span
/// may freely contain list brackets and vice versa. The open/close counts are
/// balanced over the whole remaining input, not just the span; a document cut
/// short mid-list is reported here rather than at its eventual end.
///
/// Returns:
/// - the span including its delimiters, and the remainder after it with one
///   trailing separator comma (if present) stripped.
fn bracketed(input: &str, bracket: Bracket) -> Result<(&str, &str), Error> {
    let bytes = input.as_bytes();
    let open = bracket.open();
    let close = bracket.close();
    let Some(start) = memchr(open, bytes) else {
        return Err(Error::MissingBracket { bracket });
    };
    if memchr_iter(open, bytes).count() != memchr_iter(close, bytes).count() {
        return Err(Error::UnbalancedBrackets { bracket });
    }
    if let Some(first_close) = memchr(close, bytes) {
        if first_close < start {
            return Err(Error::BracketOrder { bracket });
        }
    }
    let Some(end) = matching_close(bytes, start, open, close) else {
        return Err(Error::UnbalancedBrackets { bracket });
    };
    let span = &input[start..=end];
    let mut rest = &input[end + 1..];
    rest = rest.strip_prefix(',').unwrap_or(rest);
    Ok((span, rest))
}

/// Scan forward from `start` counting nesting depth; the index where depth
/// returns to zero is the matching close.
fn matching_close(bytes: &[u8], start: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Strip exactly the outer `[` and `]` from a span produced by [`list`].
pub fn unwrap_list(span: &str) -> Result<&str, Error> {
    unwrap(span, Bracket::List)
}

/// Strip exactly the outer `{` and `}` from a span produced by [`tuple`].
pub fn unwrap_tuple(span: &str) -> Result<&str, Error> {
    unwrap(span, Bracket::Tuple)
}

fn unwrap(span: &str, bracket: Bracket) -> Result<&str, Error> {
    let bytes = span.as_bytes();
    if bytes.len() < 2 || bytes[0] != bracket.open() || bytes[bytes.len() - 1] != bracket.close() {
        return Err(Error::NotDelimited { bracket });
    }
    Ok(&span[1..span.len() - 1])
}

/// Re-append the separator comma an unwrap removed the context of, so the
/// inner content can be fed back through the extractors: every token,
/// including the last, must be comma-terminated.
pub fn reseal(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 1);
    out.push_str(inner);
    out.push(',');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_splits_on_first_comma() {
        assert_eq!(scalar("hello,1,[1,2,3]").unwrap(), ("hello", "1,[1,2,3]"));
    }

    #[test]
    fn scalar_without_separator() {
        assert!(matches!(scalar("novalue"), Err(Error::MissingSeparator)));
    }

    #[test]
    fn scalar_on_empty_input() {
        assert!(matches!(scalar(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn scalar_refuses_bracketed_tokens() {
        assert!(matches!(scalar("{x,1},2"), Err(Error::UnexpectedBracket { .. })));
        assert!(matches!(scalar("[x],2"), Err(Error::UnexpectedBracket { .. })));
    }

    #[test]
    fn scalar_accepts_empty_token() {
        // A leading comma yields an empty token; conversion wrappers decide
        // whether that is acceptable.
        assert_eq!(scalar(",rest").unwrap(), ("", "rest"));
    }

    #[test]
    fn typed_wrappers_convert() {
        assert_eq!(int("42,x").unwrap(), (42, "x"));
        assert_eq!(float("2.5,x").unwrap(), (2.5, "x"));
        assert_eq!(boolean("true,x").unwrap(), (true, "x"));
        assert!(matches!(int("4.5,x"), Err(Error::NotAnInteger { .. })));
        assert!(matches!(boolean("yes,x"), Err(Error::NotABool { .. })));
    }

    #[test]
    fn list_span_and_remainder() {
        assert_eq!(list("[apple,orange],1").unwrap(), ("[apple,orange]", "1"));
    }

    #[test]
    fn list_keeps_remainder_without_separator() {
        assert_eq!(list("[a,b]").unwrap(), ("[a,b]", ""));
    }

    #[test]
    fn truncated_list_is_unbalanced() {
        assert!(matches!(list("[a,b,c"), Err(Error::UnbalancedBrackets { .. })));
    }

    #[test]
    fn list_close_before_open() {
        assert!(matches!(list("]a[,x"), Err(Error::BracketOrder { .. })));
    }

    #[test]
    fn missing_list_bracket() {
        assert!(matches!(list("a,b,c"), Err(Error::MissingBracket { .. })));
    }

    #[test]
    fn nested_spans_of_the_same_kind() {
        assert_eq!(list("[[1,2],[3]],x").unwrap(), ("[[1,2],[3]]", "x"));
        assert_eq!(tuple("{a,{b,c}},x").unwrap(), ("{a,{b,c}}", "x"));
    }

    #[test]
    fn tuple_span_may_contain_list_brackets() {
        assert_eq!(tuple("{a,[1,2]},x").unwrap(), ("{a,[1,2]}", "x"));
    }

    #[test]
    fn unwrap_and_reseal() {
        assert_eq!(unwrap_list("[a,b]").unwrap(), "a,b");
        assert_eq!(unwrap_tuple("{a,b}").unwrap(), "a,b");
        assert_eq!(reseal("a,b"), "a,b,");
        assert!(matches!(unwrap_list("{a}"), Err(Error::NotDelimited { .. })));
        assert!(matches!(unwrap_tuple("{a"), Err(Error::NotDelimited { .. })));
        assert!(matches!(unwrap_list(""), Err(Error::NotDelimited { .. })));
    }

    #[test]
    fn empty_containers_unwrap_to_empty_content() {
        assert_eq!(unwrap_list("[]").unwrap(), "");
        assert_eq!(unwrap_tuple("{}").unwrap(), "");
    }
}
