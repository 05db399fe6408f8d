//! Conversions from raw scalar tokens to typed values.

use crate::error::Error;

/// Parse a decimal integer token.
///
/// Returns:
/// - `Ok(i64)` on success
/// - `Err(NotAnInteger)` if the token is not a decimal integer
pub(crate) fn parse_int(token: &str) -> Result<i64, Error> {
    token.parse::<i64>().map_err(|_| Error::not_an_integer(token))
}

/// Parse a float token with standard library semantics.
pub(crate) fn parse_float(token: &str) -> Result<f64, Error> {
    token.parse::<f64>().map_err(|_| Error::not_a_float(token))
}

/// Parse a boolean token. Only the exact literals `true` and `false`
/// are accepted.
pub(crate) fn parse_bool(token: &str) -> Result<bool, Error> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::not_a_bool(token)),
    }
}
