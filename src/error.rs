//! Defines the codec error type.

use std::fmt;
use std::io;
use std::str::Utf8Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which bracket pair an extraction was working on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// `[` ... `]`
    List,
    /// `{` ... `}`
    Tuple,
}

impl Bracket {
    pub(crate) const fn open(self) -> u8 {
        match self {
            Bracket::List => b'[',
            Bracket::Tuple => b'{',
        }
    }

    pub(crate) const fn close(self) -> u8 {
        match self {
            Bracket::List => b']',
            Bracket::Tuple => b'}',
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracket::List => f.write_str("list"),
            Bracket::Tuple => f.write_str("tuple"),
        }
    }
}

/// Error type returned by every decode/encode/merge operation.
///
/// All parsing and encoding failures are reported as values; the library has
/// no panicking paths. A failure aborts the operation that produced it;
/// there is no partial-result recovery inside one record.
#[derive(Debug)]
pub enum Error {
    /// A token was required but the input is empty.
    EmptyInput,
    /// The remaining input carries no `,` separator.
    MissingSeparator,
    /// A scalar token contained a bracket character; the field should have
    /// been routed through bracket extraction instead.
    UnexpectedBracket {
        token: String,
    },
    /// The expected opening bracket is absent from the input.
    MissingBracket {
        bracket: Bracket,
    },
    /// Open and close counts of the bracket kind disagree.
    UnbalancedBrackets {
        bracket: Bracket,
    },
    /// A closing bracket appears before the first opening one.
    BracketOrder {
        bracket: Bracket,
    },
    /// A span did not start and end with the expected delimiter pair.
    NotDelimited {
        bracket: Bracket,
    },
    /// Field tag outside the supported vocabulary.
    UnknownTag {
        tag: String,
    },
    /// Token not parseable as a decimal integer.
    NotAnInteger {
        token: String,
    },
    /// Token not parseable as a float.
    NotAFloat {
        token: String,
    },
    /// Token is neither `true` nor `false`.
    NotABool {
        token: String,
    },
    /// The destination shape disagrees with the decoded or encoded value.
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Field index out of range for the record layout.
    NoSuchField {
        index: usize,
    },
    /// A top-level document field was not a list of records.
    TopLevel {
        field: &'static str,
    },
    /// Byte input was not valid UTF-8.
    InvalidUtf8 {
        source: Utf8Error,
    },
    /// File open/read/write failure, propagated unchanged.
    Io {
        source: io::Error,
    },
}

impl Error {
    /// Construct an `UnexpectedBracket` error for the offending token.
    ///
    /// Called by:
    /// - The scalar extractor when a candidate token contains `{`, `}`, `[` or `]`.
    pub(crate) fn unexpected_bracket(token: &str) -> Self {
        Error::UnexpectedBracket {
            token: token.to_owned(),
        }
    }

    pub(crate) fn unknown_tag(tag: &str) -> Self {
        Error::UnknownTag {
            tag: tag.to_owned(),
        }
    }

    pub(crate) fn not_an_integer(token: &str) -> Self {
        Error::NotAnInteger {
            token: token.to_owned(),
        }
    }

    pub(crate) fn not_a_float(token: &str) -> Self {
        Error::NotAFloat {
            token: token.to_owned(),
        }
    }

    pub(crate) fn not_a_bool(token: &str) -> Self {
        Error::NotABool {
            token: token.to_owned(),
        }
    }

    /// Construct a `ShapeMismatch` with human-readable kind names.
    ///
    /// Called by:
    /// - `Term`/`TermRef` conversions and schema-driven dispatch when a value
    ///   cannot be stored into (or read from) the declared field shape.
    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::ShapeMismatch { expected, found }
    }

    /// Construct a `NoSuchField` error for an out-of-range field index.
    pub fn no_such_field(index: usize) -> Self {
        Error::NoSuchField { index }
    }

    pub(crate) fn top_level(field: &'static str) -> Self {
        Error::TopLevel { field }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => f.write_str("input is empty where a token was required"),
            Error::MissingSeparator => f.write_str("no `,` separator in the remaining input"),
            Error::UnexpectedBracket { token } => {
                write!(f, "token `{token}` contains a bracket; extract the list or tuple first")
            }
            Error::MissingBracket { bracket } => {
                write!(f, "input does not contain a {bracket}")
            }
            Error::UnbalancedBrackets { bracket } => {
                write!(f, "{bracket} brackets are unbalanced")
            }
            Error::BracketOrder { bracket } => {
                write!(f, "{bracket} closes before it opens")
            }
            Error::NotDelimited { bracket } => {
                write!(f, "span is not a complete {bracket}")
            }
            Error::UnknownTag { tag } => write!(f, "unrecognized field tag `{tag}`"),
            Error::NotAnInteger { token } => write!(f, "token `{token}` is not an integer"),
            Error::NotAFloat { token } => write!(f, "token `{token}` is not a float"),
            Error::NotABool { token } => write!(f, "token `{token}` is not a boolean"),
            Error::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Error::NoSuchField { index } => write!(f, "record has no field at index {index}"),
            Error::TopLevel { field } => {
                write!(f, "top-level field `{field}` must be a list of records")
            }
            Error::InvalidUtf8 { source } => write!(f, "input is not valid UTF-8: {source}"),
            Error::Io { source } => write!(f, "IO error: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidUtf8 { source } => Some(source),
            Error::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<Utf8Error> for Error {
    fn from(source: Utf8Error) -> Self {
        Error::InvalidUtf8 { source }
    }
}
