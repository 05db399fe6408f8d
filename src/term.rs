//! The transient value layer between the token grammar and typed records.
//!
//! A [`Term`] is created while one decode call runs and is consumed by the
//! destination record's field setters; a [`TermRef`] borrows a record's
//! fields for the duration of one encode call. Neither outlives the
//! operation that produced it.

use crate::error::Error;
use crate::schema::Record;

/// One decoded value: a scalar, a list of terms, or a decoded tuple.
#[derive(Debug)]
pub enum Term {
    /// Bareword token; the grammar has no quoting, so atoms carry no spaces.
    Atom(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Term>),
    /// A decoded tuple, already shaped by its record schema.
    Record(Box<dyn Record>),
}

impl Term {
    /// Human-readable kind name, used in shape-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Int(_) => "integer",
            Term::Float(_) => "float",
            Term::Bool(_) => "boolean",
            Term::List(_) => "list",
            Term::Record(_) => "record",
        }
    }

    pub fn into_atom(self) -> Result<String, Error> {
        match self {
            Term::Atom(value) => Ok(value),
            other => Err(Error::mismatch("atom", other.kind())),
        }
    }

    pub fn into_int(self) -> Result<i64, Error> {
        match self {
            Term::Int(value) => Ok(value),
            other => Err(Error::mismatch("integer", other.kind())),
        }
    }

    pub fn into_float(self) -> Result<f64, Error> {
        match self {
            Term::Float(value) => Ok(value),
            other => Err(Error::mismatch("float", other.kind())),
        }
    }

    pub fn into_bool(self) -> Result<bool, Error> {
        match self {
            Term::Bool(value) => Ok(value),
            other => Err(Error::mismatch("boolean", other.kind())),
        }
    }

    pub fn into_list(self) -> Result<Vec<Term>, Error> {
        match self {
            Term::List(value) => Ok(value),
            other => Err(Error::mismatch("list", other.kind())),
        }
    }

    pub fn into_record(self) -> Result<Box<dyn Record>, Error> {
        match self {
            Term::Record(value) => Ok(value),
            other => Err(Error::mismatch("record", other.kind())),
        }
    }
}

/// Borrowed view of a record field, produced during encoding.
#[derive(Debug)]
pub enum TermRef<'a> {
    Atom(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<TermRef<'a>>),
    Record(&'a dyn Record),
}

impl TermRef<'_> {
    /// Human-readable kind name, used in shape-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            TermRef::Atom(_) => "atom",
            TermRef::Int(_) => "integer",
            TermRef::Float(_) => "float",
            TermRef::Bool(_) => "boolean",
            TermRef::List(_) => "list",
            TermRef::Record(_) => "record",
        }
    }
}
