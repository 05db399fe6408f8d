//! The static record schema a decode or encode pass is driven by.
//!
//! Instead of runtime type introspection, every decodable type carries an
//! ordered table of [`FieldSpec`] entries, one per serialized token in
//! left-to-right order, plus generated setters and getters that move values
//! between the table-driven core and the concrete struct fields. The
//! [`records!`](crate::records!) macro builds all of this from one
//! declaration.

use std::any::{Any, TypeId};
use std::fmt;

use crate::error::Error;
use crate::term::{Term, TermRef};

/// Effective field tag, parsed from the raw tag text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTag {
    String,
    Int,
    Float64,
    Bool,
    List,
    Tuple,
}

impl FieldTag {
    /// Parse raw tag text into the effective tag.
    ///
    /// Tag text of the form `"name,extra"` is effective up to the first
    /// comma; the trailing metadata is ignored. Anything outside the
    /// vocabulary is an `UnknownTag` error.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let effective = match raw.find(',') {
            Some(i) => &raw[..i],
            None => raw,
        };
        match effective {
            "string" => Ok(FieldTag::String),
            "int" => Ok(FieldTag::Int),
            "float64" => Ok(FieldTag::Float64),
            "bool" => Ok(FieldTag::Bool),
            "list" => Ok(FieldTag::List),
            "tuple" => Ok(FieldTag::Tuple),
            _ => Err(Error::unknown_tag(raw)),
        }
    }
}

/// Identity and factory for one concrete record type.
///
/// Shapes compare equal exactly when they stand for the same Rust type; the
/// factory produces a fresh default instance, which carries its own field
/// layout through [`Record::fields`].
#[derive(Clone, Copy)]
pub struct RecordShape {
    id: TypeId,
    make: fn() -> Box<dyn Record>,
}

impl RecordShape {
    /// The shape of record type `R`.
    pub fn of<R: Record + Default>() -> Self {
        RecordShape {
            id: TypeId::of::<R>(),
            make: || Box::new(R::default()),
        }
    }

    /// Produce a fresh, zero-valued instance.
    pub fn instance(&self) -> Box<dyn Record> {
        (self.make)()
    }
}

impl PartialEq for RecordShape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordShape {}

impl fmt::Debug for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordShape").field(&self.id).finish()
    }
}

/// Element shape of a `list` field, or the nested shape of a `tuple` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elem {
    /// Scalar field; no element shape.
    None,
    /// List of bareword strings.
    Atom,
    /// List of integers.
    Int,
    /// List of floats.
    Float,
    /// List of booleans.
    Bool,
    /// A concrete record: nested tuple field, or list-of-record elements.
    Record(RecordShape),
    /// Polymorphic elements, resolved per element through the registry.
    Any,
}

impl Elem {
    /// Human-readable shape name, used in shape-mismatch errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Elem::None => "none",
            Elem::Atom => "atom",
            Elem::Int => "integer",
            Elem::Float => "float",
            Elem::Bool => "boolean",
            Elem::Record(_) => "record",
            Elem::Any => "any",
        }
    }
}

/// One entry of a record's field table.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: &'static str,
    /// Raw tag text; parsed with [`FieldTag::parse`] on every dispatch so
    /// unknown tags surface as errors, not panics.
    pub tag: &'static str,
    /// Element or nested shape for `list`/`tuple` fields.
    pub elem: Elem,
}

/// A type that can be decoded from and encoded to the term grammar.
///
/// Implementations are generated by [`records!`](crate::records!); the
/// decoder and encoder only ever see this interface, never the concrete
/// struct. Records must also implement `Default` (fresh instances for the
/// registry factory) and `Debug`.
pub trait Record: Any + fmt::Debug {
    /// Field layout in serialized order.
    fn field_specs() -> &'static [FieldSpec]
    where
        Self: Sized;

    /// Same layout, reachable through a trait object.
    fn fields(&self) -> &'static [FieldSpec];

    /// Store a decoded value into the field at `index`.
    fn set_term(&mut self, index: usize, value: Term) -> Result<(), Error>;

    /// Append one decoded element to the list field at `index`.
    fn push_term(&mut self, index: usize, value: Term) -> Result<(), Error>;

    /// Borrow the current value of the field at `index`.
    fn term(&self, index: usize) -> Option<TermRef<'_>>;

    /// Borrow as `Any`, for downcasting to the concrete record type.
    fn as_any(&self) -> &dyn Any;

    /// Consume as `Any`, for downcasting to the concrete record type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}
