//! Schema-driven encoding into the term grammar.
//!
//! Single-pass: fields render in declared order, every value is followed by
//! its separator comma, and the final separator of a container body is
//! trimmed before the closing delimiter. No intermediate tree is built.

use crate::error::Error;
use crate::schema::{Elem, FieldTag, Record};
use crate::term::TermRef;

/// Encode a whole document: one `{...}.` statement per element of every
/// top-level list field, in field-then-element order, each terminated by a
/// line break.
///
/// Every top-level field must be a `list` of record-kind elements (concrete
/// or polymorphic); anything else is a [`Error::TopLevel`] error.
pub fn to_string(document: &dyn Record) -> Result<String, Error> {
    let mut out = String::new();
    for (index, spec) in document.fields().iter().enumerate() {
        if FieldTag::parse(spec.tag)? != FieldTag::List {
            return Err(Error::top_level(spec.name));
        }
        match spec.elem {
            Elem::Record(_) | Elem::Any => {}
            _ => return Err(Error::top_level(spec.name)),
        }
        let Some(TermRef::List(elements)) = document.term(index) else {
            return Err(Error::top_level(spec.name));
        };
        for element in &elements {
            let TermRef::Record(record) = element else {
                return Err(Error::top_level(spec.name));
            };
            encode_record(*record, &mut out)?;
            // a statement carries the terminator instead of a separator
            out.pop();
            out.push('.');
            out.push('\n');
        }
    }
    Ok(out)
}

/// Encode one record as `{...},`: fields in tag order, the last field's
/// separator trimmed, the tuple itself comma-terminated like any value.
pub(crate) fn encode_record(record: &dyn Record, out: &mut String) -> Result<(), Error> {
    let mut body = String::new();
    for (index, spec) in record.fields().iter().enumerate() {
        // rendering follows the value, but the tag must still be one the
        // decoder would accept
        FieldTag::parse(spec.tag)?;
        let Some(value) = record.term(index) else {
            return Err(Error::no_such_field(index));
        };
        encode_term(&value, &mut body)?;
    }
    if body.ends_with(',') {
        body.pop();
    }
    out.push('{');
    out.push_str(&body);
    out.push('}');
    out.push(',');
    Ok(())
}

/// Render one value followed by its separator comma.
fn encode_term(value: &TermRef<'_>, out: &mut String) -> Result<(), Error> {
    match value {
        TermRef::Atom(token) => {
            out.push_str(token);
            out.push(',');
        }
        TermRef::Int(v) => {
            out.push_str(&v.to_string());
            out.push(',');
        }
        TermRef::Float(v) => {
            out.push_str(&v.to_string());
            out.push(',');
        }
        TermRef::Bool(v) => {
            out.push_str(if *v { "true" } else { "false" });
            out.push(',');
        }
        TermRef::List(items) => {
            let mut body = String::new();
            for item in items {
                encode_term(item, &mut body)?;
            }
            if body.ends_with(',') {
                body.pop();
            }
            out.push('[');
            out.push_str(&body);
            out.push(']');
            out.push(',');
        }
        TermRef::Record(record) => {
            encode_record(*record, out)?;
        }
    }
    Ok(())
}
