//! Schema-driven decoding of term documents.
//!
//! Supported:
//! - Scalars: bareword strings, decimal integers, floats, `true`/`false`.
//! - Nested tuples, decoded into their declared record type.
//! - Lists of scalars, lists of concrete records, and polymorphic lists
//!   whose element type is resolved per element through the [`Registry`].
//! - Documents: `{...}.`-terminated statements routed into the destination's
//!   list fields by variant name and element shape.
//!
//! Quirks preserved from the wire format's lineage, all covered by tests:
//! - Comments (`%` and `//`) and all spaces/carriage returns are stripped
//!   before parsing, so statements may span physical lines and atoms can
//!   never contain spaces.
//! - Inside a polymorphic list, an unresolved variant name ends the list
//!   silently; it is indistinguishable from the list legitimately ending.
//! - A top-level statement whose variant is unregistered is dropped without
//!   error.
//! - Tokens past the last schema field of a tuple are ignored.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::extract;
use crate::registry::Registry;
use crate::schema::{Elem, FieldTag, Record, RecordShape};
use crate::term::Term;

/// Decode a document into a fresh `D`.
///
/// Every statement is routed into the first field of `D` whose element shape
/// matches the statement's registered variant; unregistered statements are
/// dropped. One malformed statement aborts the whole decode.
pub fn from_str<D: Record + Default>(input: &str, registry: &Registry) -> Result<D, Error> {
    let mut out = D::default();
    let clean = strip_noise(input);
    for statement in statements(&clean) {
        decode_statement(&statement, &mut out, registry)?;
    }
    Ok(out)
}

/// Decode a document from raw bytes. The input must be valid UTF-8.
pub fn from_slice<D: Record + Default>(input: &[u8], registry: &Registry) -> Result<D, Error> {
    from_str(std::str::from_utf8(input)?, registry)
}

/// Read a whole file and decode it as a document.
pub fn from_file<D: Record + Default>(
    path: impl AsRef<Path>,
    registry: &Registry,
) -> Result<D, Error> {
    let data = fs::read(path)?;
    from_slice(&data, registry)
}

/// Strip comments and whitespace ahead of parsing.
///
/// Per physical line, everything from the first `%` and from the first `//`
/// is removed; then every space and carriage return goes, globally. The
/// surviving text is joined without separators, so a statement may span
/// lines.
pub(crate) fn strip_noise(input: &str) -> String {
    let mut clean = String::with_capacity(input.len());
    for line in input.split('\n') {
        let line = match line.find('%') {
            Some(i) => &line[..i],
            None => line,
        };
        let line = match line.find("//") {
            Some(i) => &line[..i],
            None => line,
        };
        for c in line.chars() {
            if c != ' ' && c != '\r' {
                clean.push(c);
            }
        }
    }
    clean
}

/// Split pre-stripped text on the `}.` statement terminator and hand back
/// each statement's content in extractor form: the opening brace dropped and
/// the separator the split consumed restored, so the variant name is the
/// first extractable token.
///
/// Segments without an opening brace (typically the tail after the final
/// terminator) are skipped.
pub(crate) fn statements(clean: &str) -> Vec<String> {
    let mut out = Vec::new();
    for segment in clean.split("}.") {
        let Some(brace) = segment.find('{') else { continue };
        let mut inner = String::with_capacity(segment.len());
        inner.push_str(&segment[..brace]);
        inner.push_str(&segment[brace + 1..]);
        inner.push(',');
        out.push(inner);
    }
    out
}

/// Route one statement into the destination document.
///
/// The statement's variant name selects a registered shape; the first
/// document field whose element shape matches receives the decoded record,
/// and a statement lands in at most one field. `Any` fields match every
/// registered variant.
fn decode_statement(
    inner: &str,
    out: &mut dyn Record,
    registry: &Registry,
) -> Result<(), Error> {
    let (name, _) = extract::scalar(inner)?;
    let Some(shape) = registry.get(name) else {
        // Unregistered variants contribute to no field.
        return Ok(());
    };
    for (index, spec) in out.fields().iter().enumerate() {
        // only list fields receive statements; a nested tuple of the same
        // record type is not a destination
        if FieldTag::parse(spec.tag)? != FieldTag::List {
            continue;
        }
        let matched = match spec.elem {
            Elem::Record(field_shape) => field_shape == *shape,
            Elem::Any => true,
            _ => false,
        };
        if !matched {
            continue;
        }
        let mut instance = shape.instance();
        decode_fields(instance.as_mut(), inner, registry)?;
        out.push_term(index, Term::Record(instance))?;
        return Ok(());
    }
    Ok(())
}

/// Decode one record's fields off the front of `input`, consuming tokens in
/// schema order. Each field's tag decides the extraction path; the schema,
/// not lookahead, makes that decision. Input past the last field is ignored.
pub(crate) fn decode_fields(
    record: &mut dyn Record,
    input: &str,
    registry: &Registry,
) -> Result<(), Error> {
    let mut rest = input;
    for (index, spec) in record.fields().iter().enumerate() {
        match FieldTag::parse(spec.tag)? {
            FieldTag::String => {
                let (token, rem) = extract::scalar(rest)?;
                rest = rem;
                record.set_term(index, Term::Atom(token.to_owned()))?;
            }
            FieldTag::Int => {
                let (value, rem) = extract::int(rest)?;
                rest = rem;
                record.set_term(index, Term::Int(value))?;
            }
            FieldTag::Float64 => {
                let (value, rem) = extract::float(rest)?;
                rest = rem;
                record.set_term(index, Term::Float(value))?;
            }
            FieldTag::Bool => {
                let (value, rem) = extract::boolean(rest)?;
                rest = rem;
                record.set_term(index, Term::Bool(value))?;
            }
            FieldTag::Tuple => {
                let (span, rem) = extract::tuple(rest)?;
                rest = rem;
                let Elem::Record(shape) = spec.elem else {
                    return Err(Error::mismatch("record", spec.elem.describe()));
                };
                let resealed = extract::reseal(extract::unwrap_tuple(span)?);
                let mut nested = shape.instance();
                decode_fields(nested.as_mut(), &resealed, registry)?;
                record.set_term(index, Term::Record(nested))?;
            }
            FieldTag::List => {
                let (span, rem) = extract::list(rest)?;
                rest = rem;
                let inner = extract::unwrap_list(span)?;
                let items = decode_elements(inner, spec.elem, registry)?;
                record.set_term(index, Term::List(items))?;
            }
        }
    }
    Ok(())
}

/// Decode the unwrapped content of a list, one element at a time.
fn decode_elements(inner: &str, elem: Elem, registry: &Registry) -> Result<Vec<Term>, Error> {
    if inner.is_empty() {
        // `[]` is an empty sequence, not an empty token.
        return Ok(Vec::new());
    }
    let resealed = extract::reseal(inner);
    match elem {
        Elem::Atom => scalar_elements(&resealed, |s| {
            extract::scalar(s).map(|(v, r)| (Term::Atom(v.to_owned()), r))
        }),
        Elem::Int => scalar_elements(&resealed, |s| {
            extract::int(s).map(|(v, r)| (Term::Int(v), r))
        }),
        Elem::Float => scalar_elements(&resealed, |s| {
            extract::float(s).map(|(v, r)| (Term::Float(v), r))
        }),
        Elem::Bool => scalar_elements(&resealed, |s| {
            extract::boolean(s).map(|(v, r)| (Term::Bool(v), r))
        }),
        Elem::Record(shape) => record_elements(&resealed, shape, registry),
        Elem::Any => any_elements(&resealed, registry),
        Elem::None => Err(Error::mismatch("list element shape", elem.describe())),
    }
}

/// Loop one scalar extraction until it fails. A failure with nothing left to
/// consume is the end of the list; a failure that leaves input behind is
/// escalated.
fn scalar_elements(
    full: &str,
    one: fn(&str) -> Result<(Term, &str), Error>,
) -> Result<Vec<Term>, Error> {
    let mut rest = full;
    let mut items = Vec::new();
    loop {
        match one(rest) {
            Ok((term, rem)) => {
                items.push(term);
                rest = rem;
            }
            Err(_) if rest.is_empty() => break,
            Err(err) => return Err(err),
        }
    }
    Ok(items)
}

fn record_elements(
    full: &str,
    shape: RecordShape,
    registry: &Registry,
) -> Result<Vec<Term>, Error> {
    let mut rest = full;
    let mut items = Vec::new();
    loop {
        let (span, rem) = match extract::tuple(rest) {
            Ok(found) => found,
            Err(_) if rest.is_empty() => break,
            Err(err) => return Err(err),
        };
        rest = rem;
        let resealed = extract::reseal(extract::unwrap_tuple(span)?);
        let mut instance = shape.instance();
        decode_fields(instance.as_mut(), &resealed, registry)?;
        items.push(Term::Record(instance));
    }
    Ok(items)
}

/// Like [`record_elements`], but each element's type is resolved through the
/// registry from its first atom. An unresolved name ends the loop silently;
/// the unconsumed remainder is treated as a terminating condition, not an
/// error, so callers cannot tell a truncated list from a finished one.
fn any_elements(full: &str, registry: &Registry) -> Result<Vec<Term>, Error> {
    let mut rest = full;
    let mut items = Vec::new();
    loop {
        let (span, rem) = match extract::tuple(rest) {
            Ok(found) => found,
            Err(_) if rest.is_empty() => break,
            Err(err) => return Err(err),
        };
        rest = rem;
        let resealed = extract::reseal(extract::unwrap_tuple(span)?);
        let (name, _) = extract::scalar(&resealed)?;
        let Some(shape) = registry.get(name) else {
            break;
        };
        let mut instance = shape.instance();
        decode_fields(instance.as_mut(), &resealed, registry)?;
        items.push(Term::Record(instance));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_noise_removes_both_comment_styles() {
        assert_eq!(strip_noise("{a,1}. % note"), "{a,1}.");
        assert_eq!(strip_noise("{a,1}. // note"), "{a,1}.");
        assert_eq!(strip_noise("% whole line\n{a,1}."), "{a,1}.");
    }

    #[test]
    fn strip_noise_removes_spaces_and_carriage_returns() {
        assert_eq!(strip_noise("{a, 1, [2, 3]}.\r\n"), "{a,1,[2,3]}.");
        assert_eq!(strip_noise("{a,\n 1}.\n"), "{a,1}.");
    }

    #[test]
    fn statements_split_and_reseal() {
        let clean = strip_noise("{fruit,apple,5}.\n{other,x}.\n");
        assert_eq!(statements(&clean), vec!["fruit,apple,5,", "other,x,"]);
    }

    #[test]
    fn statements_skip_braceless_tails() {
        assert_eq!(statements("stray text"), Vec::<String>::new());
        assert_eq!(statements("{a,1}.trailing"), vec!["a,1,"]);
    }
}
