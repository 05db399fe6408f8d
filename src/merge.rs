//! Statement reconciliation: selective re-writes of an existing document.
//!
//! Merging keeps every statement whose variant the supplied record will not
//! re-emit, in its original relative order, and appends freshly encoded
//! statements at the end. Statements are kept in preprocessed form; the
//! comment and whitespace stripping applied before splitting is not undone.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::registry::Registry;
use crate::schema::{Elem, FieldTag, Record};

/// Reconcile `existing` document text with `document`.
///
/// A statement is stale when its variant name resolves, through the
/// registry, to an element shape of one of `document`'s fields. Stale
/// statements are dropped; the remainder survives in order, and the freshly
/// encoded statements of `document` follow. Every statement in the result is
/// terminated by a line break.
pub fn merge(existing: &str, document: &dyn Record, registry: &Registry) -> Result<String, Error> {
    let clean = crate::de::strip_noise(existing);
    let mut kept = Vec::new();
    for segment in clean.split("}.") {
        let Some(brace) = segment.find('{') else { continue };
        let name = statement_name(&segment[brace + 1..]);
        if is_stale(name, document, registry)? {
            continue;
        }
        // restore the terminator the split consumed
        let mut full = String::with_capacity(segment.len() + 2);
        full.push_str(segment);
        full.push_str("}.");
        kept.push(full);
    }
    let fresh = crate::ser::to_string(document)?;
    for line in fresh.split('\n') {
        if line.contains('{') {
            kept.push(line.to_owned());
        }
    }
    let mut out = String::new();
    for statement in &kept {
        out.push_str(statement);
        out.push('\n');
    }
    Ok(out)
}

/// Reconcile a document given as raw bytes. The input must be valid UTF-8.
pub fn merge_slice(
    existing: &[u8],
    document: &dyn Record,
    registry: &Registry,
) -> Result<String, Error> {
    merge(std::str::from_utf8(existing)?, document, registry)
}

/// Read the file at `path`, reconcile it with `document`, and write the
/// result back to the same path.
pub fn merge_file(
    path: impl AsRef<Path>,
    document: &dyn Record,
    registry: &Registry,
) -> Result<(), Error> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let merged = merge_slice(&data, document, registry)?;
    fs::write(path, merged)?;
    Ok(())
}

/// The variant name of a split statement: the text after the opening brace
/// up to the first comma, or all of it when the statement has a single
/// element.
fn statement_name(after_brace: &str) -> &str {
    match after_brace.find(',') {
        Some(i) => &after_brace[..i],
        None => after_brace,
    }
}

/// Whether a statement under `name` is one `document` will re-emit.
///
/// Uses the same shape matching as decoding: the registered shape must equal
/// a field's concrete element shape, or the field is polymorphic and matches
/// any registered name. Fields are validated on the way: a document whose
/// top-level fields are not lists of records cannot merge.
fn is_stale(name: &str, document: &dyn Record, registry: &Registry) -> Result<bool, Error> {
    for spec in document.fields() {
        if FieldTag::parse(spec.tag)? != FieldTag::List {
            return Err(Error::top_level(spec.name));
        }
        let matched = match spec.elem {
            Elem::Record(shape) => registry
                .get(name)
                .is_some_and(|registered| *registered == shape),
            Elem::Any => registry.contains(name),
            _ => return Err(Error::top_level(spec.name)),
        };
        if matched {
            return Ok(true);
        }
    }
    Ok(false)
}
