#![no_main]

use libfuzzer_sys::fuzz_target;

use erlterm::{records, Registry};

// Exercises the full decode pipeline: comment stripping, statement
// splitting, scalar/bracket extraction, nested tuples, scalar lists and
// polymorphic routing. Decoding may fail, it must never panic.

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Reading {
        tag: String => "string",
        sensor: String => "string",
        values: [f64] => "list",
        window: Window => "tuple",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Window {
        from: i64 => "int",
        to: i64 => "int",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Alert {
        tag: String => "string",
        armed: bool => "bool",
        labels: [String] => "list",
    }

    #[derive(Debug, Default)]
    pub struct Feed {
        readings: [Reading] => "list",
        rest: [any] => "list",
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let mut registry = Registry::new();
    registry.register::<Reading>("reading");
    registry.register::<Alert>("alert");

    let _ = erlterm::from_slice::<Feed>(data, &registry);

    // Wrap the raw input into a statement so the field decoders see it too.
    if let Ok(text) = std::str::from_utf8(data) {
        let wrapped = format!("{{reading,{text}}}.\n");
        let _ = erlterm::from_str::<Feed>(&wrapped, &registry);
    }
});
