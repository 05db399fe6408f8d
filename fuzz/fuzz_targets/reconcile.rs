#![no_main]

use libfuzzer_sys::fuzz_target;

use erlterm::{records, Registry};

// Merges a fixed document into arbitrary existing text. The merge may
// fail on malformed input, it must never panic, and the fresh statements
// must always be present in a successful result.

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Fruit {
        name: String => "string",
        kind: String => "string",
        count: i64 => "int",
    }

    #[derive(Debug, Default)]
    pub struct Store {
        fruit: [Fruit] => "list",
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(existing) = std::str::from_utf8(data) else {
        return;
    };

    let mut registry = Registry::new();
    registry.register::<Fruit>("fruit");

    let store = Store {
        fruit: vec![Fruit {
            name: "fruit".into(),
            kind: "plum".into(),
            count: 1,
        }],
    };

    if let Ok(merged) = erlterm::merge(existing, &store, &registry) {
        assert!(merged.contains("{fruit,plum,1}."));
    }
});
