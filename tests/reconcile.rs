use indoc::indoc;

use erlterm::{records, Error, Registry};

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

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register::<Fruit>("fruit");
    registry
}

fn orange_store() -> Store {
    Store {
        fruit: vec![Fruit {
            name: "fruit".into(),
            kind: "orange".into(),
            count: 3,
        }],
    }
}

#[test]
fn registered_statements_are_replaced_and_move_to_the_end() {
    let existing = "{fruit,apple,5}.\n{other,x}.\n";
    let merged = erlterm::merge(existing, &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{other,x}.\n{fruit,orange,3}.\n");
}

#[test]
fn unregistered_statements_survive_in_order() {
    let existing = "{motd,hi}.\n{fruit,apple,5}.\n{rate,250}.\n{fruit,plum,1}.\n";
    let merged = erlterm::merge(existing, &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{motd,hi}.\n{rate,250}.\n{fruit,orange,3}.\n");
}

#[test]
fn merging_into_empty_text_yields_only_fresh_statements() {
    let merged = erlterm::merge("", &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{fruit,orange,3}.\n");
}

#[test]
fn merging_an_empty_document_drops_only_stale_statements() {
    let existing = "{fruit,apple,5}.\n{other,x}.\n";
    let merged = erlterm::merge(existing, &Store::default(), &registry()).unwrap();
    assert_eq!(merged, "{other,x}.\n");
}

#[test]
fn kept_statements_are_preprocessed() {
    // Survivors are re-emitted in stripped form: comments and spaces do not
    // survive a merge.
    let existing = indoc! {"
        {motd, hello there}. % greeting
        {fruit, apple, 5}.
    "};
    let merged = erlterm::merge(existing, &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{motd,hellothere}.\n{fruit,orange,3}.\n");
}

#[test]
fn statements_without_a_separator_still_have_a_name() {
    let existing = "{standalone}.\n";
    let merged = erlterm::merge(existing, &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{standalone}.\n{fruit,orange,3}.\n");
}

#[test]
fn fragments_without_an_opening_brace_are_dropped() {
    let existing = "stray}.\n{fruit,apple,5}.\n";
    let merged = erlterm::merge(existing, &orange_store(), &registry()).unwrap();
    assert_eq!(merged, "{fruit,orange,3}.\n");
}

records! {
    #[derive(Debug, Default)]
    pub struct NotADocument {
        label: String => "string",
    }
}

#[test]
fn merge_rejects_non_list_documents() {
    let err = erlterm::merge("{fruit,apple,5}.\n", &NotADocument::default(), &registry())
        .unwrap_err();
    assert!(matches!(err, Error::TopLevel { field: "label" }));
}

records! {
    #[derive(Debug, Default)]
    pub struct Sink {
        everything: [any] => "list",
    }
}

#[test]
fn polymorphic_documents_consider_every_registered_variant_stale() {
    let existing = "{fruit,apple,5}.\n{other,x}.\n";
    let merged = erlterm::merge(existing, &Sink::default(), &registry()).unwrap();
    // `fruit` is registered and the sink would re-emit it; `other` is not.
    assert_eq!(merged, "{other,x}.\n");
}
