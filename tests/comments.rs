use indoc::indoc;

use erlterm::{records, Registry};

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Entry {
        name: String => "string",
        value: i64 => "int",
    }

    #[derive(Debug, Default)]
    pub struct Doc {
        entries: [Entry] => "list",
    }
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register::<Entry>("a");
    registry
}

fn decode(input: &str) -> Doc {
    erlterm::from_str(input, &registry()).unwrap()
}

#[test]
fn trailing_percent_comment_is_invisible() {
    let with = decode("{a,1}. % trailing note");
    let without = decode("{a,1}.");
    assert_eq!(with.entries, without.entries);
}

#[test]
fn slash_comments_are_stripped_too() {
    let doc = decode("{a,1}. // trailing note");
    assert_eq!(doc.entries[0].value, 1);
}

#[test]
fn whole_line_comments() {
    let doc = decode(indoc! {"
        % header comment
        // another header
        {a,1}.
    "});
    assert_eq!(doc.entries.len(), 1);
}

#[test]
fn comment_markers_cut_the_rest_of_the_line() {
    // everything after the marker goes, including further statements
    let doc = decode("{a,1}. % {a,2}.");
    assert_eq!(doc.entries.len(), 1);
}

#[test]
fn spaces_and_carriage_returns_vanish_globally() {
    let doc = decode("{ a , 1 }.\r\n");
    assert_eq!(doc.entries[0].name, "a");
    assert_eq!(doc.entries[0].value, 1);
}

#[test]
fn statements_may_span_lines() {
    let doc = decode(indoc! {"
        {a,
         1}.
    "});
    assert_eq!(doc.entries[0].value, 1);
}

#[test]
fn blank_lines_are_ignored() {
    let doc = decode("\n\n{a,1}.\n\n\n{a,2}.\n\n");
    assert_eq!(doc.entries.len(), 2);
    assert_eq!(doc.entries[1].value, 2);
}

#[test]
fn a_comment_can_split_a_statement_across_lines() {
    let doc = decode(indoc! {"
        {a, % value follows
         7}.
    "});
    assert_eq!(doc.entries[0].value, 7);
}
