use erlterm::{records, Registry};

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Fruit {
        name: String => "string",
        kind: String => "string",
        count: i64 => "int",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Crate {
        name: String => "string",
        weight: f64 => "float64",
        sealed: bool => "bool",
        fruit: [Fruit] => "list",
    }

    #[derive(Debug, Default)]
    pub struct Store {
        fruit: [Fruit] => "list",
        crates: [Crate] => "list",
    }
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register::<Fruit>("fruit");
    registry.register::<Crate>("crate");
    registry
}

#[test]
fn single_statement() {
    let store: Store = erlterm::from_str("{fruit,apple,5}.\n", &registry()).unwrap();
    assert_eq!(store.fruit.len(), 1);
    assert_eq!(store.fruit[0].name, "fruit");
    assert_eq!(store.fruit[0].kind, "apple");
    assert_eq!(store.fruit[0].count, 5);
}

#[test]
fn statements_keep_their_order_per_field() {
    let doc = "{fruit,apple,5}.\n{crate,box1,2.5,true,[{fruit,plum,80}]}.\n{fruit,orange,3}.\n";
    let store: Store = erlterm::from_str(doc, &registry()).unwrap();
    assert_eq!(store.fruit.len(), 2);
    assert_eq!(store.fruit[0].kind, "apple");
    assert_eq!(store.fruit[1].kind, "orange");
    assert_eq!(store.crates.len(), 1);
    let crate_ = &store.crates[0];
    assert_eq!(store.crates[0].weight, 2.5);
    assert!(crate_.sealed);
    assert_eq!(crate_.fruit, vec![Fruit { name: "fruit".into(), kind: "plum".into(), count: 80 }]);
}

#[test]
fn unregistered_statements_are_dropped_without_error() {
    let doc = "{motd,hello}.\n{fruit,apple,5}.\n";
    let store: Store = erlterm::from_str(doc, &registry()).unwrap();
    assert_eq!(store.fruit.len(), 1);
    assert_eq!(store.crates.len(), 0);
}

#[test]
fn empty_document_decodes_to_defaults() {
    let store: Store = erlterm::from_str("", &registry()).unwrap();
    assert!(store.fruit.is_empty());
    assert!(store.crates.is_empty());
}

#[test]
fn tokens_past_the_last_field_are_ignored() {
    let store: Store = erlterm::from_str("{fruit,apple,5,surplus,42}.\n", &registry()).unwrap();
    assert_eq!(store.fruit[0].count, 5);
}

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Npc {
        tag: String => "string",
        id: i64 => "int",
        position: Position => "tuple",
        dialogue: [String] => "list",
        weights: [f64] => "list",
        flags: [bool] => "list",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Position {
        x: i64 => "int",
        y: i64 => "int",
    }

    #[derive(Debug, Default)]
    pub struct Level {
        npcs: [Npc] => "list",
    }
}

#[test]
fn nested_tuples_and_scalar_lists() {
    let mut registry = Registry::new();
    registry.register::<Npc>("npc");

    let doc = "{npc,7,{3,-4},[hi,bye],[0.5,1.5],[true,false]}.\n";
    let level: Level = erlterm::from_str(doc, &registry).unwrap();
    let npc = &level.npcs[0];
    assert_eq!(npc.id, 7);
    assert_eq!(npc.position, Position { x: 3, y: -4 });
    assert_eq!(npc.dialogue, vec!["hi".to_owned(), "bye".to_owned()]);
    assert_eq!(npc.weights, vec![0.5, 1.5]);
    assert_eq!(npc.flags, vec![true, false]);
}

#[test]
fn empty_lists_decode_to_empty_sequences() {
    let mut registry = Registry::new();
    registry.register::<Npc>("npc");

    let doc = "{npc,1,{0,0},[],[],[]}.\n";
    let level: Level = erlterm::from_str(doc, &registry).unwrap();
    assert_eq!(level.npcs[0].dialogue, Vec::<String>::new());
    assert_eq!(level.npcs[0].weights, Vec::<f64>::new());
    assert_eq!(level.npcs[0].flags, Vec::<bool>::new());
}

records! {
    #[derive(Debug, Default)]
    pub struct TwinStore {
        first: [Fruit] => "list",
        second: [Fruit] => "list",
    }
}

#[test]
fn first_declared_field_wins_when_two_fields_share_a_shape() {
    let store: TwinStore = erlterm::from_str("{fruit,apple,5}.\n", &registry()).unwrap();
    assert_eq!(store.first.len(), 1);
    assert!(store.second.is_empty());
}
