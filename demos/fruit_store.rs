// Decode a small inventory document, change it, and reconcile the change
// back into the original text. Statements the store does not own (the motd
// and the rate limit) survive the merge untouched.

use erlterm::{records, Registry};

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Fruit {
        name: String => "string",
        kind: String => "string",
        count: i64 => "int",
        organic: bool => "bool",
    }

    #[derive(Debug, Default)]
    pub struct Store {
        fruit: [Fruit] => "list",
    }
}

const DOCUMENT: &str = "
% store state, rewritten by the inventory job
{motd, welcome}.
{rate_limit, 250}.
{fruit, apple, 5, true}.
{fruit, orange, 3, false}.  // imported
";

fn main() -> Result<(), erlterm::Error> {
    let mut registry = Registry::new();
    registry.register::<Fruit>("fruit");

    let mut store: Store = erlterm::from_str(DOCUMENT, &registry)?;
    println!("loaded {} fruit statements", store.fruit.len());
    for fruit in &store.fruit {
        println!("  {} x{} organic={}", fruit.kind, fruit.count, fruit.organic);
    }

    // Sell three apples and restock pears.
    store.fruit[0].count -= 3;
    store.fruit.push(Fruit {
        name: "fruit".into(),
        kind: "pear".into(),
        count: 12,
        organic: true,
    });

    let merged = erlterm::merge(DOCUMENT, &store, &registry)?;
    println!("--- merged document ---");
    print!("{merged}");
    Ok(())
}
