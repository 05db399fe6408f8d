// A polymorphic save file: one list accepts every registered entity kind,
// resolved per statement by its leading atom. Demonstrates downcasting the
// decoded trait objects back to their concrete types, and the silent
// truncation that happens when a variant is missing from the registry.

use erlterm::{records, Record, Registry};

records! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Npc {
        tag: String => "string",
        id: i64 => "int",
        position: Position => "tuple",
        dialogue: [String] => "list",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Position {
        x: f64 => "float64",
        y: f64 => "float64",
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Chest {
        tag: String => "string",
        id: i64 => "int",
        locked: bool => "bool",
        loot: [i64] => "list",
    }

    #[derive(Debug, Default)]
    pub struct World {
        entities: [any] => "list",
    }
}

const SAVE: &str = "
{npc, 1, {2.5, -4.0}, [hello, farewell]}.
{chest, 7, true, [101, 102, 205]}.
{npc, 2, {0.0, 0.0}, []}.
";

fn main() -> Result<(), erlterm::Error> {
    let mut registry = Registry::new();
    registry.register::<Npc>("npc");
    registry.register::<Chest>("chest");

    let world: World = erlterm::from_str(SAVE, &registry)?;
    for entity in &world.entities {
        if let Some(npc) = entity.as_any().downcast_ref::<Npc>() {
            println!("npc #{} at ({}, {})", npc.id, npc.position.x, npc.position.y);
        } else if let Some(chest) = entity.as_any().downcast_ref::<Chest>() {
            println!("chest #{} locked={} items={}", chest.id, chest.locked, chest.loot.len());
        }
    }

    let round_tripped = erlterm::to_string(&world)?;
    print!("{round_tripped}");

    // With `chest` missing from the registry, a polymorphic *list* decode
    // would stop at the first chest; at the top level, chest statements are
    // simply dropped.
    let mut partial = Registry::new();
    partial.register::<Npc>("npc");
    let npcs_only: World = erlterm::from_str(SAVE, &partial)?;
    println!("with a partial registry: {} entities", npcs_only.entities.len());
    Ok(())
}
