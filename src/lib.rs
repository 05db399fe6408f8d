//! Schema-driven codec for Erlang-style textual term files.
//!
//! The format is a sequence of `{...}.`-terminated tuple statements built
//! from bareword atoms, integers, floats, `true`/`false`, lists `[...]` and
//! nested tuples `{...}`, with `,` separators and two comment styles (`%`
//! and `//`). Decoding is driven entirely by a per-type field table declared
//! with [`records!`]; there is no lookahead and no runtime type
//! introspection. Tuples whose type is only known at run time (polymorphic
//! list elements and top-level statements) are resolved by their first atom
//! through a caller-owned [`Registry`].
//!
//! Supported operations:
//! - [`from_str`] / [`from_slice`] / [`from_file`]: decode a document into a
//!   typed destination record.
//! - [`to_string`]: encode a document record, one statement per list
//!   element.
//! - [`merge`] / [`merge_slice`] / [`merge_file`]: reconcile an existing
//!   document: statements the supplied record re-emits are dropped and the
//!   fresh encoding is appended; everything else survives in order.
//!
//! Not supported, intentionally: arbitrary term syntax. The codec covers
//! exactly the scalar/list/tuple shapes a tagged record schema can declare,
//! and whitespace is stripped globally before parsing, so atoms can never
//! contain spaces.
//!
//! ```rust
//! use erlterm::{records, Registry};
//!
//! records! {
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct Fruit {
//!         name: String => "string",
//!         kind: String => "string",
//!         count: i64 => "int",
//!     }
//!
//!     #[derive(Debug, Default)]
//!     pub struct Store {
//!         fruit: [Fruit] => "list",
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register::<Fruit>("fruit");
//!
//! let doc = "
//!     {fruit, apple, 5}.   % in stock
//!     {fruit, orange, 3}.
//! ";
//! let store: Store = erlterm::from_str(doc, &registry).unwrap();
//! assert_eq!(store.fruit.len(), 2);
//! assert_eq!(store.fruit[1].name, "fruit");
//! assert_eq!(store.fruit[1].kind, "orange");
//!
//! let encoded = erlterm::to_string(&store).unwrap();
//! assert_eq!(encoded, "{fruit,apple,5}.\n{fruit,orange,3}.\n");
//! ```

pub mod de;
pub mod error;
pub mod extract;
mod macros;
pub mod merge;
mod parse_scalars;
pub mod registry;
pub mod schema;
pub mod ser;
pub mod term;

pub use de::{from_file, from_slice, from_str};
pub use error::{Bracket, Error, Result};
pub use merge::{merge, merge_file, merge_slice};
pub use registry::Registry;
pub use schema::{Elem, FieldSpec, FieldTag, Record, RecordShape};
pub use ser::to_string;
pub use term::{Term, TermRef};
