//! The declarative builder for record schemas.
//!
//! One `records!` block declares the struct, its field table and the glue
//! between the two, so the field order written here is the field order on
//! the wire. Call sites stay free of hand-written trait impls, and the
//! schema can never drift from the struct it describes.

/// Declare one or more record types and implement [`Record`](crate::Record)
/// for them.
///
/// Each field is written as `name: type => "tag"`. The tag is the wire-level
/// tag text (`string`, `int`, `float64`, `bool`, `list`, `tuple`, optionally
/// with `,`-separated trailing metadata, which is ignored); the type decides
/// the storage and the element shape:
///
/// | declaration      | storage                      | used with tag |
/// |------------------|------------------------------|---------------|
/// | `String`         | `String`                     | `string`      |
/// | `i64`            | `i64`                        | `int`         |
/// | `f64`            | `f64`                        | `float64`     |
/// | `bool`           | `bool`                       | `bool`        |
/// | `[String]` etc.  | `Vec<...>`                   | `list`        |
/// | `[SomeRecord]`   | `Vec<SomeRecord>`            | `list`        |
/// | `[any]`          | `Vec<Box<dyn Record>>`       | `list`        |
/// | `SomeRecord`     | `SomeRecord` (nested tuple)  | `tuple`       |
///
/// Record types must derive at least `Debug` and `Default`. Records without
/// `[any]` fields can also derive `Clone` and `PartialEq`; a `[any]` field
/// stores trait objects and supports neither.
///
/// ```rust
/// use erlterm::{records, Registry};
///
/// records! {
///     /// One row of the fruit table.
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Fruit {
///         name: String => "string",
///         kind: String => "string",
///         count: i64 => "int",
///     }
///
///     #[derive(Debug, Default)]
///     pub struct Store {
///         fruit: [Fruit] => "list",
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<Fruit>("fruit");
///
/// let store: Store = erlterm::from_str("{fruit,apple,5}.\n", &registry).unwrap();
/// assert_eq!(store.fruit[0].count, 5);
/// ```
#[macro_export]
macro_rules! records {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis struct $name:ident {
                $( $fname:ident : $ftype:tt => $tag:literal ),+ $(,)?
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            $vis struct $name {
                $( pub $fname: $crate::records!(@type $ftype), )+
            }

            impl $crate::Record for $name {
                fn field_specs() -> &'static [$crate::FieldSpec]
                where
                    Self: Sized,
                {
                    static SPECS: ::std::sync::LazyLock<::std::vec::Vec<$crate::FieldSpec>> =
                        ::std::sync::LazyLock::new(|| ::std::vec![
                            $(
                                $crate::FieldSpec {
                                    name: ::core::stringify!($fname),
                                    tag: $tag,
                                    elem: $crate::records!(@elem $ftype),
                                },
                            )+
                        ]);
                    SPECS.as_slice()
                }

                fn fields(&self) -> &'static [$crate::FieldSpec] {
                    <Self as $crate::Record>::field_specs()
                }

                fn set_term(
                    &mut self,
                    index: usize,
                    value: $crate::Term,
                ) -> ::std::result::Result<(), $crate::Error> {
                    let mut slot = ::std::option::Option::Some(value);
                    let mut current = 0usize;
                    $(
                        if index == current {
                            let ::std::option::Option::Some(value) = slot.take() else {
                                return ::std::result::Result::Err($crate::Error::no_such_field(index));
                            };
                            self.$fname = $crate::records!(@from_term $ftype, value);
                            return ::std::result::Result::Ok(());
                        }
                        current += 1;
                    )+
                    let _ = (&mut slot, current);
                    ::std::result::Result::Err($crate::Error::no_such_field(index))
                }

                fn push_term(
                    &mut self,
                    index: usize,
                    value: $crate::Term,
                ) -> ::std::result::Result<(), $crate::Error> {
                    let mut slot = ::std::option::Option::Some(value);
                    let mut current = 0usize;
                    $(
                        if index == current {
                            let ::std::option::Option::Some(value) = slot.take() else {
                                return ::std::result::Result::Err($crate::Error::no_such_field(index));
                            };
                            $crate::records!(@push $ftype, self.$fname, value);
                            return ::std::result::Result::Ok(());
                        }
                        current += 1;
                    )+
                    let _ = (&mut slot, current);
                    ::std::result::Result::Err($crate::Error::no_such_field(index))
                }

                fn term(&self, index: usize) -> ::std::option::Option<$crate::TermRef<'_>> {
                    let mut current = 0usize;
                    $(
                        if index == current {
                            return ::std::option::Option::Some(
                                $crate::records!(@to_term $ftype, self.$fname),
                            );
                        }
                        current += 1;
                    )+
                    let _ = current;
                    ::std::option::Option::None
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                    self
                }
            }
        )+
    };

    // ---- storage type per declaration ----
    (@type String) => { ::std::string::String };
    (@type i64) => { i64 };
    (@type f64) => { f64 };
    (@type bool) => { bool };
    (@type [any]) => { ::std::vec::Vec<::std::boxed::Box<dyn $crate::Record>> };
    (@type [String]) => { ::std::vec::Vec<::std::string::String> };
    (@type [i64]) => { ::std::vec::Vec<i64> };
    (@type [f64]) => { ::std::vec::Vec<f64> };
    (@type [bool]) => { ::std::vec::Vec<bool> };
    (@type [$record:ident]) => { ::std::vec::Vec<$record> };
    (@type $record:ident) => { $record };

    // ---- element shape per declaration ----
    (@elem String) => { $crate::Elem::None };
    (@elem i64) => { $crate::Elem::None };
    (@elem f64) => { $crate::Elem::None };
    (@elem bool) => { $crate::Elem::None };
    (@elem [any]) => { $crate::Elem::Any };
    (@elem [String]) => { $crate::Elem::Atom };
    (@elem [i64]) => { $crate::Elem::Int };
    (@elem [f64]) => { $crate::Elem::Float };
    (@elem [bool]) => { $crate::Elem::Bool };
    (@elem [$record:ident]) => { $crate::Elem::Record($crate::RecordShape::of::<$record>()) };
    (@elem $record:ident) => { $crate::Elem::Record($crate::RecordShape::of::<$record>()) };

    // ---- store a decoded Term into the field ----
    (@from_term String, $value:expr) => { $value.into_atom()? };
    (@from_term i64, $value:expr) => { $value.into_int()? };
    (@from_term f64, $value:expr) => { $value.into_float()? };
    (@from_term bool, $value:expr) => { $value.into_bool()? };
    (@from_term [any], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push(term.into_record()?);
        }
        elements
    }};
    (@from_term [String], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push(term.into_atom()?);
        }
        elements
    }};
    (@from_term [i64], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push(term.into_int()?);
        }
        elements
    }};
    (@from_term [f64], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push(term.into_float()?);
        }
        elements
    }};
    (@from_term [bool], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push(term.into_bool()?);
        }
        elements
    }};
    (@from_term [$record:ident], $value:expr) => {{
        let mut elements = ::std::vec::Vec::new();
        for term in $value.into_list()? {
            elements.push($crate::records!(@concrete $record, term));
        }
        elements
    }};
    (@from_term $record:ident, $value:expr) => {
        $crate::records!(@concrete $record, $value)
    };

    // ---- append one decoded element to a list field ----
    (@push [any], $field:expr, $value:expr) => {
        $field.push($value.into_record()?)
    };
    (@push [String], $field:expr, $value:expr) => {
        $field.push($value.into_atom()?)
    };
    (@push [i64], $field:expr, $value:expr) => {
        $field.push($value.into_int()?)
    };
    (@push [f64], $field:expr, $value:expr) => {
        $field.push($value.into_float()?)
    };
    (@push [bool], $field:expr, $value:expr) => {
        $field.push($value.into_bool()?)
    };
    (@push [$record:ident], $field:expr, $value:expr) => {
        $field.push($crate::records!(@concrete $record, $value))
    };
    (@push $other:tt, $field:expr, $value:expr) => {{
        let _ = (&$field, $value);
        return ::std::result::Result::Err($crate::Error::mismatch("list field", "scalar field"));
    }};

    // ---- borrow the field for encoding ----
    (@to_term String, $field:expr) => { $crate::TermRef::Atom($field.as_str()) };
    (@to_term i64, $field:expr) => { $crate::TermRef::Int($field) };
    (@to_term f64, $field:expr) => { $crate::TermRef::Float($field) };
    (@to_term bool, $field:expr) => { $crate::TermRef::Bool($field) };
    (@to_term [any], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Record(element.as_ref()))
                .collect(),
        )
    };
    (@to_term [String], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Atom(element.as_str()))
                .collect(),
        )
    };
    (@to_term [i64], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Int(*element))
                .collect(),
        )
    };
    (@to_term [f64], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Float(*element))
                .collect(),
        )
    };
    (@to_term [bool], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Bool(*element))
                .collect(),
        )
    };
    (@to_term [$record:ident], $field:expr) => {
        $crate::TermRef::List(
            $field
                .iter()
                .map(|element| $crate::TermRef::Record(element as &dyn $crate::Record))
                .collect(),
        )
    };
    (@to_term $record:ident, $field:expr) => { $crate::TermRef::Record(&$field) };

    // ---- downcast a decoded record to its concrete type ----
    (@concrete $record:ident, $value:expr) => {{
        let boxed = $value.into_record()?;
        match boxed.into_any().downcast::<$record>() {
            ::std::result::Result::Ok(concrete) => *concrete,
            ::std::result::Result::Err(_) => {
                return ::std::result::Result::Err($crate::Error::mismatch(
                    ::core::stringify!($record),
                    "record",
                ));
            }
        }
    }};
}
