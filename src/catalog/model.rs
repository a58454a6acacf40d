//! Record shapes and their binding tables.
//!
//! Each kind is a fixed-shape struct plus one static [`FieldBinding`] table.
//! The table is the whole schema: the projection layer consumes it for both
//! decode and encode, so field names, value types, and arity live in exactly
//! one place per kind.

use serde::Serialize;

use crate::catalog::kind::Kind;
use crate::projection::{FieldBinding, FieldSlot};

/// A record type the catalog can hold, tied to its kind and binding table.
///
/// `id` is the registry key; it is immutable once the record is inserted.
pub trait StaticRecord: Default + Clone {
    const KIND: Kind;

    /// The declarative field table driving both projection directions.
    fn bindings() -> &'static [FieldBinding<Self>];

    /// Registry key for this record.
    fn id(&self) -> i32;
}

/// Records of kind `type1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Type1Record {
    pub id: i32,
    pub prop1: i32,
    pub prop2: i32,
}

impl StaticRecord for Type1Record {
    const KIND: Kind = Kind::Type1;

    fn bindings() -> &'static [FieldBinding<Self>] {
        // Table order is the canonical encode order; id goes last.
        static BINDINGS: &[FieldBinding<Type1Record>] = &[
            FieldBinding {
                name: "prop1",
                slot: FieldSlot::Int(|r: &Type1Record| r.prop1, |r, v| r.prop1 = v),
            },
            FieldBinding {
                name: "prop2",
                slot: FieldSlot::Int(|r: &Type1Record| r.prop2, |r, v| r.prop2 = v),
            },
            FieldBinding {
                name: "id",
                slot: FieldSlot::Int(|r: &Type1Record| r.id, |r, v| r.id = v),
            },
        ];
        BINDINGS
    }

    fn id(&self) -> i32 {
        self.id
    }
}

/// Records of kind `type2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Type2Record {
    pub id: i32,
    pub prop1: i32,
    pub prop2: i32,
}

impl StaticRecord for Type2Record {
    const KIND: Kind = Kind::Type2;

    fn bindings() -> &'static [FieldBinding<Self>] {
        static BINDINGS: &[FieldBinding<Type2Record>] = &[
            FieldBinding {
                name: "prop1",
                slot: FieldSlot::Int(|r: &Type2Record| r.prop1, |r, v| r.prop1 = v),
            },
            FieldBinding {
                name: "prop2",
                slot: FieldSlot::Int(|r: &Type2Record| r.prop2, |r, v| r.prop2 = v),
            },
            FieldBinding {
                name: "id",
                slot: FieldSlot::Int(|r: &Type2Record| r.id, |r, v| r.id = v),
            },
        ];
        BINDINGS
    }

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{apply_properties, collect_properties};
    use crate::property::Property;
    use crate::value::ValueType;

    #[test]
    fn binding_tables_put_id_last() {
        let names: Vec<&str> = Type1Record::bindings().iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["prop1", "prop2", "id"]);
        let names: Vec<&str> = Type2Record::bindings().iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["prop1", "prop2", "id"]);
    }

    #[test]
    fn decode_is_order_independent() {
        let props = vec![
            Property::scalar("id", ValueType::Int32, "1".into()),
            Property::scalar("prop1", ValueType::Int32, "11".into()),
            Property::scalar("prop2", ValueType::Int32, "12".into()),
        ];
        let mut record = Type1Record::default();
        apply_properties(&mut record, Type1Record::bindings(), &props);
        assert_eq!(
            record,
            Type1Record {
                id: 1,
                prop1: 11,
                prop2: 12
            }
        );
    }

    #[test]
    fn records_round_trip() {
        let original = Type2Record {
            id: 21,
            prop1: 21,
            prop2: 22,
        };
        let props = collect_properties(&original, Type2Record::bindings());
        let mut decoded = Type2Record::default();
        apply_properties(&mut decoded, Type2Record::bindings(), &props);
        assert_eq!(decoded, original);
    }
}
