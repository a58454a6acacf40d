//! Declarative field binding between typed records and property lists.
//!
//! Each record kind declares one static table of [`FieldBinding`]s: field
//! name plus a typed accessor pair. The same table drives both directions,
//! decoding a property list onto a record and collecting a record back into
//! properties, so the schema lives in exactly one auditable place instead of
//! being probed out of field types at call sites.

use tracing::warn;

use crate::error::CatalogError;
use crate::property::Property;
use crate::value::{
    ValueType, decode_bool, decode_f32, decode_i32, decode_text, encode_bool, encode_f32,
    encode_i32, encode_text,
};

/// Typed accessor pair for one field of `T`.
///
/// The variant is the field's compile-time type: scalar slots hold a getter
/// and setter for one value, array slots for a whole sequence. A property
/// whose declared [`ValueType`] or arity disagrees with the slot is a
/// mismatch, never a coercion.
pub enum FieldSlot<T> {
    Int(fn(&T) -> i32, fn(&mut T, i32)),
    Float(fn(&T) -> f32, fn(&mut T, f32)),
    Text(fn(&T) -> String, fn(&mut T, String)),
    Bool(fn(&T) -> bool, fn(&mut T, bool)),
    IntArray(fn(&T) -> Vec<i32>, fn(&mut T, Vec<i32>)),
    FloatArray(fn(&T) -> Vec<f32>, fn(&mut T, Vec<f32>)),
    TextArray(fn(&T) -> Vec<String>, fn(&mut T, Vec<String>)),
    BoolArray(fn(&T) -> Vec<bool>, fn(&mut T, Vec<bool>)),
}

impl<T> FieldSlot<T> {
    /// The value type this slot decodes from and encodes to.
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldSlot::Int(..) | FieldSlot::IntArray(..) => ValueType::Int32,
            FieldSlot::Float(..) | FieldSlot::FloatArray(..) => ValueType::Float,
            FieldSlot::Text(..) | FieldSlot::TextArray(..) => ValueType::Text,
            FieldSlot::Bool(..) | FieldSlot::BoolArray(..) => ValueType::Boolean,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self,
            FieldSlot::IntArray(..)
                | FieldSlot::FloatArray(..)
                | FieldSlot::TextArray(..)
                | FieldSlot::BoolArray(..)
        )
    }
}

/// One row of a record's binding table.
pub struct FieldBinding<T> {
    pub name: &'static str,
    pub slot: FieldSlot<T>,
}

/// Which way a projection runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Decode,
    Encode,
}

/// Run the projection for `record` in the given direction.
///
/// `Decode` reads `properties` onto the record; `Encode` appends the
/// record's properties to the list in binding-table order.
pub fn project<T>(
    record: &mut T,
    bindings: &[FieldBinding<T>],
    properties: &mut Vec<Property>,
    direction: Direction,
) {
    match direction {
        Direction::Decode => apply_properties(record, bindings, properties),
        Direction::Encode => properties.extend(collect_properties(record, bindings)),
    }
}

/// Decode direction: bind each table row to the first property of the same
/// name.
///
/// Decoding is partial-tolerant. A missing property, a value-type mismatch,
/// or an arity mismatch leaves the field at its default with a logged
/// diagnostic; it never fails the record.
pub fn apply_properties<T>(record: &mut T, bindings: &[FieldBinding<T>], properties: &[Property]) {
    for binding in bindings {
        let Some(prop) = properties.iter().find(|p| p.name == binding.name) else {
            let err = CatalogError::PropertyNotFound {
                name: binding.name.to_string(),
            };
            warn!(%err, "field left at default");
            continue;
        };

        if prop.value_type != binding.slot.value_type() || prop.is_array != binding.slot.is_array()
        {
            let err = CatalogError::ValueTypeMismatch {
                name: binding.name.to_string(),
                declared: declared_shape(prop),
                expected: slot_shape(&binding.slot),
            };
            warn!(%err, "field left at default");
            continue;
        }

        apply_slot(record, &binding.slot, prop);
    }
}

/// Encode direction: one property per table row, in table order.
///
/// The binding-table order is the canonical field order of the encoded form;
/// decoding matches by name and does not depend on it.
pub fn collect_properties<T>(record: &T, bindings: &[FieldBinding<T>]) -> Vec<Property> {
    bindings
        .iter()
        .map(|binding| collect_slot(record, binding))
        .collect()
}

fn apply_slot<T>(record: &mut T, slot: &FieldSlot<T>, prop: &Property) {
    // Scalar properties carry exactly one value by invariant; an empty list
    // still decodes through the lenient codec's default path.
    let scalar = || prop.values.first().map(String::as_str).unwrap_or_default();
    match slot {
        FieldSlot::Int(_, set) => set(record, decode_i32(scalar())),
        FieldSlot::Float(_, set) => set(record, decode_f32(scalar())),
        FieldSlot::Text(_, set) => set(record, decode_text(scalar())),
        FieldSlot::Bool(_, set) => set(record, decode_bool(scalar())),
        FieldSlot::IntArray(_, set) => {
            set(record, prop.values.iter().map(|v| decode_i32(v)).collect());
        }
        FieldSlot::FloatArray(_, set) => {
            set(record, prop.values.iter().map(|v| decode_f32(v)).collect());
        }
        FieldSlot::TextArray(_, set) => {
            set(record, prop.values.iter().map(|v| decode_text(v)).collect());
        }
        FieldSlot::BoolArray(_, set) => {
            set(record, prop.values.iter().map(|v| decode_bool(v)).collect());
        }
    }
}

fn collect_slot<T>(record: &T, binding: &FieldBinding<T>) -> Property {
    let value_type = binding.slot.value_type();
    match &binding.slot {
        FieldSlot::Int(get, _) => Property::scalar(binding.name, value_type, encode_i32(get(record))),
        FieldSlot::Float(get, _) => {
            Property::scalar(binding.name, value_type, encode_f32(get(record)))
        }
        FieldSlot::Text(get, _) => {
            Property::scalar(binding.name, value_type, encode_text(&get(record)))
        }
        FieldSlot::Bool(get, _) => {
            Property::scalar(binding.name, value_type, encode_bool(get(record)))
        }
        FieldSlot::IntArray(get, _) => Property::array(
            binding.name,
            value_type,
            get(record).into_iter().map(encode_i32).collect(),
        ),
        FieldSlot::FloatArray(get, _) => Property::array(
            binding.name,
            value_type,
            get(record).into_iter().map(encode_f32).collect(),
        ),
        FieldSlot::TextArray(get, _) => Property::array(
            binding.name,
            value_type,
            get(record).iter().map(|v| encode_text(v)).collect(),
        ),
        FieldSlot::BoolArray(get, _) => Property::array(
            binding.name,
            value_type,
            get(record).into_iter().map(encode_bool).collect(),
        ),
    }
}

fn declared_shape(prop: &Property) -> &'static str {
    if prop.is_array {
        match prop.value_type {
            ValueType::Int32 => "int32 array",
            ValueType::Float => "float array",
            ValueType::Text => "text array",
            ValueType::Boolean => "boolean array",
        }
    } else {
        prop.value_type.as_str()
    }
}

fn slot_shape<T>(slot: &FieldSlot<T>) -> &'static str {
    if slot.is_array() {
        match slot.value_type() {
            ValueType::Int32 => "int32 array",
            ValueType::Float => "float array",
            ValueType::Text => "text array",
            ValueType::Boolean => "boolean array",
        }
    } else {
        slot.value_type().as_str()
    }
}
