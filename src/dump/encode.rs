//! Type-directed recursive encoder from the canonical value model into any
//! [`TreeBuilder`] target.
//!
//! Precision and coercion policy, applied identically for both targets:
//! integers of every width are narrowed to 32 bits (a deliberate lossy policy
//! for 64-bit values; identifiers are assumed to fit, and widening every
//! integer field was rejected for output-size reasons), while floats and
//! doubles are rendered as their canonical decimal text at their source width
//! so the value survives round-trips through either target's number type.

use crate::dump::builder::TreeBuilder;
use crate::dump::value::{Compound, FloatWidth, StructuralValue};

/// Build an object node from a compound, recursing into each entry in
/// iteration order.
pub fn build_compound<B: TreeBuilder>(builder: &mut B, compound: &Compound) -> B::Node {
	let object = builder.create_object();
	for (key, value) in compound.iter() {
		encode_property(builder, object, key, value);
	}
	object
}

/// Build an array node from a list, recursing into each element in order.
pub fn build_list<B: TreeBuilder>(builder: &mut B, items: &[StructuralValue]) -> B::Node {
	let array = builder.create_array();
	for item in items {
		encode_element(builder, array, item);
	}
	array
}

/// Encode one value as a keyed property of `parent`.
pub fn encode_property<B: TreeBuilder>(
	builder: &mut B,
	parent: B::Node,
	key: &str,
	value: &StructuralValue,
) {
	match value {
		StructuralValue::Null => builder.add_string_property(parent, key, "null"),
		StructuralValue::String(text) => builder.add_string_property(parent, key, text),
		StructuralValue::Bool(flag) => builder.add_bool_property(parent, key, *flag),
		StructuralValue::Int { value, .. } => {
			builder.add_int_property(parent, key, *value as i32);
		}
		StructuralValue::Float { value, width } => {
			builder.add_string_property(parent, key, &float_text(*value, *width));
		}
		StructuralValue::ByteArray(values) => builder.add_byte_array_property(parent, key, values),
		StructuralValue::IntArray(values) => builder.add_int_array_property(parent, key, values),
		StructuralValue::LongArray(values) => builder.add_long_array_property(parent, key, values),
		StructuralValue::Compound(compound) => {
			let object = build_compound(builder, compound);
			builder.add_to_object(parent, key, object);
		}
		StructuralValue::List(items) => {
			let array = build_list(builder, items);
			builder.add_to_object(parent, key, array);
		}
	}
}

/// Encode one value as an element of `array`.
///
/// Sequences do not get the rich numeric treatment objects get: primitives
/// other than strings and booleans are appended as their canonical text form.
pub fn encode_element<B: TreeBuilder>(builder: &mut B, array: B::Node, value: &StructuralValue) {
	match value {
		StructuralValue::Null => builder.add_string_to_array(array, "null"),
		StructuralValue::String(text) => builder.add_string_to_array(array, text),
		StructuralValue::Bool(flag) => builder.add_bool_to_array(array, *flag),
		StructuralValue::Compound(compound) => {
			let object = build_compound(builder, compound);
			builder.add_to_array(array, object);
		}
		StructuralValue::List(items) => {
			let nested = build_list(builder, items);
			builder.add_to_array(array, nested);
		}
		StructuralValue::Int { value, .. } => {
			builder.add_string_to_array(array, &value.to_string());
		}
		StructuralValue::Float { value, width } => {
			builder.add_string_to_array(array, &float_text(*value, *width));
		}
		StructuralValue::ByteArray(values) => {
			builder.add_string_to_array(array, &format!("{values:?}"));
		}
		StructuralValue::IntArray(values) => {
			builder.add_string_to_array(array, &format!("{values:?}"));
		}
		StructuralValue::LongArray(values) => {
			builder.add_string_to_array(array, &format!("{values:?}"));
		}
	}
}

fn float_text(value: f64, width: FloatWidth) -> String {
	match width {
		FloatWidth::Float => (value as f32).to_string(),
		FloatWidth::Double => value.to_string(),
	}
}
