use crate::dump::nbt::Tag;
use crate::dump::value::{Compound, FloatWidth, IntWidth, StructuralValue};

/// Kind of a platform tag, as reported by [`TagView::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
	/// 8-bit signed scalar.
	Byte,
	/// 16-bit signed scalar.
	Short,
	/// 32-bit signed scalar.
	Int,
	/// 64-bit signed scalar.
	Long,
	/// 32-bit float scalar.
	Float,
	/// 64-bit float scalar.
	Double,
	/// String scalar.
	String,
	/// Packed 8-bit array.
	ByteArray,
	/// Packed 32-bit array.
	IntArray,
	/// Packed 64-bit array.
	LongArray,
	/// Ordered sequence.
	List,
	/// Keyed container.
	Compound,
	/// Any kind outside the recognized set.
	Other,
}

/// Inspection contract over a platform-specific tag tree.
///
/// The decoder depends on this contract rather than on any concrete tag
/// library, so it can be reused unchanged across host tag implementations.
/// `compound_entries` yields present children only, in the platform's native
/// key-iteration order; absent or null children are skipped.
pub trait TagView {
	/// Report which kind of tag this is.
	fn kind(&self) -> TagKind;
	/// Extract as an 8-bit integer.
	fn as_byte(&self) -> i8;
	/// Extract as a 16-bit integer.
	fn as_short(&self) -> i16;
	/// Extract as a 32-bit integer.
	fn as_int(&self) -> i32;
	/// Extract as a 64-bit integer.
	fn as_long(&self) -> i64;
	/// Extract as a 32-bit float.
	fn as_float(&self) -> f32;
	/// Extract as a 64-bit float.
	fn as_double(&self) -> f64;
	/// Extract as text; also the fallback for unrecognized kinds.
	fn as_string(&self) -> String;
	/// Extract as a packed byte array.
	fn as_byte_array(&self) -> Vec<i8>;
	/// Extract as a packed int array.
	fn as_int_array(&self) -> Vec<i32>;
	/// Extract as a packed long array.
	fn as_long_array(&self) -> Vec<i64>;
	/// Present children of a compound, in native key order.
	fn compound_entries(&self) -> Vec<(String, &Self)>;
	/// Elements of a list, in order.
	fn list_items(&self) -> Vec<&Self>;
}

/// Decode one tag into the canonical value model, wrapping a non-compound
/// top-level tag in a single-key compound under `"value"` so callers always
/// receive a keyed root.
pub fn decode_root<T: TagView>(tag: &T) -> Compound {
	if tag.kind() == TagKind::Compound {
		decode_compound(tag)
	} else {
		let mut wrapper = Compound::new();
		wrapper.insert("value", decode_tag(tag));
		wrapper
	}
}

/// Recursively decode one tag into the canonical value model.
pub fn decode_tag<T: TagView>(tag: &T) -> StructuralValue {
	match tag.kind() {
		TagKind::Compound => StructuralValue::Compound(decode_compound(tag)),
		TagKind::List => {
			StructuralValue::List(tag.list_items().into_iter().map(decode_tag).collect())
		}
		TagKind::ByteArray => StructuralValue::ByteArray(tag.as_byte_array()),
		TagKind::IntArray => StructuralValue::IntArray(tag.as_int_array()),
		TagKind::LongArray => StructuralValue::LongArray(tag.as_long_array()),
		TagKind::Byte => StructuralValue::int(i64::from(tag.as_byte()), IntWidth::Byte),
		TagKind::Short => StructuralValue::int(i64::from(tag.as_short()), IntWidth::Short),
		TagKind::Int => StructuralValue::int(i64::from(tag.as_int()), IntWidth::Int),
		TagKind::Long => StructuralValue::int(tag.as_long(), IntWidth::Long),
		TagKind::Float => StructuralValue::float(f64::from(tag.as_float()), FloatWidth::Float),
		TagKind::Double => StructuralValue::float(tag.as_double(), FloatWidth::Double),
		TagKind::String | TagKind::Other => StructuralValue::String(tag.as_string()),
	}
}

fn decode_compound<T: TagView>(tag: &T) -> Compound {
	tag.compound_entries().into_iter().map(|(key, value)| (key, decode_tag(value))).collect()
}

impl TagView for Tag {
	fn kind(&self) -> TagKind {
		match self {
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::String(_) => TagKind::String,
			Self::ByteArray(_) => TagKind::ByteArray,
			Self::IntArray(_) => TagKind::IntArray,
			Self::LongArray(_) => TagKind::LongArray,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
		}
	}

	fn as_byte(&self) -> i8 {
		match self {
			Self::Byte(value) => *value,
			_ => 0,
		}
	}

	fn as_short(&self) -> i16 {
		match self {
			Self::Short(value) => *value,
			_ => 0,
		}
	}

	fn as_int(&self) -> i32 {
		match self {
			Self::Int(value) => *value,
			_ => 0,
		}
	}

	fn as_long(&self) -> i64 {
		match self {
			Self::Long(value) => *value,
			_ => 0,
		}
	}

	fn as_float(&self) -> f32 {
		match self {
			Self::Float(value) => *value,
			_ => 0.0,
		}
	}

	fn as_double(&self) -> f64 {
		match self {
			Self::Double(value) => *value,
			_ => 0.0,
		}
	}

	fn as_string(&self) -> String {
		match self {
			Self::String(value) => value.clone(),
			Self::Byte(value) => value.to_string(),
			Self::Short(value) => value.to_string(),
			Self::Int(value) => value.to_string(),
			Self::Long(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
			Self::Double(value) => value.to_string(),
			_ => String::new(),
		}
	}

	fn as_byte_array(&self) -> Vec<i8> {
		match self {
			Self::ByteArray(values) => values.clone(),
			_ => Vec::new(),
		}
	}

	fn as_int_array(&self) -> Vec<i32> {
		match self {
			Self::IntArray(values) => values.clone(),
			_ => Vec::new(),
		}
	}

	fn as_long_array(&self) -> Vec<i64> {
		match self {
			Self::LongArray(values) => values.clone(),
			_ => Vec::new(),
		}
	}

	fn compound_entries(&self) -> Vec<(String, &Self)> {
		match self {
			Self::Compound(compound) => {
				compound.iter().map(|(key, value)| (key.to_owned(), value)).collect()
			}
			_ => Vec::new(),
		}
	}

	fn list_items(&self) -> Vec<&Self> {
		match self {
			Self::List(items) => items.iter().collect(),
			_ => Vec::new(),
		}
	}
}
