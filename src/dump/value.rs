/// Source width of an integer-family value.
///
/// Values are stored as `i64` regardless of width; the width records how wide
/// the value was in its source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// 8-bit signed.
	Byte,
	/// 16-bit signed.
	Short,
	/// 32-bit signed.
	Int,
	/// 64-bit signed.
	Long,
}

/// Source width of a float-family value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
	/// 32-bit IEEE 754.
	Float,
	/// 64-bit IEEE 754.
	Double,
}

/// Canonical in-memory representation of arbitrary nested data, independent of
/// any output format.
///
/// Produced by the opaque tag decoder and consumed by the value encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralValue {
	/// Absent value.
	Null,
	/// UTF-8 string.
	String(String),
	/// Boolean.
	Bool(bool),
	/// Integer family, width-tagged.
	Int {
		/// Value widened to 64 bits.
		value: i64,
		/// Original source width.
		width: IntWidth,
	},
	/// Float family, width-tagged.
	Float {
		/// Value widened to 64 bits.
		value: f64,
		/// Original source width.
		width: FloatWidth,
	},
	/// Homogeneous 8-bit signed array.
	ByteArray(Vec<i8>),
	/// Homogeneous 32-bit signed array.
	IntArray(Vec<i32>),
	/// Homogeneous 64-bit signed array.
	LongArray(Vec<i64>),
	/// Keyed, insertion-ordered container.
	Compound(Compound),
	/// Ordered sequence; heterogeneous element kinds allowed.
	List(Vec<StructuralValue>),
}

impl StructuralValue {
	/// Construct an integer-family value with the given width.
	pub fn int(value: i64, width: IntWidth) -> Self {
		Self::Int { value, width }
	}

	/// Construct a float-family value with the given width.
	pub fn float(value: f64, width: FloatWidth) -> Self {
		Self::Float { value, width }
	}
}

/// Keyed container preserving insertion order.
///
/// Keys are unique: inserting an existing key overwrites the value in place
/// without moving the key's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
	entries: Vec<(String, StructuralValue)>,
}

impl Compound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or overwrite a key.
	pub fn insert(&mut self, key: impl Into<String>, value: StructuralValue) {
		let key = key.into();
		if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			entry.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Look up a key.
	pub fn get(&self, key: &str) -> Option<&StructuralValue> {
		self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the compound holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &StructuralValue)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}
}

impl FromIterator<(String, StructuralValue)> for Compound {
	fn from_iter<I: IntoIterator<Item = (String, StructuralValue)>>(iter: I) -> Self {
		let mut compound = Self::new();
		for (key, value) in iter {
			compound.insert(key, value);
		}
		compound
	}
}
