use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::dump::Result;

/// Binary tag-tree value with distinct scalar widths and typed arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
	/// 8-bit signed scalar.
	Byte(i8),
	/// 16-bit signed scalar.
	Short(i16),
	/// 32-bit signed scalar.
	Int(i32),
	/// 64-bit signed scalar.
	Long(i64),
	/// 32-bit float scalar.
	Float(f32),
	/// 64-bit float scalar.
	Double(f64),
	/// UTF-8 string.
	String(String),
	/// Packed 8-bit signed array.
	ByteArray(Vec<i8>),
	/// Packed 32-bit signed array.
	IntArray(Vec<i32>),
	/// Packed 64-bit signed array.
	LongArray(Vec<i64>),
	/// Ordered sequence of same-kind tags.
	List(Vec<Tag>),
	/// Keyed, insertion-ordered container.
	Compound(TagCompound),
}

impl Tag {
	/// Wire type id of this tag kind.
	pub fn type_id(&self) -> u8 {
		match self {
			Self::Byte(_) => 1,
			Self::Short(_) => 2,
			Self::Int(_) => 3,
			Self::Long(_) => 4,
			Self::Float(_) => 5,
			Self::Double(_) => 6,
			Self::ByteArray(_) => 7,
			Self::String(_) => 8,
			Self::List(_) => 9,
			Self::Compound(_) => 10,
			Self::IntArray(_) => 11,
			Self::LongArray(_) => 12,
		}
	}
}

/// Keyed tag container preserving insertion order; re-inserting an existing
/// key overwrites the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCompound {
	entries: Vec<(String, Tag)>,
}

impl TagCompound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or overwrite a key.
	pub fn insert(&mut self, key: impl Into<String>, value: Tag) {
		let key = key.into();
		if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			entry.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Look up a key.
	pub fn get(&self, key: &str) -> Option<&Tag> {
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
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}
}

/// Serialize `root` as an unnamed root compound into `out`.
pub fn write_root(root: &TagCompound, out: &mut impl Write) -> Result<()> {
	out.write_all(&[10])?;
	write_string(out, "")?;
	write_compound_payload(out, root)?;
	Ok(())
}

/// Serialize `root` into an in-memory buffer.
pub fn to_bytes(root: &TagCompound) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	write_root(root, &mut out)?;
	Ok(out)
}

/// Write `root` to `path`, gzip-compressed when `compressed` is set.
pub fn write_file(root: &TagCompound, path: &Path, compressed: bool) -> Result<()> {
	let file = File::create(path)?;
	if compressed {
		let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
		write_root(root, &mut encoder)?;
		encoder.finish()?.flush()?;
	} else {
		let mut writer = BufWriter::new(file);
		write_root(root, &mut writer)?;
		writer.flush()?;
	}
	Ok(())
}

fn write_string(out: &mut impl Write, value: &str) -> Result<()> {
	let bytes = value.as_bytes();
	out.write_all(&(bytes.len() as u16).to_be_bytes())?;
	out.write_all(bytes)?;
	Ok(())
}

fn write_compound_payload(out: &mut impl Write, compound: &TagCompound) -> Result<()> {
	for (key, value) in compound.iter() {
		out.write_all(&[value.type_id()])?;
		write_string(out, key)?;
		write_payload(out, value)?;
	}
	out.write_all(&[0])?;
	Ok(())
}

fn write_payload(out: &mut impl Write, tag: &Tag) -> Result<()> {
	match tag {
		Tag::Byte(value) => out.write_all(&value.to_be_bytes())?,
		Tag::Short(value) => out.write_all(&value.to_be_bytes())?,
		Tag::Int(value) => out.write_all(&value.to_be_bytes())?,
		Tag::Long(value) => out.write_all(&value.to_be_bytes())?,
		Tag::Float(value) => out.write_all(&value.to_be_bytes())?,
		Tag::Double(value) => out.write_all(&value.to_be_bytes())?,
		Tag::String(value) => write_string(out, value)?,
		Tag::ByteArray(values) => {
			out.write_all(&(values.len() as i32).to_be_bytes())?;
			for value in values {
				out.write_all(&value.to_be_bytes())?;
			}
		}
		Tag::IntArray(values) => {
			out.write_all(&(values.len() as i32).to_be_bytes())?;
			for value in values {
				out.write_all(&value.to_be_bytes())?;
			}
		}
		Tag::LongArray(values) => {
			out.write_all(&(values.len() as i32).to_be_bytes())?;
			for value in values {
				out.write_all(&value.to_be_bytes())?;
			}
		}
		Tag::List(items) => {
			// The element type is taken from the first item, or 0 (end) for
			// an empty list. The wire format cannot represent items of any
			// other kind in the same list, so they are skipped.
			let elem_type = items.first().map(Tag::type_id).unwrap_or(0);
			let matching: Vec<&Tag> =
				items.iter().filter(|item| item.type_id() == elem_type).collect();
			out.write_all(&[elem_type])?;
			out.write_all(&(matching.len() as i32).to_be_bytes())?;
			for item in matching {
				write_payload(out, item)?;
			}
		}
		Tag::Compound(compound) => write_compound_payload(out, compound)?,
	}
	Ok(())
}

#[cfg(test)]
mod tests;
