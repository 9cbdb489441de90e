use std::fs;

use crate::dump::nbt::{Tag, TagCompound, to_bytes, write_file};

#[test]
fn string_entry_wire_bytes() {
	let mut root = TagCompound::new();
	root.insert("name", Tag::String("ab".to_owned()));

	let bytes = to_bytes(&root).expect("encode succeeds");
	assert_eq!(bytes, [10, 0, 0, 8, 0, 4, b'n', b'a', b'm', b'e', 0, 2, b'a', b'b', 0]);
}

#[test]
fn int_entry_wire_bytes() {
	let mut root = TagCompound::new();
	root.insert("id", Tag::Int(258));

	let bytes = to_bytes(&root).expect("encode succeeds");
	assert_eq!(bytes, [10, 0, 0, 3, 0, 2, b'i', b'd', 0, 0, 1, 2, 0]);
}

#[test]
fn empty_list_uses_end_element_type() {
	let mut root = TagCompound::new();
	root.insert("l", Tag::List(Vec::new()));

	let bytes = to_bytes(&root).expect("encode succeeds");
	assert_eq!(bytes, [10, 0, 0, 9, 0, 1, b'l', 0, 0, 0, 0, 0, 0]);
}

#[test]
fn byte_list_carries_element_type_and_count() {
	let mut root = TagCompound::new();
	root.insert("l", Tag::List(vec![Tag::Byte(1), Tag::Byte(2)]));

	let bytes = to_bytes(&root).expect("encode succeeds");
	assert_eq!(bytes, [10, 0, 0, 9, 0, 1, b'l', 1, 0, 0, 0, 2, 1, 2, 0]);
}

#[test]
fn mixed_kind_list_writes_only_first_kind() {
	let mut inner = TagCompound::new();
	inner.insert("k", Tag::String("v".to_owned()));
	let mut root = TagCompound::new();
	root.insert("mixed", Tag::List(vec![Tag::Compound(inner), Tag::String("x".to_owned())]));

	let bytes = to_bytes(&root).expect("encode succeeds");
	// The list header declares one compound element; the string cannot share
	// the list and is dropped instead of corrupting the stream.
	assert_eq!(
		bytes,
		[
			10, 0, 0, 9, 0, 5, b'm', b'i', b'x', b'e', b'd', 10, 0, 0, 0, 1, 8, 0, 1, b'k', 0, 1,
			b'v', 0, 0,
		]
	);
}

#[test]
fn nested_compound_round_trips_ordering() {
	let mut inner = TagCompound::new();
	inner.insert("b", Tag::Byte(1));
	inner.insert("a", Tag::Byte(2));
	let mut root = TagCompound::new();
	root.insert("inner", Tag::Compound(inner));

	let bytes = to_bytes(&root).expect("encode succeeds");
	// Insertion order is preserved: "b" before "a".
	assert_eq!(
		bytes,
		[
			10, 0, 0, 10, 0, 5, b'i', b'n', b'n', b'e', b'r', 1, 0, 1, b'b', 1, 1, 0, 1, b'a', 2, 0,
			0,
		]
	);
}

#[test]
fn compound_reinsert_overwrites() {
	let mut root = TagCompound::new();
	root.insert("k", Tag::Int(1));
	root.insert("k", Tag::Int(2));

	assert_eq!(root.len(), 1);
	assert_eq!(root.get("k"), Some(&Tag::Int(2)));
}

#[test]
fn compressed_file_starts_with_gzip_magic() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("out.nbt");
	let mut root = TagCompound::new();
	root.insert("id", Tag::Int(7));

	write_file(&root, &path, true).expect("write succeeds");
	let bytes = fs::read(&path).expect("read back");
	assert_eq!(&bytes[..2], [0x1f, 0x8b]);
}

#[test]
fn raw_file_matches_in_memory_encoding() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("out.nbt");
	let mut root = TagCompound::new();
	root.insert("id", Tag::Int(7));

	write_file(&root, &path, false).expect("write succeeds");
	let bytes = fs::read(&path).expect("read back");
	assert_eq!(bytes, to_bytes(&root).expect("encode succeeds"));
}
