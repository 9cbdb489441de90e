/// Opaque handle to a node under construction.
///
/// An index into the owning builder's node storage. Handles are only
/// meaningful to the builder that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

/// Format-agnostic contract for incrementally constructing nested keyed
/// ("object") and ordered ("array") containers.
///
/// Callers never inspect a [`TreeBuilder::Node`]; they only pass it back into
/// further builder calls. The builder implementation owns all node storage,
/// so orchestrators can assemble a tree for either output format without
/// knowing which one is active.
///
/// `add_to_object` and `add_to_array` accept only nodes returned by
/// `create_object` or `create_array`; primitives go through the typed setters
/// and appenders. Passing a non-container node is a contract violation and is
/// ignored.
pub trait TreeBuilder {
	/// Opaque handle to a node under construction.
	type Node: Copy;

	/// Allocate a new empty keyed container.
	fn create_object(&mut self) -> Self::Node;
	/// Allocate a new empty ordered container.
	fn create_array(&mut self) -> Self::Node;

	/// Attach a previously created object or array node under `key`.
	fn add_to_object(&mut self, parent: Self::Node, key: &str, value: Self::Node);
	/// Append a previously created object or array node to a sequence.
	fn add_to_array(&mut self, array: Self::Node, value: Self::Node);

	/// Write a byte property keyed into `parent`.
	fn add_byte_property(&mut self, parent: Self::Node, key: &str, value: i8);
	/// Write a short property keyed into `parent`.
	fn add_short_property(&mut self, parent: Self::Node, key: &str, value: i16);
	/// Write an int property keyed into `parent`.
	fn add_int_property(&mut self, parent: Self::Node, key: &str, value: i32);
	/// Write a long property keyed into `parent`.
	fn add_long_property(&mut self, parent: Self::Node, key: &str, value: i64);
	/// Write a float property keyed into `parent`.
	fn add_float_property(&mut self, parent: Self::Node, key: &str, value: f32);
	/// Write a double property keyed into `parent`.
	fn add_double_property(&mut self, parent: Self::Node, key: &str, value: f64);
	/// Write a string property keyed into `parent`.
	fn add_string_property(&mut self, parent: Self::Node, key: &str, value: &str);
	/// Write a byte-array property keyed into `parent`.
	fn add_byte_array_property(&mut self, parent: Self::Node, key: &str, value: &[i8]);
	/// Write an int-array property keyed into `parent`.
	fn add_int_array_property(&mut self, parent: Self::Node, key: &str, value: &[i32]);
	/// Write a long-array property keyed into `parent`.
	fn add_long_array_property(&mut self, parent: Self::Node, key: &str, value: &[i64]);
	/// Write a boolean property keyed into `parent`.
	fn add_bool_property(&mut self, parent: Self::Node, key: &str, value: bool);

	/// Append a byte to a sequence.
	fn add_byte_to_array(&mut self, array: Self::Node, value: i8);
	/// Append a short to a sequence.
	fn add_short_to_array(&mut self, array: Self::Node, value: i16);
	/// Append an int to a sequence.
	fn add_int_to_array(&mut self, array: Self::Node, value: i32);
	/// Append a long to a sequence.
	fn add_long_to_array(&mut self, array: Self::Node, value: i64);
	/// Append a float to a sequence.
	fn add_float_to_array(&mut self, array: Self::Node, value: f32);
	/// Append a double to a sequence.
	fn add_double_to_array(&mut self, array: Self::Node, value: f64);
	/// Append a string to a sequence.
	fn add_string_to_array(&mut self, array: Self::Node, value: &str);
	/// Append a byte array to a sequence.
	fn add_byte_array_to_array(&mut self, array: Self::Node, value: &[i8]);
	/// Append an int array to a sequence.
	fn add_int_array_to_array(&mut self, array: Self::Node, value: &[i32]);
	/// Append a long array to a sequence.
	fn add_long_array_to_array(&mut self, array: Self::Node, value: &[i64]);
	/// Append a boolean to a sequence.
	fn add_bool_to_array(&mut self, array: Self::Node, value: bool);
}
