use crate::dump::builder::{NodeId, TreeBuilder};
use crate::dump::nbt::{Tag, TagCompound};

/// One-shot root splice state of an [`NbtBuilder`].
///
/// The very first `create_object` call hands out the pre-created root
/// compound itself rather than allocating a redundant wrapper; every call
/// after the transition allocates a fresh nested compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
	/// Root compound has not been handed out yet.
	AwaitingRoot,
	/// Root was claimed; subsequent objects are nested compounds.
	Populating,
}

/// [`TreeBuilder`] implementation targeting the binary tag-tree model.
///
/// Typed setters map 1:1 onto the scalar and typed-array tag constructors;
/// booleans are stored as byte tags 0/1 since the format has no boolean kind.
#[derive(Debug)]
pub struct NbtBuilder {
	slots: Vec<Option<Node>>,
	state: RootState,
}

#[derive(Debug)]
enum Node {
	Compound(TagCompound),
	List(Vec<Tag>),
}

impl NbtBuilder {
	/// Create a builder around a pre-created root compound.
	pub fn new(root: TagCompound) -> Self {
		Self { slots: vec![Some(Node::Compound(root))], state: RootState::AwaitingRoot }
	}

	/// Consume the builder and extract the populated root compound.
	pub fn finish(mut self) -> TagCompound {
		match self.slots[0].take() {
			Some(Node::Compound(root)) => root,
			_ => TagCompound::new(),
		}
	}

	fn alloc(&mut self, node: Node) -> NodeId {
		self.slots.push(Some(node));
		NodeId(self.slots.len() - 1)
	}

	fn compound_mut(&mut self, node: NodeId) -> Option<&mut TagCompound> {
		match self.slots[node.0].as_mut() {
			Some(Node::Compound(compound)) => Some(compound),
			_ => None,
		}
	}

	fn list_mut(&mut self, node: NodeId) -> Option<&mut Vec<Tag>> {
		match self.slots[node.0].as_mut() {
			Some(Node::List(items)) => Some(items),
			_ => None,
		}
	}

	fn set(&mut self, parent: NodeId, key: &str, value: Tag) {
		if let Some(compound) = self.compound_mut(parent) {
			compound.insert(key, value);
		}
	}

	fn push(&mut self, array: NodeId, value: Tag) {
		if let Some(items) = self.list_mut(array) {
			items.push(value);
		}
	}

	fn take_tag(&mut self, node: NodeId) -> Option<Tag> {
		match self.slots[node.0].take() {
			Some(Node::Compound(compound)) => Some(Tag::Compound(compound)),
			Some(Node::List(items)) => Some(Tag::List(items)),
			None => None,
		}
	}
}

impl TreeBuilder for NbtBuilder {
	type Node = NodeId;

	fn create_object(&mut self) -> NodeId {
		match self.state {
			RootState::AwaitingRoot => {
				self.state = RootState::Populating;
				NodeId(0)
			}
			RootState::Populating => self.alloc(Node::Compound(TagCompound::new())),
		}
	}

	fn create_array(&mut self) -> NodeId {
		// Lists never double as the root.
		self.alloc(Node::List(Vec::new()))
	}

	fn add_to_object(&mut self, parent: NodeId, key: &str, value: NodeId) {
		if let Some(tag) = self.take_tag(value) {
			self.set(parent, key, tag);
		}
	}

	fn add_to_array(&mut self, array: NodeId, value: NodeId) {
		if let Some(tag) = self.take_tag(value) {
			self.push(array, tag);
		}
	}

	fn add_byte_property(&mut self, parent: NodeId, key: &str, value: i8) {
		self.set(parent, key, Tag::Byte(value));
	}

	fn add_short_property(&mut self, parent: NodeId, key: &str, value: i16) {
		self.set(parent, key, Tag::Short(value));
	}

	fn add_int_property(&mut self, parent: NodeId, key: &str, value: i32) {
		self.set(parent, key, Tag::Int(value));
	}

	fn add_long_property(&mut self, parent: NodeId, key: &str, value: i64) {
		self.set(parent, key, Tag::Long(value));
	}

	fn add_float_property(&mut self, parent: NodeId, key: &str, value: f32) {
		self.set(parent, key, Tag::Float(value));
	}

	fn add_double_property(&mut self, parent: NodeId, key: &str, value: f64) {
		self.set(parent, key, Tag::Double(value));
	}

	fn add_string_property(&mut self, parent: NodeId, key: &str, value: &str) {
		self.set(parent, key, Tag::String(value.to_owned()));
	}

	fn add_byte_array_property(&mut self, parent: NodeId, key: &str, value: &[i8]) {
		self.set(parent, key, Tag::ByteArray(value.to_vec()));
	}

	fn add_int_array_property(&mut self, parent: NodeId, key: &str, value: &[i32]) {
		self.set(parent, key, Tag::IntArray(value.to_vec()));
	}

	fn add_long_array_property(&mut self, parent: NodeId, key: &str, value: &[i64]) {
		self.set(parent, key, Tag::LongArray(value.to_vec()));
	}

	fn add_bool_property(&mut self, parent: NodeId, key: &str, value: bool) {
		self.set(parent, key, Tag::Byte(i8::from(value)));
	}

	fn add_byte_to_array(&mut self, array: NodeId, value: i8) {
		self.push(array, Tag::Byte(value));
	}

	fn add_short_to_array(&mut self, array: NodeId, value: i16) {
		self.push(array, Tag::Short(value));
	}

	fn add_int_to_array(&mut self, array: NodeId, value: i32) {
		self.push(array, Tag::Int(value));
	}

	fn add_long_to_array(&mut self, array: NodeId, value: i64) {
		self.push(array, Tag::Long(value));
	}

	fn add_float_to_array(&mut self, array: NodeId, value: f32) {
		self.push(array, Tag::Float(value));
	}

	fn add_double_to_array(&mut self, array: NodeId, value: f64) {
		self.push(array, Tag::Double(value));
	}

	fn add_string_to_array(&mut self, array: NodeId, value: &str) {
		self.push(array, Tag::String(value.to_owned()));
	}

	fn add_byte_array_to_array(&mut self, array: NodeId, value: &[i8]) {
		self.push(array, Tag::ByteArray(value.to_vec()));
	}

	fn add_int_array_to_array(&mut self, array: NodeId, value: &[i32]) {
		self.push(array, Tag::IntArray(value.to_vec()));
	}

	fn add_long_array_to_array(&mut self, array: NodeId, value: &[i64]) {
		self.push(array, Tag::LongArray(value.to_vec()));
	}

	fn add_bool_to_array(&mut self, array: NodeId, value: bool) {
		self.push(array, Tag::Byte(i8::from(value)));
	}
}
