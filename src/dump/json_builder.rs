use serde_json::{Map, Number, Value};

use crate::dump::builder::{NodeId, TreeBuilder};

/// [`TreeBuilder`] implementation targeting the JSON document model.
///
/// Nodes live in a slot arena owned by the builder; attaching a node moves it
/// out of its slot and into the parent. All integer widths map onto the JSON
/// integer number type and both float widths onto the JSON floating-point
/// number type.
#[derive(Debug, Default)]
pub struct JsonBuilder {
	slots: Vec<Option<Value>>,
}

impl JsonBuilder {
	/// Create a builder with no allocated nodes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Consume the builder and extract the finished tree rooted at `root`.
	pub fn finish(mut self, root: NodeId) -> Value {
		self.take(root)
	}

	fn alloc(&mut self, value: Value) -> NodeId {
		self.slots.push(Some(value));
		NodeId(self.slots.len() - 1)
	}

	fn take(&mut self, node: NodeId) -> Value {
		self.slots[node.0].take().unwrap_or(Value::Null)
	}

	fn object_mut(&mut self, node: NodeId) -> Option<&mut Map<String, Value>> {
		match self.slots[node.0].as_mut() {
			Some(Value::Object(map)) => Some(map),
			_ => None,
		}
	}

	fn array_mut(&mut self, node: NodeId) -> Option<&mut Vec<Value>> {
		match self.slots[node.0].as_mut() {
			Some(Value::Array(items)) => Some(items),
			_ => None,
		}
	}

	fn set(&mut self, parent: NodeId, key: &str, value: Value) {
		if let Some(map) = self.object_mut(parent) {
			map.insert(key.to_owned(), value);
		}
	}

	fn push(&mut self, array: NodeId, value: Value) {
		if let Some(items) = self.array_mut(array) {
			items.push(value);
		}
	}
}

fn float_number(value: f64) -> Value {
	Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

fn byte_array(value: &[i8]) -> Value {
	Value::Array(value.iter().map(|byte| Value::from(*byte)).collect())
}

fn int_array(value: &[i32]) -> Value {
	Value::Array(value.iter().map(|int| Value::from(*int)).collect())
}

fn long_array(value: &[i64]) -> Value {
	Value::Array(value.iter().map(|long| Value::from(*long)).collect())
}

impl TreeBuilder for JsonBuilder {
	type Node = NodeId;

	fn create_object(&mut self) -> NodeId {
		self.alloc(Value::Object(Map::new()))
	}

	fn create_array(&mut self) -> NodeId {
		self.alloc(Value::Array(Vec::new()))
	}

	fn add_to_object(&mut self, parent: NodeId, key: &str, value: NodeId) {
		// Only container nodes may be attached; anything else is a contract
		// violation and is left untouched.
		if matches!(self.slots[value.0], Some(Value::Object(_)) | Some(Value::Array(_))) {
			let child = self.take(value);
			self.set(parent, key, child);
		}
	}

	fn add_to_array(&mut self, array: NodeId, value: NodeId) {
		if matches!(self.slots[value.0], Some(Value::Object(_)) | Some(Value::Array(_))) {
			let child = self.take(value);
			self.push(array, child);
		}
	}

	fn add_byte_property(&mut self, parent: NodeId, key: &str, value: i8) {
		self.set(parent, key, Value::from(value));
	}

	fn add_short_property(&mut self, parent: NodeId, key: &str, value: i16) {
		self.set(parent, key, Value::from(value));
	}

	fn add_int_property(&mut self, parent: NodeId, key: &str, value: i32) {
		self.set(parent, key, Value::from(value));
	}

	fn add_long_property(&mut self, parent: NodeId, key: &str, value: i64) {
		self.set(parent, key, Value::from(value));
	}

	fn add_float_property(&mut self, parent: NodeId, key: &str, value: f32) {
		self.set(parent, key, float_number(f64::from(value)));
	}

	fn add_double_property(&mut self, parent: NodeId, key: &str, value: f64) {
		self.set(parent, key, float_number(value));
	}

	fn add_string_property(&mut self, parent: NodeId, key: &str, value: &str) {
		self.set(parent, key, Value::from(value));
	}

	fn add_byte_array_property(&mut self, parent: NodeId, key: &str, value: &[i8]) {
		self.set(parent, key, byte_array(value));
	}

	fn add_int_array_property(&mut self, parent: NodeId, key: &str, value: &[i32]) {
		self.set(parent, key, int_array(value));
	}

	fn add_long_array_property(&mut self, parent: NodeId, key: &str, value: &[i64]) {
		self.set(parent, key, long_array(value));
	}

	fn add_bool_property(&mut self, parent: NodeId, key: &str, value: bool) {
		self.set(parent, key, Value::from(value));
	}

	fn add_byte_to_array(&mut self, array: NodeId, value: i8) {
		self.push(array, Value::from(value));
	}

	fn add_short_to_array(&mut self, array: NodeId, value: i16) {
		self.push(array, Value::from(value));
	}

	fn add_int_to_array(&mut self, array: NodeId, value: i32) {
		self.push(array, Value::from(value));
	}

	fn add_long_to_array(&mut self, array: NodeId, value: i64) {
		self.push(array, Value::from(value));
	}

	fn add_float_to_array(&mut self, array: NodeId, value: f32) {
		self.push(array, float_number(f64::from(value)));
	}

	fn add_double_to_array(&mut self, array: NodeId, value: f64) {
		self.push(array, float_number(value));
	}

	fn add_string_to_array(&mut self, array: NodeId, value: &str) {
		self.push(array, Value::from(value));
	}

	fn add_byte_array_to_array(&mut self, array: NodeId, value: &[i8]) {
		self.push(array, byte_array(value));
	}

	fn add_int_array_to_array(&mut self, array: NodeId, value: &[i32]) {
		self.push(array, int_array(value));
	}

	fn add_long_array_to_array(&mut self, array: NodeId, value: &[i64]) {
		self.push(array, long_array(value));
	}

	fn add_bool_to_array(&mut self, array: NodeId, value: bool) {
		self.push(array, Value::from(value));
	}
}
