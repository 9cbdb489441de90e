use serde_json::json;

use crate::dump::provider::{BlockProvider, RegistryProvider};
use crate::dump::value::{IntWidth, StructuralValue};
use crate::dump::{Snapshot, SnapshotProvider, decode_root};

fn sample_snapshot() -> Snapshot {
	serde_json::from_value(json!({
		"blocks": [
			{
				"identifier": "minecraft:stone",
				"states": [{ "id": 1, "default": true }]
			}
		],
		"registries": [
			{
				"identifier": "minecraft:sound_event",
				"entries": [
					{ "name": "minecraft:ambient.cave", "id": 0, "element": { "sound_id": "minecraft:ambient.cave" } },
					{ "name": "minecraft:broken", "id": 1 }
				]
			}
		]
	}))
	.expect("snapshot parses")
}

#[test]
fn snapshot_feeds_both_provider_contracts() {
	let provider = SnapshotProvider::new(sample_snapshot());

	let blocks = provider.all_blocks().expect("blocks fetch");
	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].identifier, "minecraft:stone");
	assert!(blocks[0].states[0].is_default);

	let registries = provider.all_registries().expect("registries fetch");
	assert_eq!(registries.len(), 1);
	let entries = &registries[0].entries;
	assert!(entries[0].has_encoded());
	assert!(!entries[1].has_encoded());
}

#[test]
fn json_payloads_decode_through_the_tag_contract() {
	let payload = json!({
		"name": "thing",
		"small": 12,
		"big": 1_i64 << 40,
		"ratio": 0.5,
		"enabled": true,
		"missing": null,
		"tags": ["a", "b"],
	});

	let decoded = decode_root(&payload);
	assert_eq!(decoded.get("name"), Some(&StructuralValue::String("thing".to_owned())));
	assert_eq!(decoded.get("small"), Some(&StructuralValue::int(12, IntWidth::Int)));
	assert_eq!(decoded.get("big"), Some(&StructuralValue::int(1_i64 << 40, IntWidth::Long)));
	assert!(matches!(decoded.get("ratio"), Some(StructuralValue::Float { .. })));
	assert_eq!(decoded.get("enabled"), Some(&StructuralValue::int(1, IntWidth::Byte)));
	// Null children are skipped by the compound iteration contract.
	assert_eq!(decoded.get("missing"), None);
	assert_eq!(
		decoded.get("tags"),
		Some(&StructuralValue::List(vec![
			StructuralValue::String("a".to_owned()),
			StructuralValue::String("b".to_owned()),
		]))
	);
}

#[test]
fn bare_scalar_payload_is_wrapped_under_value() {
	let decoded = decode_root(&json!("just-a-string"));
	assert_eq!(decoded.get("value"), Some(&StructuralValue::String("just-a-string".to_owned())));
}
