mod block_dump;
mod builder;
mod decode;
mod encode;
mod error;
mod json_builder;
pub mod nbt;
mod nbt_builder;
mod output;
mod profile;
mod provider;
mod registry_dump;
mod runner;
mod snapshot;
mod store;
mod value;

/// Block tree assembly and block dump entry point.
pub use block_dump::{build_block_data, generate_dump as generate_block_dump};
/// Format-agnostic tree construction contract.
pub use builder::{NodeId, TreeBuilder};
/// Opaque tag decoding into the canonical value model.
pub use decode::{TagKind, TagView, decode_root, decode_tag};
/// Type-directed encoding from the canonical model into a builder.
pub use encode::{build_compound, build_list, encode_element, encode_property};
/// Error and result aliases.
pub use error::{DumpError, Result};
/// JSON target builder.
pub use json_builder::JsonBuilder;
/// Binary tag target builder.
pub use nbt_builder::NbtBuilder;
/// Export profile model and format resolution.
pub use profile::{
	BlocksConfig, DumpFormat, ExportConfig, JsonConfig, MultiOutputConfig, NbtConfig,
	ProfileConfig, RegistriesConfig,
};
/// Entity model and provider contracts.
pub use provider::{
	BlockInfo, BlockProvider, BlockStateInfo, PropertyInfo, RegistryEntry, RegistryInfo,
	RegistryProvider,
};
/// Registry tree assembly and registry dump entry point.
pub use registry_dump::{build_registry_data, generate_dump as generate_registry_dump};
/// Profile-driven run orchestration.
pub use runner::{Outcome, OutcomeKind, Providers, run_profile};
/// Snapshot dataset and snapshot-backed providers.
pub use snapshot::{Snapshot, SnapshotProvider};
/// Profile storage.
pub use store::ProfileStore;
/// Canonical structural value model.
pub use value::{Compound, FloatWidth, IntWidth, StructuralValue};
