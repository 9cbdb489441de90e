use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DumpError>;

/// Errors produced while resolving profiles, building dump trees, and writing output.
#[derive(Debug, Error)]
pub enum DumpError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization or profile parse failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Requested the reserved binary-packed mode, which is not implemented.
	#[error("binary format is not implemented yet")]
	BinaryFormatUnimplemented,
	/// Requested format string is not a known output format.
	#[error("unknown format: {format}")]
	UnknownFormat {
		/// User-provided format value.
		format: String,
	},
	/// Data provider could not produce its entity collection.
	#[error("provider failure: {message}")]
	Provider {
		/// Provider-supplied failure description.
		message: String,
	},
	/// Requested profile does not exist in the profile directory.
	#[error("profile not found: {name}")]
	ProfileNotFound {
		/// Requested profile name.
		name: String,
	},
	/// Multi-file profile declared no usable output configurations.
	#[error("no valid output configurations found in profile")]
	NoOutputs,
	/// Dump run finished with a failure outcome.
	#[error("{message}")]
	RunFailed {
		/// Outcome message reported by the runner.
		message: String,
	},
}
