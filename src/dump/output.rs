use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::dump::Result;

/// Create the output file's parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)?;
	}
	Ok(())
}

/// Write a finished JSON tree to `path`, pretty-printed when requested.
pub fn write_json_file(path: &Path, value: &Value, pretty: bool) -> Result<()> {
	let file = File::create(path)?;
	let mut writer = BufWriter::new(file);
	if pretty {
		serde_json::to_writer_pretty(&mut writer, value)?;
	} else {
		serde_json::to_writer(&mut writer, value)?;
	}
	writer.flush()?;
	Ok(())
}
