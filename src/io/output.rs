use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write one generated file into the output directory, overwriting any
/// previous version. There is no merging or incremental diffing; reruns
/// regenerate everything wholesale.
pub fn write_output_file(output_dir: &Path, file_name: &str, content: &str) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let path = output_dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
