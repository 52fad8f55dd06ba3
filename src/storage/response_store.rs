// Persists raw JSON responses for manual inspection
use std::fs;
use std::path::{Path, PathBuf};
use serde_json::Value;
use crate::v_out;

/// Writes pretty-printed response dumps into the output directory and
/// remembers what was written during this run
pub struct ResponseStore {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl ResponseStore {
    pub fn new(output_dir: &str) -> Self {
        Self {
            output_dir: PathBuf::from(output_dir),
            written: Vec::new(),
        }
    }

    /// Write a dump under a fixed filename, overwriting any previous run
    pub fn dump_named(&mut self, filename: &str, data: &Value) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }

        let path = self.output_dir.join(filename);
        let pretty = serde_json::to_string_pretty(data)?;
        fs::write(&path, pretty)?;

        v_out!("💾 Saved to {}", path.display());
        self.written.push(path.clone());
        Ok(path)
    }

    /// Write a dump named after the endpoint that produced it,
    /// e.g. `inventory_CatalogItems.json`
    pub fn dump_for_endpoint(&mut self, prefix: &str, endpoint: &str, data: &Value) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let filename = filename_for_endpoint(prefix, endpoint);
        self.dump_named(&filename, data)
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// List everything written this run
    pub fn print_manifest(&self) {
        if self.written.is_empty() {
            v_out!("📂 No response dumps were written this run");
            return;
        }

        v_out!("📂 Response dumps written:");
        for path in &self.written {
            v_out!("   {}", path.display());
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Derive a filesystem-safe dump filename from an endpoint path.
/// Takes the last path segment and rewrites anything outside
/// [A-Za-z0-9._-], so `Companies(293892)` style segments stay usable.
pub fn filename_for_endpoint(prefix: &str, endpoint: &str) -> String {
    let last_segment = endpoint.rsplit('/').next().unwrap_or(endpoint);
    let sanitized: String = last_segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    format!("{}_{}.json", prefix, sanitized)
}
