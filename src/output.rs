//! Converted artifact and saving it to disk

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum OutputPayload {
    /// Generated Java source
    Source(String),
    /// Converted project archive as returned by the backend
    Archive(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub file_name: String,
    pub payload: OutputPayload,
    pub completed_at: DateTime<Local>,
}

impl ConversionOutput {
    pub fn source(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            payload: OutputPayload::Source(code.into()),
            completed_at: Local::now(),
        }
    }

    pub fn archive(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            payload: OutputPayload::Archive(bytes),
            completed_at: Local::now(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.payload {
            OutputPayload::Source(code) => code.as_bytes(),
            OutputPayload::Archive(bytes) => bytes,
        }
    }

    /// Generated text, if any (archives can't be copied)
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            OutputPayload::Source(code) => Some(code),
            OutputPayload::Archive(_) => None,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes().len() as u64
    }
}

/// `dir/name`, or `dir/stem (n).ext` for the first free `n`
pub fn unique_output_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    let ext = name.extension().map(|e| e.to_string_lossy().to_string());

    (1u32..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Write the output into `dir` without overwriting anything
pub fn save_output(dir: &Path, output: &ConversionOutput) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = unique_output_path(dir, &output.file_name);
    std::fs::write(&path, output.bytes())?;
    info!(path = %path.display(), bytes = output.size(), "Output saved");
    Ok(path)
}

/// Write the output to an exact path picked in a save dialog
pub fn save_output_as(path: &Path, output: &ConversionOutput) -> std::io::Result<()> {
    std::fs::write(path, output.bytes())?;
    info!(path = %path.display(), bytes = output.size(), "Output saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_uses_name_when_free() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            unique_output_path(dir.path(), "orders.zip"),
            dir.path().join("orders.zip")
        );
    }

    #[test]
    fn save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = ConversionOutput::archive("orders.zip", vec![1, 2, 3]);
        let second = ConversionOutput::archive("orders.zip", vec![4, 5]);

        let p1 = save_output(dir.path(), &first).unwrap();
        let p2 = save_output(dir.path(), &second).unwrap();
        let p3 = save_output(dir.path(), &second).unwrap();

        assert_eq!(p1, dir.path().join("orders.zip"));
        assert_eq!(p2, dir.path().join("orders (1).zip"));
        assert_eq!(p3, dir.path().join("orders (2).zip"));
        assert_eq!(std::fs::read(&p1).unwrap(), vec![1, 2, 3]);
        assert_eq!(std::fs::read(&p2).unwrap(), vec![4, 5]);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("java");
        let output = ConversionOutput::source("App.java", "class App {}");
        let path = save_output(&nested, &output).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "class App {}");
    }

    #[test]
    fn unique_path_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README"), "x").unwrap();
        assert_eq!(
            unique_output_path(dir.path(), "README"),
            dir.path().join("README (1)")
        );
    }

    #[test]
    fn only_sources_expose_text() {
        let src = ConversionOutput::source("A.java", "class A {}");
        let zip = ConversionOutput::archive("a.zip", vec![0x50, 0x4b]);
        assert_eq!(src.text(), Some("class A {}"));
        assert_eq!(zip.text(), None);
        assert_eq!(zip.size(), 2);
    }
}
