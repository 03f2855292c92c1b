//! Key-value backends for persisted documents

use crate::error::Result;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Minimal string key-value storage a document store sits on
pub trait KeyValueBackend {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process backend, mainly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Backend pre-populated with a single raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = MemoryBackend::new();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend storing each key as one file inside a directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        FileBackend { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`.
    ///
    /// Bytes outside `[A-Za-z0-9._-]` are percent-encoded (`:` becomes
    /// `%3A`), so distinct keys always map to distinct files.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
                name.push(char::from(b));
            } else {
                name.push_str(&format!("%{:02X}", b));
            }
        }
        self.dir.join(format!("{}.json", name))
    }
}

impl FileBackend {
    fn replace_with(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
        fs::write(tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file next to the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_name = format!(
            "{}.daymark-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = Self::replace_with(&tmp_path, &path, value) {
            // The temp file may or may not exist at this point
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
