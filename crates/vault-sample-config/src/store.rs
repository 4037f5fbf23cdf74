use std::path::{Path, PathBuf};

use crate::StoreError;

/// Key-value storage the host hands to a plugin for its private data.
pub trait DataStore {
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load_data(&self) -> Result<Option<String>, StoreError>;

    fn save_data(&mut self, content: &str) -> Result<(), StoreError>;

    /// Human readable location, used in log lines and errors.
    fn location(&self) -> String;
}

/// Plugin data stored as `data.toml` inside the plugin's data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "data.toml";

    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = Self::expand_path(data_dir.as_ref())
            .unwrap_or_else(|| data_dir.as_ref().to_path_buf());
        Self {
            path: data_dir.join(Self::FILE_NAME),
        }
    }

    /// Store in [`FileStore::default_data_dir`].
    pub fn in_default_dir() -> Self {
        Self::new(Self::default_data_dir())
    }

    pub fn default_data_dir() -> PathBuf {
        let data_dir = shellexpand::tilde("~/.config/vault-sample/plugins/sample-plugin");
        PathBuf::from(data_dir.as_ref())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

impl DataStore for FileStore {
    fn load_data(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save_data(&mut self, content: &str) -> Result<(), StoreError> {
        let write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&self.path, content).map_err(write_error)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Store that keeps data in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(content: &str) -> Self {
        Self {
            data: Some(content.to_string()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl DataStore for MemoryStore {
    fn load_data(&self) -> Result<Option<String>, StoreError> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, content: &str) -> Result<(), StoreError> {
        self.data = Some(content.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
