//! Armazenamento em disco
//!
//! Um arquivo por chave dentro da pasta de dados. A escrita vai para um
//! arquivo temporário e é renomeada, para não deixar valor pela metade.

use bimtrack_common::KeyValueStorage;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> bimtrack_common::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "valor lido");
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> bimtrack_common::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "valor gravado");
        Ok(())
    }

    fn remove(&self, key: &str) -> bimtrack_common::Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(key, path = %path.display(), "valor removido");
        }
        Ok(())
    }
}
