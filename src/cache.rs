use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{AnagramError, Result};
use crate::index::AnagramIndex;
use crate::types::*;
use crate::AnyIndex;

///Identifies a cached index: the strategy plus a fingerprint of the
///dictionary it was built from, so a different word list never hits
///an index built for another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub strategy: Strategy,
    pub fingerprint: u32,
}

impl CacheKey {
    ///Computes the key for a dictionary; word order and duplicates matter
    pub fn new<I, S>(strategy: Strategy, words: I) -> CacheKey
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = crc32fast::Hasher::new();
        let mut count: u64 = 0;
        for word in words {
            hasher.update(word.as_ref().as_bytes());
            hasher.update(b"\n");
            count += 1;
        }
        hasher.update(&count.to_le_bytes());
        CacheKey {
            strategy,
            fingerprint: hasher.finalize(),
        }
    }

    fn filename(&self) -> String {
        format!("{}-{:08x}.bin", self.strategy.name(), self.fingerprint)
    }
}

///Stores built indexes on disk so they need not be rebuilt on every run.
///There is one file per strategy and dictionary inside the cache directory.
///A loaded index behaves exactly like a freshly built one.
pub struct IndexCache {
    dir: PathBuf,
}

impl IndexCache {
    pub fn new<P: Into<PathBuf>>(dir: P) -> IndexCache {
        IndexCache { dir: dir.into() }
    }

    pub fn path(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.filename())
    }

    pub fn has(&self, key: &CacheKey) -> bool {
        self.path(key).is_file()
    }

    pub fn load(&self, key: &CacheKey) -> Result<AnyIndex> {
        let path = self.path(key);
        log::info!("Loading cached {} index from {}...", key.strategy, path.display());
        let reader = BufReader::new(File::open(&path)?);
        let index: AnyIndex = bincode::deserialize_from(reader)
            .map_err(|e| AnagramError::cache(format!("{}: {}", path.display(), e)))?;
        if index.strategy() != key.strategy {
            return Err(AnagramError::cache(format!(
                "{} holds a {} index, expected {}",
                path.display(),
                index.strategy(),
                key.strategy
            )));
        }
        Ok(index)
    }

    ///Writes the index atomically: readers never see a partially written file
    pub fn save(&self, index: &AnyIndex, key: &CacheKey) -> Result<()> {
        if index.strategy() != key.strategy {
            return Err(AnagramError::cache(format!(
                "cannot store a {} index under a {} key",
                index.strategy(),
                key.strategy
            )));
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.path(key);
        log::info!("Saving {} index to {}...", key.strategy, path.display());
        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            bincode::serialize_into(&mut writer, index)
                .map_err(|e| AnagramError::cache(format!("{}: {}", path.display(), e)))?;
            writer.flush()?;
        }
        temp_file
            .persist(&path)
            .map_err(|e| AnagramError::Io(e.error))?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
