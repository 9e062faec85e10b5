use crate::model::SchoolData;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "school_helper_data.json";

/// How the document came to be in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Missing,
    Loaded,
    Corrupt,
}

pub struct LocalStorage;

impl LocalStorage {
    fn lock_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        path.with_file_name(name)
    }

    /// Runs `f` while holding an exclusive lock on `<path>.lock`.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::lock_path(path);
        if let Some(parent) = lock_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("cannot open lock file {}", lock_path.display()))?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = lock_file.unlock();
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Pretty JSON with 4-space indentation, non-ASCII left as-is.
    pub fn to_json(data: &SchoolData) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn save(path: &Path, data: &SchoolData) -> Result<()> {
        let json = Self::to_json(data)?;
        Self::with_lock(path, || Self::atomic_write(path, &json))
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            days = data.schedule.len(),
            homework = data.homework.len(),
            "saved school data"
        );
        Ok(())
    }

    /// A missing file is a first run; a corrupt one is replaced by defaults.
    pub fn load(path: &Path) -> Result<(SchoolData, LoadStatus)> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no data file yet, starting empty");
                return Ok((SchoolData::default(), LoadStatus::Missing));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };

        match serde_json::from_slice::<SchoolData>(&bytes) {
            Ok(data) => Ok((data, LoadStatus::Loaded)),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "data file is corrupt, starting with empty data"
                );
                Ok((SchoolData::default(), LoadStatus::Corrupt))
            }
        }
    }
}
