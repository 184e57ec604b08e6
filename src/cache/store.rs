use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::entry::StoredResponse;
use crate::types::{BucketName, RequestKey};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistent key-value blob storage, one namespace per bucket.
///
/// `put` and `get` are atomic per key; interleaved writes to the same key
/// resolve last-write-wins. All methods take `&self`, so concurrent `serve`
/// calls share a store without any manager-side locking.
pub trait BucketStore: Send + Sync {
    fn put(
        &self,
        bucket: &BucketName,
        key: &RequestKey,
        response: &StoredResponse,
    ) -> Result<(), StoreError>;

    fn get(&self, bucket: &BucketName, key: &RequestKey)
        -> Result<Option<StoredResponse>, StoreError>;

    /// All-or-nothing bulk add: either every entry becomes visible under
    /// `bucket` or none does. Replaces the bucket's previous contents.
    fn put_all(
        &self,
        bucket: &BucketName,
        entries: &[(RequestKey, StoredResponse)],
    ) -> Result<(), StoreError>;

    fn list_buckets(&self) -> Result<Vec<BucketName>, StoreError>;

    fn delete_bucket(&self, bucket: &BucketName) -> Result<(), StoreError>;
}

// The full key is embedded and verified on read, so a filename-stem
// collision reads as a miss rather than the wrong response.
#[derive(Serialize, Deserialize)]
struct EntryFile {
    key: RequestKey,
    response: StoredResponse,
}

/// Filesystem-backed store: a directory per bucket under one root, a JSON
/// entry file per key named by its hash stem. Writes stage to a temp file
/// (or, for bulk adds, a temp directory) and rename into place.
#[derive(Debug)]
pub struct FsBucketStore {
    root: PathBuf,
}

impl FsBucketStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FsBucketStore { root })
    }

    fn bucket_dir(&self, bucket: &BucketName) -> PathBuf {
        self.root.join(bucket.as_str())
    }

    fn write_entry(
        dir: &Path,
        key: &RequestKey,
        response: &StoredResponse,
    ) -> Result<(), StoreError> {
        let stem = key.file_stem();
        let staged = dir.join(format!(".{stem}.tmp"));
        let entry = EntryFile {
            key: key.clone(),
            response: response.clone(),
        };
        let file = fs::File::create(&staged)?;
        serde_json::to_writer(&file, &entry)?;
        file.sync_all()?;
        fs::rename(&staged, dir.join(format!("{stem}.json")))?;
        Ok(())
    }
}

impl BucketStore for FsBucketStore {
    fn put(
        &self,
        bucket: &BucketName,
        key: &RequestKey,
        response: &StoredResponse,
    ) -> Result<(), StoreError> {
        let dir = self.bucket_dir(bucket);
        fs::create_dir_all(&dir)?;
        Self::write_entry(&dir, key, response)
    }

    fn get(
        &self,
        bucket: &BucketName,
        key: &RequestKey,
    ) -> Result<Option<StoredResponse>, StoreError> {
        let path = self.bucket_dir(bucket).join(format!("{}.json", key.file_stem()));
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entry: EntryFile = serde_json::from_reader(file)?;
        if entry.key != *key {
            return Ok(None);
        }
        Ok(Some(entry.response))
    }

    fn put_all(
        &self,
        bucket: &BucketName,
        entries: &[(RequestKey, StoredResponse)],
    ) -> Result<(), StoreError> {
        let dir = self.bucket_dir(bucket);
        let staging = self.root.join(format!(".staging-{}", bucket.as_str()));

        // Clean up any stale staging dir from a crashed previous attempt.
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        fs::create_dir_all(&staging)?;

        for (key, response) in entries {
            Self::write_entry(&staging, key, response)?;
        }

        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::rename(&staging, &dir)?;
        Ok(())
    }

    fn list_buckets(&self) -> Result<Vec<BucketName>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Staging leftovers are not buckets.
                if !name.starts_with('.') {
                    names.push(BucketName::from_raw(name));
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_bucket(&self, bucket: &BucketName) -> Result<(), StoreError> {
        match fs::remove_dir_all(self.bucket_dir(bucket)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
