use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Logical role of a cache bucket. Exactly one bucket per role is current
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketRole {
    Static,
    Dynamic,
}

impl BucketRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketRole::Static => "static",
            BucketRole::Dynamic => "dynamic",
        }
    }
}

/// Versioned bucket name, `<role>-<version>` (e.g. `static-v1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(role: BucketRole, version: &str) -> Self {
        BucketName(format!("{}-{}", role.as_str(), version))
    }

    /// Wrap a raw name as enumerated from a store. Stale buckets from prior
    /// versions only ever round-trip through here on their way to deletion.
    pub fn from_raw(name: impl Into<String>) -> Self {
        BucketName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cache key for a stored request: the request URL minus any fragment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn new(url: &str) -> Self {
        let without_fragment = match url.split_once('#') {
            Some((before, _)) => before,
            None => url,
        };
        RequestKey(without_fragment.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable filename stem: first 12 hex chars of the key's SHA-256.
    /// Collisions are guarded at read time by verifying the embedded key.
    pub fn file_stem(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let hash = hasher.finalize();
        hex::encode(hash)[..12].to_string()
    }
}

const ID_CHARSET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque artifact identifier.
///
/// Deliberately NOT derived from the seed: two generations of the same seed
/// at different times get different ids but identical musical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// `MUSIC-<unix millis, base36>-<5 random alphanumerics>`.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let mut rng = rand::thread_rng();
        let suffix: String = (0..5)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect();
        ArtifactId(format!("MUSIC-{}-{}", base36(millis), suffix))
    }

    /// Fixed-prefix id used by the fallback artifact.
    pub fn fallback() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        ArtifactId(format!("FB-{}", base36(millis)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_CHARSET[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
