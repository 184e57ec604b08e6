use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::StyleId;
use crate::types::identifiers::ArtifactId;

/// Raw identity fields, captured once per generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedInput {
    pub full_name: String,
    /// ISO date (`2000-01-01`); only its digits matter for derivation.
    pub birth_date: String,
    /// `HH:MM`.
    pub birth_time: String,
}

/// Stable integers derived from a [`SeedInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSeed {
    /// 1..=9, or the terminal master numbers 11 and 22.
    pub life_path: u8,
    /// One digit (1..=9) per letter of the name, in original order.
    /// May be empty; [`DerivedSeed::components`] pads.
    pub name_digits: Vec<u8>,
}

impl DerivedSeed {
    /// The 4-entry seed tuple driving generation: the life path followed by
    /// the first three name digits, padded with `1` when the name yields
    /// fewer than three.
    pub fn components(&self) -> [u8; 4] {
        let digit = |i: usize| self.name_digits.get(i).copied().unwrap_or(1);
        [self.life_path, digit(0), digit(1), digit(2)]
    }
}

/// The generation output. Immutable after creation; ownership moves to the
/// caller for display, persistence, or playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicArtifact {
    pub title: String,
    pub key: String,
    pub tempo: u16,
    pub style: StyleId,
    pub pattern: String,
    /// Note names with octave, e.g. `E4`.
    pub melody: Vec<String>,
    /// Four chord names.
    pub chords: Vec<String>,
    pub seed: DerivedSeed,
    pub unique_id: ArtifactId,
    pub generated_at: DateTime<Utc>,
}
