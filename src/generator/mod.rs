//! Deterministic artifact generation.
//!
//! `generate` is total: malformed identity input degrades to a fixed
//! fallback artifact, never an error. For a fixed `(SeedInput, style)` the
//! melody, chords, tempo, and key are identical across calls; only the
//! opaque id and timestamp differ.

use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::{StyleCatalog, StyleProfile, TempoRange};
use crate::seed;
use crate::types::{ArtifactId, DerivedSeed, MusicArtifact, SeedInput};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentGenerator {
    catalog: StyleCatalog,
}

impl ContentGenerator {
    pub fn new(catalog: StyleCatalog) -> Self {
        Self { catalog }
    }

    /// Generate an artifact for the given identity and style selector.
    ///
    /// Never fails: an unrecognized style resolves to lofi, a short or empty
    /// name is padded, and an unusable birth date yields the fallback
    /// artifact.
    pub fn generate(&self, input: &SeedInput, style_id: &str) -> MusicArtifact {
        let profile = self.catalog.lookup(style_id);
        match seed::derive(input) {
            Ok(derived) => {
                debug!(style = profile.id.as_str(), life_path = derived.life_path, "composing artifact");
                compose(input, profile, derived)
            }
            Err(err) => {
                warn!(style = profile.id.as_str(), %err, "seed derivation failed, serving fallback artifact");
                fallback(input, profile)
            }
        }
    }
}

fn compose(input: &SeedInput, profile: &StyleProfile, derived: DerivedSeed) -> MusicArtifact {
    let components = derived.components();

    let progression_index = components[0] as usize % profile.progressions.len();
    let chords = profile.progressions[progression_index]
        .iter()
        .map(|c| c.to_string())
        .collect();

    MusicArtifact {
        title: title_for(&input.full_name, profile),
        key: profile.key.to_string(),
        tempo: tempo_for(derived.life_path, profile.tempo_range),
        style: profile.id,
        pattern: profile.pattern.to_string(),
        melody: build_melody(&components, profile),
        chords,
        seed: derived,
        unique_id: ArtifactId::generate(),
        generated_at: Utc::now(),
    }
}

/// `melody[i] = scale[(seed[i mod 4] + i) mod 7]`, octave base 4 bumped once
/// per scale-length wrap, cycling through {4, 5}.
fn build_melody(components: &[u8; 4], profile: &StyleProfile) -> Vec<String> {
    let scale_len = profile.scale.len();
    (0..profile.melody_len)
        .map(|i| {
            let value = components[i % components.len()] as usize;
            let note = profile.scale[(value + i) % scale_len];
            let octave = 4 + ((value + i) / scale_len) % 2;
            format!("{note}{octave}")
        })
        .collect()
}

fn tempo_for(life_path: u8, range: TempoRange) -> u16 {
    let span = range.max.saturating_sub(range.min);
    if span == 0 {
        return range.min;
    }
    (range.min + u16::from(life_path) % span).clamp(range.min, range.max)
}

fn title_for(full_name: &str, profile: &StyleProfile) -> String {
    let first = full_name.split_whitespace().next().unwrap_or("you");
    format!("{} for {}", profile.display_name, first)
}

/// Fixed artifact substituted when derivation fails. The requested style is
/// retained so the caller's UI state stays coherent.
fn fallback(input: &SeedInput, profile: &StyleProfile) -> MusicArtifact {
    MusicArtifact {
        title: title_for(&input.full_name, profile),
        key: "Am".to_string(),
        tempo: 85,
        style: profile.id,
        pattern: "Lo-fi Beats".to_string(),
        melody: ["A4", "C4", "E4", "G4", "F4", "A4", "C4", "E4"]
            .iter()
            .map(|n| n.to_string())
            .collect(),
        chords: ["Am", "F", "C", "G"].iter().map(|c| c.to_string()).collect(),
        seed: DerivedSeed {
            life_path: 1,
            name_digits: vec![2, 3],
        },
        unique_id: ArtifactId::fallback(),
        generated_at: Utc::now(),
    }
}
