//! Static style configuration: per-style scale, chord-progression table,
//! tempo range. Loaded once, read-only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleId {
    Lofi,
    Chill,
    Study,
    Relax,
}

impl StyleId {
    /// Parse a raw style selector. Unrecognized ids fall back to lofi;
    /// style lookup never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chill" => StyleId::Chill,
            "study" => StyleId::Study,
            "relax" => StyleId::Relax,
            _ => StyleId::Lofi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::Lofi => "lofi",
            StyleId::Chill => "chill",
            StyleId::Study => "study",
            StyleId::Relax => "relax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoRange {
    pub min: u16,
    pub max: u16,
}

/// Immutable per-style configuration.
#[derive(Debug, Clone, Copy)]
pub struct StyleProfile {
    pub id: StyleId,
    pub display_name: &'static str,
    pub pattern: &'static str,
    pub key: &'static str,
    /// Seven pitch names, low to high.
    pub scale: [&'static str; 7],
    pub tempo_range: TempoRange,
    pub progressions: &'static [[&'static str; 4]],
    /// Notes per generated melody, 8..=16.
    pub melody_len: usize,
}

static LOFI: StyleProfile = StyleProfile {
    id: StyleId::Lofi,
    display_name: "Lo-fi Beats",
    pattern: "Jazzy Lo-fi",
    key: "Am",
    scale: ["A", "B", "C", "D", "E", "F", "G"],
    tempo_range: TempoRange { min: 70, max: 100 },
    progressions: &[
        ["Am", "F", "C", "G"],
        ["Am", "C", "G", "F"],
        ["C", "G", "Am", "F"],
        ["F", "C", "G", "Am"],
    ],
    melody_len: 12,
};

static CHILL: StyleProfile = StyleProfile {
    id: StyleId::Chill,
    display_name: "Chill / Ambient",
    pattern: "Ambient Pad",
    key: "C",
    scale: ["C", "D", "E", "F", "G", "A", "B"],
    tempo_range: TempoRange { min: 60, max: 80 },
    progressions: &[
        ["Am", "Dm", "F", "C"],
        ["C", "Am", "F", "G"],
        ["Em", "C", "G", "D"],
    ],
    melody_len: 8,
};

static STUDY: StyleProfile = StyleProfile {
    id: StyleId::Study,
    display_name: "Study / Focus",
    pattern: "Minimal Focus",
    key: "C",
    scale: ["C", "D", "E", "F", "G", "A", "Bb"],
    tempo_range: TempoRange { min: 80, max: 100 },
    progressions: &[
        ["C", "G", "Am", "F"],
        ["G", "Em", "C", "D"],
        ["Am", "F", "C", "G"],
    ],
    melody_len: 16,
};

static RELAX: StyleProfile = StyleProfile {
    id: StyleId::Relax,
    display_name: "Relax / Meditation",
    pattern: "Meditation Drone",
    key: "D",
    scale: ["D", "E", "F#", "G", "A", "B", "C#"],
    tempo_range: TempoRange { min: 50, max: 70 },
    progressions: &[
        ["Am", "F", "C", "G"],
        ["C", "G", "Am", "Em"],
        ["Dm", "Am", "C", "F"],
    ],
    melody_len: 8,
};

/// Read-only style lookup table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCatalog;

impl StyleCatalog {
    pub fn get(&self, id: StyleId) -> &'static StyleProfile {
        match id {
            StyleId::Lofi => &LOFI,
            StyleId::Chill => &CHILL,
            StyleId::Study => &STUDY,
            StyleId::Relax => &RELAX,
        }
    }

    /// Look up a raw style selector; unknown ids resolve to the lofi profile.
    pub fn lookup(&self, raw: &str) -> &'static StyleProfile {
        self.get(StyleId::parse(raw))
    }

    pub fn profiles(&self) -> impl Iterator<Item = &'static StyleProfile> {
        [&LOFI, &CHILL, &STUDY, &RELAX].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_falls_back_to_lofi() {
        let catalog = StyleCatalog;
        assert_eq!(catalog.lookup("vaporwave").id, StyleId::Lofi);
        assert_eq!(catalog.lookup("").id, StyleId::Lofi);
        assert_eq!(catalog.lookup("  CHILL ").id, StyleId::Chill);
    }

    #[test]
    fn every_profile_is_well_formed() {
        let catalog = StyleCatalog;
        for profile in catalog.profiles() {
            assert!(profile.tempo_range.min < profile.tempo_range.max);
            assert!(!profile.progressions.is_empty());
            assert!((8..=16).contains(&profile.melody_len));
        }
    }
}
