use psychomatrix_core::generator::ContentGenerator;
use psychomatrix_core::types::{MusicArtifact, SeedInput};
use serde_json::Value;

fn make_artifact() -> MusicArtifact {
    let generator = ContentGenerator::default();
    let input = SeedInput {
        full_name: "Ada".to_string(),
        birth_date: "2000-01-01".to_string(),
        birth_time: "12:00".to_string(),
    };
    generator.generate(&input, "lofi")
}

#[test]
fn golden_artifact_field_order() {
    let artifact = make_artifact();
    let json_str = serde_json::to_string_pretty(&artifact).expect("serialize");

    let positions: Vec<usize> = [
        "\"title\":",
        "\"key\":",
        "\"tempo\":",
        "\"style\":",
        "\"pattern\":",
        "\"melody\":",
        "\"chords\":",
        "\"seed\":",
        "\"unique_id\":",
        "\"generated_at\":",
    ]
    .iter()
    .map(|field| json_str.find(field).unwrap_or_else(|| panic!("missing {field}")))
    .collect();

    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "artifact fields serialized out of order"
    );
}

#[test]
fn golden_artifact_roundtrip() {
    let artifact = make_artifact();
    let json_str = serde_json::to_string(&artifact).expect("serialize");
    let parsed: MusicArtifact = serde_json::from_str(&json_str).expect("deserialize");

    assert_eq!(parsed.title, artifact.title);
    assert_eq!(parsed.key, artifact.key);
    assert_eq!(parsed.tempo, artifact.tempo);
    assert_eq!(parsed.style, artifact.style);
    assert_eq!(parsed.melody, artifact.melody);
    assert_eq!(parsed.chords, artifact.chords);
    assert_eq!(parsed.seed, artifact.seed);
    assert_eq!(parsed.unique_id, artifact.unique_id);
    assert_eq!(parsed.generated_at, artifact.generated_at);
}

#[test]
fn golden_style_serializes_lowercase() {
    let artifact = make_artifact();
    let value: Value = serde_json::to_value(&artifact).expect("to_value");
    assert_eq!(value["style"], Value::String("lofi".to_string()));
    assert!(value["seed"]["life_path"].is_u64());
    assert!(value["seed"]["name_digits"].is_array());
}
