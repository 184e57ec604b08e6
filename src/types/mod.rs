pub mod artifact;
pub mod identifiers;

pub use artifact::{DerivedSeed, MusicArtifact, SeedInput};
pub use identifiers::{ArtifactId, BucketName, BucketRole, RequestKey};
