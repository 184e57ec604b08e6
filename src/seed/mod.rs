pub mod deriver;

pub use deriver::{derive, derive_life_path, derive_name_digits, SeedError};
