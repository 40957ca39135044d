pub mod error;
pub mod fixtures;

pub use error::{ImporterError, Result};
pub use fixtures::{
    models::{FixtureFile, FixtureMatch},
    transformer::{FixtureImporter, ImportSummary},
    validator::{FixtureValidator, ValidationReport},
};
