//! Match seed data ("fixtures") loaded from JSON files.

pub mod models;
pub mod transformer;
pub mod validator;

use std::path::Path;

use crate::Result;
use models::FixtureFile;

pub async fn load_fixture_file(path: &Path) -> Result<FixtureFile> {
    let json_content = tokio::fs::read_to_string(path).await?;
    let fixtures: FixtureFile = serde_json::from_str(&json_content)?;
    Ok(fixtures)
}
