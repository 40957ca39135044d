use storage::MatchRepository;
use tracing::{debug, info};

use super::models::FixtureFile;
use crate::Result;

/// Counts of matches written by one import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
}

/// Writes fixture schedules into a match store.
pub struct FixtureImporter<'a> {
    matches: &'a dyn MatchRepository,
}

impl<'a> FixtureImporter<'a> {
    pub fn new(matches: &'a dyn MatchRepository) -> Self {
        Self { matches }
    }

    /// Upserts every fixture. A result already recorded for a match survives
    /// re-importing its schedule.
    pub async fn import(&self, fixtures: &FixtureFile) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for fixture in &fixtures.matches {
            let mut game = fixture.to_match();

            match self.matches.get(&fixture.match_id).await? {
                Some(existing) => {
                    game.home_score = existing.home_score;
                    game.away_score = existing.away_score;
                    summary.updated += 1;
                    debug!("Updating schedule of match {}", fixture.match_id);
                }
                None => {
                    summary.created += 1;
                    debug!("Creating match {}", fixture.match_id);
                }
            }

            self.matches.put(&game).await?;
        }

        info!(
            "Imported {} match(es): {} created, {} updated",
            fixtures.matches.len(),
            summary.created,
            summary.updated
        );

        Ok(summary)
    }
}
