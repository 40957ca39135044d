use std::collections::HashSet;

use tracing::warn;

use super::models::FixtureFile;
use crate::{ImporterError, Result};

pub struct FixtureValidator;

impl FixtureValidator {
    pub fn validate(fixtures: &FixtureFile) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if fixtures.tournament.as_deref().is_none_or(str::is_empty) {
            report
                .warnings
                .push("Tournament name is not specified".to_string());
        }

        if fixtures.matches.is_empty() {
            report
                .errors
                .push("At least one match is required".to_string());
        }

        let mut match_ids = HashSet::new();
        for (idx, fixture) in fixtures.matches.iter().enumerate() {
            let label = format!(
                "{}. {} - {}",
                idx + 1,
                fixture.home_team,
                fixture.away_team
            );

            if fixture.match_id.as_str().trim().is_empty() {
                report
                    .errors
                    .push(format!("Match '{}' has an empty match_id", label));
            } else if !match_ids.insert(&fixture.match_id) {
                report
                    .errors
                    .push(format!("Duplicate match_id: '{}'", fixture.match_id));
            }

            if fixture.home_team.trim().is_empty() || fixture.away_team.trim().is_empty() {
                report
                    .errors
                    .push(format!("Match '{}' is missing a team name", label));
            } else if fixture.home_team == fixture.away_team {
                report.errors.push(format!(
                    "Match '{}' has the same team on both sides",
                    label
                ));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCHDAY_ONE: &str = include_str!("../../fixtures/euro2024_matchday1.json");

    fn parse(json: &str) -> FixtureFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_bundled_fixtures_are_valid() {
        let fixtures = parse(MATCHDAY_ONE);
        let report = FixtureValidator::validate(&fixtures).unwrap();

        assert_eq!(fixtures.matches.len(), 12);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let fixtures = parse(
            r#"{"tournament": "Cup", "matches": [
                {"match_id": 1, "home_team": "A", "away_team": "B", "match_date": "2024-06-14T21:00:00"},
                {"match_id": "1", "home_team": "C", "away_team": "D", "match_date": "2024-06-15T21:00:00"}
            ]}"#,
        );

        let error = FixtureValidator::validate(&fixtures).unwrap_err();
        assert!(error.to_string().contains("Duplicate match_id: '1'"));
    }

    #[test]
    fn test_team_cannot_play_itself() {
        let fixtures = parse(
            r#"{"matches": [
                {"match_id": "1", "home_team": "A", "away_team": "A", "match_date": "2024-06-14T21:00:00"}
            ]}"#,
        );

        assert!(FixtureValidator::validate(&fixtures).is_err());
    }

    #[test]
    fn test_empty_file_rejected_and_missing_name_warned() {
        let empty = parse(r#"{"matches": []}"#);
        assert!(FixtureValidator::validate(&empty).is_err());

        let unnamed = parse(
            r#"{"matches": [
                {"match_id": "1", "home_team": "A", "away_team": "B", "match_date": "2024-06-14T21:00:00"}
            ]}"#,
        );
        let report = FixtureValidator::validate(&unnamed).unwrap();
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_malformed_date_fails_to_parse() {
        let result = serde_json::from_str::<FixtureFile>(
            r#"{"matches": [
                {"match_id": "1", "home_team": "A", "away_team": "B", "match_date": "14.06.2024 21:00"}
            ]}"#,
        );
        assert!(result.is_err());
    }
}
