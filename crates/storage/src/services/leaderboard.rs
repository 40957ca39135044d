use std::collections::HashMap;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::models::{Match, MatchId, Prediction, ScoreLine};

use super::scoring::points_for;

/// Sums points per user over every scoreable prediction and ranks them.
///
/// A user appears only once at least one of their predictions targets a match
/// with a recorded result. Ties keep the order in which users were first seen
/// in `predictions`.
pub fn compute_leaderboard(predictions: &[Prediction], matches: &[Match]) -> Vec<LeaderboardEntry> {
    let mut results: HashMap<&MatchId, ScoreLine> = HashMap::new();
    for game in matches {
        if let Some(result) = game.result() {
            results.entry(&game.match_id).or_insert(result);
        }
    }

    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for prediction in predictions {
        let Some(actual) = results.get(&prediction.match_id) else {
            continue;
        };
        let points = points_for(prediction.score_line(), *actual);

        match positions.get(prediction.user_id.as_str()) {
            Some(&index) => entries[index].points += points,
            None => {
                positions.insert(prediction.user_id.as_str(), entries.len());
                entries.push(LeaderboardEntry {
                    user_id: prediction.user_id.clone(),
                    points,
                });
            }
        }
    }

    // stable: equal totals stay in first-seen order
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn finished(id: &str, home: i32, away: i32) -> Match {
        let mut game = Match::scheduled(id, "Home", "Away", at(14, 21));
        game.set_result(ScoreLine::new(home, away));
        game
    }

    fn pending(id: &str) -> Match {
        Match::scheduled(id, "Home", "Away", at(20, 18))
    }

    fn predict(user: &str, id: &str, home: i32, away: i32) -> Prediction {
        Prediction::new(user, id, ScoreLine::new(home, away), at(10, 12))
    }

    #[test]
    fn test_sums_points_per_user_and_sorts_descending() {
        let matches = vec![finished("1", 2, 1), finished("2", 0, 0)];
        let predictions = vec![
            predict("alice", "1", 1, 0),
            predict("bob", "1", 2, 1),
            predict("alice", "2", 0, 0),
            predict("bob", "2", 1, 2),
        ];

        let board = compute_leaderboard(&predictions, &matches);

        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    user_id: "alice".to_string(),
                    points: 6
                },
                LeaderboardEntry {
                    user_id: "bob".to_string(),
                    points: 4
                },
            ]
        );
    }

    #[test]
    fn test_omits_users_without_scoreable_predictions() {
        let matches = vec![finished("1", 1, 0), pending("2")];
        let predictions = vec![
            predict("waiting", "2", 3, 3),
            predict("scored", "1", 0, 2),
        ];

        let board = compute_leaderboard(&predictions, &matches);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, "scored");
        assert_eq!(board[0].points, 0);
    }

    #[test]
    fn test_skips_predictions_for_unknown_matches() {
        let matches = vec![finished("1", 1, 0)];
        let predictions = vec![predict("ghost", "99", 1, 0)];

        assert!(compute_leaderboard(&predictions, &matches).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let matches = vec![finished("1", 1, 1)];
        let predictions = vec![
            predict("carol", "1", 0, 0),
            predict("alice", "1", 2, 2),
            predict("bob", "1", 1, 1),
        ];

        let order: Vec<String> = compute_leaderboard(&predictions, &matches)
            .into_iter()
            .map(|entry| entry.user_id)
            .collect();

        assert_eq!(order, vec!["bob", "carol", "alice"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_leaderboard(&[], &[]).is_empty());
        assert!(compute_leaderboard(&[], &[finished("1", 0, 0)]).is_empty());
    }
}
