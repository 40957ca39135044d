use crate::models::{Match, Prediction, ScoreLine};

/// Awarded for each side whose predicted goals equal the recorded goals.
pub const EXACT_SIDE_POINTS: u32 = 1;
/// Awarded when the predicted outcome category equals the recorded one.
pub const OUTCOME_POINTS: u32 = 2;
pub const MAX_POINTS: u32 = 2 * EXACT_SIDE_POINTS + OUTCOME_POINTS;

/// Points for a predicted score line against a recorded one.
///
/// Only exact goal counts earn the per-side point; there is no credit for being
/// close. The result is always one of 0, 1, 2, 3 or 4.
pub fn points_for(predicted: ScoreLine, actual: ScoreLine) -> u32 {
    let mut points = 0;

    if predicted.home == actual.home {
        points += EXACT_SIDE_POINTS;
    }
    if predicted.away == actual.away {
        points += EXACT_SIDE_POINTS;
    }
    if predicted.outcome() == actual.outcome() {
        points += OUTCOME_POINTS;
    }

    points
}

/// Points earned by `prediction` on `game`. A match without a complete recorded
/// result is not scoreable yet and yields 0.
pub fn score(prediction: &Prediction, game: &Match) -> u32 {
    game.result()
        .map(|actual| points_for(prediction.score_line(), actual))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn line(home: i32, away: i32) -> ScoreLine {
        ScoreLine::new(home, away)
    }

    fn grid() -> impl Iterator<Item = ScoreLine> {
        (0..=5).flat_map(|home| (0..=5).map(move |away| line(home, away)))
    }

    #[test]
    fn test_exact_score_earns_maximum() {
        assert_eq!(points_for(line(2, 1), line(2, 1)), 4);
        assert_eq!(points_for(line(0, 0), line(0, 0)), MAX_POINTS);
    }

    #[test]
    fn test_correct_outcome_only() {
        assert_eq!(points_for(line(2, 1), line(3, 0)), 2);
        assert_eq!(points_for(line(1, 1), line(2, 2)), 2);
    }

    #[test]
    fn test_wrong_outcome_no_digits() {
        assert_eq!(points_for(line(2, 0), line(0, 2)), 0);
    }

    #[test]
    fn test_one_side_exact_wrong_outcome() {
        assert_eq!(points_for(line(1, 0), line(1, 1)), 1);
    }

    #[test]
    fn test_one_side_exact_right_outcome() {
        assert_eq!(points_for(line(3, 1), line(3, 0)), 3);
    }

    #[test]
    fn test_goal_difference_earns_nothing_extra() {
        assert_eq!(points_for(line(2, 1), line(4, 3)), 2);
    }

    #[test]
    fn test_points_stay_in_range_and_four_means_exact() {
        for predicted in grid() {
            for actual in grid() {
                let points = points_for(predicted, actual);
                assert!(points <= MAX_POINTS, "{predicted:?} vs {actual:?}");
                assert_eq!(points == MAX_POINTS, predicted == actual);
            }
        }
    }

    #[test]
    fn test_symmetric_under_label_swap() {
        for predicted in grid() {
            for actual in grid() {
                assert_eq!(
                    points_for(predicted, actual),
                    points_for(predicted.swapped(), actual.swapped()),
                    "{predicted:?} vs {actual:?}"
                );
            }
        }
    }

    #[test]
    fn test_score_is_zero_without_result() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let mut game = Match::scheduled("2", "Spain", "Croatia", date);
        let prediction = Prediction::new("Player 1", "2", line(3, 0), date);

        assert_eq!(score(&prediction, &game), 0);

        game.home_score = Some(3);
        assert_eq!(score(&prediction, &game), 0);

        game.away_score = Some(0);
        assert_eq!(score(&prediction, &game), 4);
    }
}
