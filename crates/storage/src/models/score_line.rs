use std::cmp::Ordering;

/// Outcome category of a score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// A home/away score pair, either predicted or recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine {
    pub home: i32,
    pub away: i32,
}

impl ScoreLine {
    pub fn new(home: i32, away: i32) -> Self {
        Self { home, away }
    }

    /// The outcome is decided by the pair's own halves only.
    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Same result seen with the home and away labels exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }
}
