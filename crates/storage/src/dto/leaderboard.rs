use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's summed points across all of their scoreable predictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub points: u32,
}
