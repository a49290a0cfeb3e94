use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: String,
    pub created_at: String,
}

/// Result of flipping a course's favorite membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub id: String,
    pub favorited: bool,
    pub message: String,
}
