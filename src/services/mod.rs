pub mod favorites;
pub mod feedback;
pub mod search;

pub use favorites::{annotate, toggle_favorite};
pub use feedback::FetchTarget;
pub use search::{favorite_courses, search_courses};
