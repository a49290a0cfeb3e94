//! Search-text interpretation and remote filter construction.

pub mod catalog;
pub mod filter;
pub mod interpreter;

pub use catalog::Catalog;
pub use filter::{NO_COURSE_NUMBER, SearchFilter, SearchRequest};
pub use interpreter::{CourseNumber, Interpretation, interpret, interpret_with};
