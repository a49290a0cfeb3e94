pub mod course;
pub mod course_info;
pub mod favorite;

pub use course::{AnnotatedCourse, Course, CourseStatus, Modality, SearchStatus};
pub use course_info::{CourseInfo, Meeting, PrimarySection, SecondarySection};
pub use favorite::{Favorite, FavoriteToggle};
