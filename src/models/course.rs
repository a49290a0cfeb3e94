use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single section row as returned by the course search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// `<term>_<class number>`
    pub id: String,
    pub term: i32,
    pub department: String,
    pub course_number: i32,
    #[serde(default)]
    pub course_letter: String,
    pub section_number: String,
    pub short_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time: String,
    #[serde(default = "none_string")]
    pub alt_location: String,
    #[serde(default = "none_string")]
    pub alt_time: String,
    #[serde(default)]
    pub enrolled: String,
    pub status: String,
    #[serde(default)]
    pub gen_ed: String,
    #[serde(default)]
    pub url: String,
}

fn none_string() -> String {
    "None".to_string()
}

impl Course {
    pub fn status(&self) -> CourseStatus {
        CourseStatus::from_label(&self.status)
    }

    /// The per-term class number, i.e. the part of the id after `_`.
    pub fn class_number(&self) -> &str {
        self.id
            .split_once('_')
            .map(|(_, nbr)| nbr)
            .unwrap_or(&self.id)
    }

    /// Display heading, e.g. `CSE 101A - 01: Algorithms`.
    pub fn heading(&self) -> String {
        format!(
            "{} {}{} - {}: {}",
            self.department, self.course_number, self.course_letter, self.section_number, self.short_name
        )
    }

    pub fn alt_location(&self) -> Option<&str> {
        (self.alt_location != "None").then_some(self.alt_location.as_str())
    }

    pub fn alt_time(&self) -> Option<&str> {
        (self.alt_time != "None").then_some(self.alt_time.as_str())
    }

    pub fn is_online(&self) -> bool {
        self.location.contains("Online") || self.location.contains("Remote Instruction")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    Open,
    Closed,
    WaitList,
}

impl CourseStatus {
    /// Unrecognized labels are shown as closed.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Open" => CourseStatus::Open,
            "Wait List" => CourseStatus::WaitList,
            _ => CourseStatus::Closed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Open => "Open",
            CourseStatus::Closed => "Closed",
            CourseStatus::WaitList => "Wait List",
        }
    }
}

/// Course delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Hybrid,
    AsyncOnline,
    SyncOnline,
    InPerson,
}

impl Modality {
    pub const ALL: [Modality; 4] = [
        Modality::Hybrid,
        Modality::AsyncOnline,
        Modality::SyncOnline,
        Modality::InPerson,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Modality::Hybrid => "Hybrid",
            Modality::AsyncOnline => "Async Online",
            Modality::SyncOnline => "Sync Online",
            Modality::InPerson => "In Person",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Modality {
    type Err = String;

    /// Accepts display labels ("Async Online") as well as wire names
    /// ("ASYNC_ONLINE", "async_online").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace([' ', '-'], "_").to_uppercase().as_str() {
            "HYBRID" => Ok(Modality::Hybrid),
            "ASYNC_ONLINE" => Ok(Modality::AsyncOnline),
            "SYNC_ONLINE" => Ok(Modality::SyncOnline),
            "IN_PERSON" => Ok(Modality::InPerson),
            _ => Err(format!("unknown class type: {}", s)),
        }
    }
}

/// Open-only vs. all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStatus {
    Open,
    #[default]
    All,
}

impl SearchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SearchStatus::Open => "Open",
            SearchStatus::All => "All",
        }
    }

    pub fn is_open_only(&self) -> bool {
        matches!(self, SearchStatus::Open)
    }
}

impl FromStr for SearchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(SearchStatus::Open),
            "all" => Ok(SearchStatus::All),
            _ => Err(format!("unknown status: {}", s)),
        }
    }
}

/// A course paired with whether its id is in the local favorites set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedCourse {
    #[serde(flatten)]
    pub course: Course,
    pub is_favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        serde_json::from_value(serde_json::json!({
            "id": "2244_30123",
            "term": 2244,
            "department": "CSE",
            "course_number": 12,
            "course_letter": "L",
            "section_number": "01",
            "short_name": "Computer Systems Lab",
            "location": "Remote Instruction",
            "status": "Wait List"
        }))
        .unwrap()
    }

    #[test]
    fn derived_fields() {
        let course = sample();
        assert_eq!(course.class_number(), "30123");
        assert_eq!(course.heading(), "CSE 12L - 01: Computer Systems Lab");
        assert_eq!(course.status(), CourseStatus::WaitList);
        assert!(course.is_online());
        // absent alternates default to the "None" marker
        assert_eq!(course.alt_location(), None);
        assert_eq!(course.alt_time(), None);
    }

    #[test]
    fn unknown_status_displays_as_closed() {
        assert_eq!(CourseStatus::from_label("Cancelled"), CourseStatus::Closed);
        assert_eq!(CourseStatus::from_label("Open").label(), "Open");
    }

    #[test]
    fn modality_accepts_labels_and_wire_names() {
        assert_eq!("Async Online".parse::<Modality>(), Ok(Modality::AsyncOnline));
        assert_eq!("in_person".parse::<Modality>(), Ok(Modality::InPerson));
        assert_eq!("SYNC_ONLINE".parse::<Modality>(), Ok(Modality::SyncOnline));
        assert!("carrier pigeon".parse::<Modality>().is_err());
        assert_eq!(
            serde_json::to_value(Modality::AsyncOnline).unwrap(),
            serde_json::json!("ASYNC_ONLINE")
        );
    }

    #[test]
    fn search_status_parsing() {
        assert_eq!("Open".parse::<SearchStatus>(), Ok(SearchStatus::Open));
        assert_eq!("all".parse::<SearchStatus>(), Ok(SearchStatus::All));
        assert!("closed".parse::<SearchStatus>().is_err());
    }
}
