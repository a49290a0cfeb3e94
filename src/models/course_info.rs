use serde::{Deserialize, Serialize};

/// Section detail as served by the class-detail endpoint. Numeric counts
/// arrive as strings there and are kept that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInfo {
    pub primary_section: PrimarySection,
    pub meetings: Vec<Meeting>,
    pub secondary_sections: Vec<SecondarySection>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimarySection {
    pub strm: String,
    pub class_nbr: String,
    pub class_section: String,
    pub component: String,
    pub subject: String,
    pub catalog_nbr: String,
    pub display_name: String,
    pub title: String,
    pub title_long: String,
    pub description: String,
    pub credits: String,
    pub gened: String,
    pub requirements: String,
    pub enrl_status: String,
    pub enrl_total: String,
    pub enrl_capacity: String,
    pub waitlist_total: String,
    pub waitlist_capacity: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meeting {
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub instructors: Vec<Instructor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instructor {
    pub cruzid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondarySection {
    pub class_nbr: String,
    pub class_section: String,
    pub component: String,
    pub enrl_status: String,
    pub enrl_total: String,
    pub enrl_capacity: String,
    pub waitlist_total: String,
    pub waitlist_capacity: String,
    pub meetings: Vec<Meeting>,
}

impl CourseInfo {
    pub fn is_loaded(&self) -> bool {
        !self.primary_section.class_nbr.is_empty()
    }
}
