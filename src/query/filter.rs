use serde::{Deserialize, Serialize};

use super::catalog;
use super::interpreter::{Interpretation, interpret};
use crate::models::{Modality, SearchStatus};

/// Wire value for "no course number".
pub const NO_COURSE_NUMBER: i32 = -1;

/// Facets chosen on the search form, before the text is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub term: i32,
    pub query: String,
    pub modalities: Vec<Modality>,
    pub gen_eds: Vec<String>,
    pub status: SearchStatus,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            term: catalog::default_term(),
            query: String::new(),
            modalities: Modality::ALL.to_vec(),
            gen_eds: Vec::new(),
            status: SearchStatus::All,
        }
    }
}

impl SearchRequest {
    pub fn to_filter(&self) -> SearchFilter {
        SearchFilter::build(&interpret(&self.query), self)
    }
}

/// Normalized parameters for the remote search function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    pub term: i32,
    pub department: String,
    pub course_number: i32,
    pub course_letter: String,
    pub query: String,
    pub asynchronous: bool,
    pub hybrid: bool,
    pub synchronous: bool,
    pub in_person: bool,
    pub ge: Vec<String>,
    pub search_type: SearchStatus,
}

impl SearchFilter {
    pub fn build(interpretation: &Interpretation, request: &SearchRequest) -> Self {
        let (course_number, course_letter) = match &interpretation.course {
            Some(c) => (c.number, c.letter.clone()),
            None => (NO_COURSE_NUMBER, String::new()),
        };
        let has = |m: Modality| request.modalities.contains(&m);

        Self {
            term: request.term,
            department: interpretation.department.clone().unwrap_or_default(),
            course_number,
            course_letter,
            query: interpretation.free_text.clone().unwrap_or_default(),
            asynchronous: has(Modality::AsyncOnline),
            hybrid: has(Modality::Hybrid),
            synchronous: has(Modality::SyncOnline),
            in_person: has(Modality::InPerson),
            ge: request.gen_eds.clone(),
            search_type: request.status,
        }
    }

    pub fn open_only(&self) -> bool {
        self.search_type.is_open_only()
    }
}
