use serde::Serialize;

use crate::models::{Modality, SearchStatus};

/// Selectable terms, newest first.
pub const TERMS: &[(&str, i32)] = &[
    ("Summer 2024", 2244),
    ("Spring 2024", 2242),
    ("Winter 2024", 2240),
    ("Fall 2023", 2238),
    ("Summer 2023", 2234),
    ("Spring 2023", 2232),
    ("Winter 2023", 2230),
    ("Fall 2022", 2228),
    ("Summer 2022", 2224),
];

pub const GEN_EDS: &[&str] = &["CC", "ER", "IM", "MF", "SI", "SR", "TA", "PE", "PR", "C"];

/// Department codes a search token may resolve to.
pub const DEPARTMENTS: &[&str] = &[
    "ACEN", "AM", "ANTH", "APLX", "ARBC", "ART", "ARTG", "ASTR", "BIOC", "BIOE", "BIOL", "BME",
    "CHEM", "CHIN", "CLNI", "CLST", "CMMU", "CMPM", "COWL", "CRES", "CRSN", "CRWN", "CSE", "CSP",
    "DANM", "EART", "ECE", "ECON", "EDUC", "ENVS", "ESCI", "FILM", "FMST", "FREN", "GAME", "GCH",
    "GERM", "GIST", "GRAD", "GREE", "HAVC", "HEBR", "HIS", "HISC", "HUMN", "ITAL", "JAPN", "JRLC",
    "KRSG", "LAAD", "LALS", "LATN", "LGST", "LING", "LIT", "MATH", "MERR", "METX", "MUSC", "NLP",
    "OAKS", "OCEA", "PBS", "PERS", "PHIL", "PHYE", "PHYS", "POLI", "PORT", "PRTR", "PSYC", "RUSS",
    "SCIC", "SOCD", "SOCY", "SPAN", "SPHS", "STAT", "STEV", "THEA", "TIM", "UCDC", "VAST", "WRIT",
    "YIDD",
];

pub fn default_term() -> i32 {
    TERMS[0].1
}

pub fn term_label(code: i32) -> Option<&'static str> {
    TERMS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| *label)
}

#[derive(Debug, Serialize)]
pub struct TermOption {
    pub label: &'static str,
    pub code: i32,
}

#[derive(Debug, Serialize)]
pub struct ModalityOption {
    pub label: &'static str,
    pub value: Modality,
}

/// Everything a search form needs to render its pickers.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub terms: Vec<TermOption>,
    pub gen_eds: Vec<&'static str>,
    pub modalities: Vec<ModalityOption>,
    pub statuses: Vec<&'static str>,
    pub departments: Vec<&'static str>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            terms: TERMS
                .iter()
                .map(|&(label, code)| TermOption { label, code })
                .collect(),
            gen_eds: GEN_EDS.to_vec(),
            modalities: Modality::ALL
                .iter()
                .map(|&m| ModalityOption { label: m.label(), value: m })
                .collect(),
            statuses: vec![SearchStatus::Open.label(), SearchStatus::All.label()],
            departments: DEPARTMENTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_term_is_default() {
        assert_eq!(default_term(), 2244);
        assert_eq!(term_label(2238), Some("Fall 2023"));
        assert_eq!(term_label(1999), None);
    }

    #[test]
    fn departments_are_uppercase_codes() {
        for dept in DEPARTMENTS {
            assert!((2..=4).contains(&dept.len()), "{dept}");
            assert!(dept.chars().all(|c| c.is_ascii_uppercase()), "{dept}");
        }
    }
}
