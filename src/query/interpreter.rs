use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::catalog::DEPARTMENTS;

static DEPARTMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,4}$").expect("valid department pattern"));

static COURSE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}[a-zA-Z]?$").expect("valid course number pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNumber {
    pub number: i32,
    /// Letter suffix as typed, empty when absent.
    pub letter: String,
}

/// How a raw search string will be applied to a search.
///
/// `department` and `course` may both be set for two-token input such as
/// `"CSE 101"`. `free_text` is set only when neither structured rule matched,
/// and then carries the original input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Interpretation {
    pub department: Option<String>,
    pub course: Option<CourseNumber>,
    pub free_text: Option<String>,
}

impl Interpretation {
    pub fn is_structured(&self) -> bool {
        self.department.is_some() || self.course.is_some()
    }
}

/// Interprets `raw` against the built-in department list.
pub fn interpret(raw: &str) -> Interpretation {
    interpret_with(raw, DEPARTMENTS)
}

pub fn interpret_with(raw: &str, departments: &[&str]) -> Interpretation {
    let (department_token, course_token) = match raw.split_once(' ') {
        Some((before, after)) => (before, after),
        None => (raw, raw),
    };

    let department = match_department(department_token, departments);
    let course = match_course_number(course_token);

    let free_text = if department.is_none() && course.is_none() {
        Some(raw.to_string())
    } else {
        None
    };

    let interpretation = Interpretation { department, course, free_text };
    debug!("interpreted {:?} as {:?}", raw, interpretation);
    interpretation
}

fn match_department(token: &str, departments: &[&str]) -> Option<String> {
    if !DEPARTMENT_PATTERN.is_match(token) {
        return None;
    }
    let upper = token.to_uppercase();
    departments.contains(&upper.as_str()).then_some(upper)
}

fn match_course_number(token: &str) -> Option<CourseNumber> {
    if !COURSE_NUMBER_PATTERN.is_match(token) {
        return None;
    }
    let number = token
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse::<i32>()
        .ok()?;
    let letter = token.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    Some(CourseNumber { number, letter })
}
