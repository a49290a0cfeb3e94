#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slug_courses::error::AppError;
use slug_courses::models::{Course, CourseInfo, PrimarySection};
use slug_courses::query::SearchFilter;
use slug_courses::remote::CourseSource;

pub fn course(id: &str, short_name: &str) -> Course {
    let (term, _) = id.split_once('_').unwrap();
    Course {
        id: id.to_string(),
        term: term.parse().unwrap(),
        department: "CSE".to_string(),
        course_number: 101,
        course_letter: String::new(),
        section_number: "01".to_string(),
        short_name: short_name.to_string(),
        name: String::new(),
        instructor: "Staff".to_string(),
        location: "Baskin Auditorium 101".to_string(),
        time: "MWF 09:20AM-10:25AM".to_string(),
        alt_location: "None".to_string(),
        alt_time: "None".to_string(),
        enrolled: "120/150".to_string(),
        status: "Open".to_string(),
        gen_ed: String::new(),
        url: String::new(),
    }
}

/// Serves a fixed list and records every search filter it receives.
#[derive(Default)]
pub struct StubCourses {
    pub courses: Vec<Course>,
    pub filters: Mutex<Vec<SearchFilter>>,
}

impl StubCourses {
    pub fn new(courses: Vec<Course>) -> Arc<Self> {
        Arc::new(Self {
            courses,
            filters: Mutex::new(Vec::new()),
        })
    }

    pub fn last_filter(&self) -> Option<SearchFilter> {
        self.filters.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CourseSource for StubCourses {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Course>, AppError> {
        self.filters.lock().unwrap().push(filter.clone());
        Ok(self.courses.clone())
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, AppError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn course_info(&self, term: i32, class_number: &str) -> Result<CourseInfo, AppError> {
        let id = format!("{}_{}", term, class_number);
        let course = self
            .courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;
        Ok(CourseInfo {
            primary_section: PrimarySection {
                strm: term.to_string(),
                class_nbr: class_number.to_string(),
                title: course.short_name.clone(),
                ..PrimarySection::default()
            },
            ..CourseInfo::default()
        })
    }
}

#[derive(Clone, Copy)]
pub enum Failure {
    Offline,
    Timeout,
    BadRequest,
    Other,
}

/// Every call fails the same way.
pub struct FailingCourses(pub Failure);

impl FailingCourses {
    fn error(&self) -> AppError {
        match self.0 {
            Failure::Offline => AppError::Connectivity("dns error".to_string()),
            Failure::Timeout => AppError::Timeout,
            Failure::BadRequest => AppError::BadRequest("column does not exist".to_string()),
            Failure::Other => AppError::Remote("upstream exploded".to_string()),
        }
    }
}

#[async_trait]
impl CourseSource for FailingCourses {
    async fn search(&self, _filter: &SearchFilter) -> Result<Vec<Course>, AppError> {
        Err(self.error())
    }

    async fn fetch_by_ids(&self, _ids: &[String]) -> Result<Vec<Course>, AppError> {
        Err(self.error())
    }

    async fn course_info(&self, _term: i32, _class_number: &str) -> Result<CourseInfo, AppError> {
        Err(self.error())
    }
}

/// Never answers.
pub struct PendingCourses;

#[async_trait]
impl CourseSource for PendingCourses {
    async fn search(&self, _filter: &SearchFilter) -> Result<Vec<Course>, AppError> {
        std::future::pending().await
    }

    async fn fetch_by_ids(&self, _ids: &[String]) -> Result<Vec<Course>, AppError> {
        std::future::pending().await
    }

    async fn course_info(&self, _term: i32, _class_number: &str) -> Result<CourseInfo, AppError> {
        std::future::pending().await
    }
}
