//! Session data structure
//!
//! A session owns its roster and credit configuration. Sessions compare by
//! course only, department first, so they sort the way a schedule is printed.

use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;

use crate::course::Course;
use crate::error::SessionError;
use crate::length::{Semester, SessionLength, SummerTerm};
use crate::session_url::SessionUrl;
use crate::student::SharedStudent;
use crate::Result;

#[derive(Debug)]
pub struct Session {
    course: Course,
    start_date: NaiveDate,
    /// Credits granted to each student at enrollment
    number_of_credits: i32,
    /// Enrollment order is preserved
    students: Vec<SharedStudent>,
    url: Option<SessionUrl>,
    length: Box<dyn SessionLength>,
}

impl Session {
    pub fn new(
        course: Course,
        start_date: NaiveDate,
        length: impl SessionLength + 'static,
    ) -> Self {
        Self {
            course,
            start_date,
            number_of_credits: 0,
            students: Vec::new(),
            url: None,
            length: Box::new(length),
        }
    }

    /// A regular 16 week term
    pub fn semester(course: Course, start_date: NaiveDate) -> Self {
        Self::new(course, start_date, Semester)
    }

    /// An 8 week summer term
    pub fn summer(course: Course, start_date: NaiveDate) -> Self {
        Self::new(course, start_date, SummerTerm)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn department_code(&self) -> &str {
        &self.course.department
    }

    pub fn course_number(&self) -> &str {
        &self.course.number
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn number_of_credits(&self) -> i32 {
        self.number_of_credits
    }

    /// Set the credits granted on enrollment. Meant for the enrollment
    /// coordinator; students already enrolled are not adjusted.
    pub fn set_number_of_credits(&mut self, credits: i32) {
        self.number_of_credits = credits;
    }

    /// Add a student to the roster, crediting them with this session's hours
    pub fn enroll(&mut self, student: SharedStudent) {
        {
            let mut enrolled = student.write();
            enrolled.add_credit_hours(self.number_of_credits);

            tracing::debug!(
                course = %self.course,
                student_id = %enrolled.id(),
                credits = self.number_of_credits,
                "Enrolled student"
            );
        }

        self.students.push(student);
    }

    pub fn number_of_students(&self) -> usize {
        self.students.len()
    }

    pub fn student(&self, index: usize) -> Result<&SharedStudent> {
        self.students
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.students.len(),
            })
    }

    /// The live roster, in enrollment order
    pub fn all_students(&self) -> &[SharedStudent] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedStudent> {
        self.students.iter()
    }

    /// Length in weeks, as decided by the session variant
    pub fn session_length(&self) -> u32 {
        self.length.weeks()
    }

    /// The session ends three days short of its last full week.
    ///
    /// Saturates at `NaiveDate::MAX` (or `NaiveDate::MIN`) when the end date
    /// falls outside the representable range.
    pub fn end_date(&self) -> NaiveDate {
        let days = i64::from(self.session_length()) * 7 - 3;
        self.start_date
            .checked_add_signed(Duration::days(days))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    }

    /// Mean GPA of the students that are not full-time, 0.0 if there are none
    pub fn average_gpa_for_part_time_students(&self) -> f64 {
        let (total, count) = self
            .students
            .iter()
            .map(|student| student.read())
            .filter(|student| !student.is_full_time())
            .fold((0.0, 0usize), |(total, count), student| {
                (total + student.gpa(), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }

    /// Validate and store the session's reference URL. On failure the
    /// current URL is kept.
    pub fn set_url(&mut self, url: &str) -> Result<()> {
        match SessionUrl::parse(url) {
            Ok(parsed) => {
                self.url = Some(parsed);
                Ok(())
            }
            Err(source) => {
                let err = SessionError::InvalidUrl {
                    url: url.to_string(),
                    source,
                };
                self.log(&err);
                Err(err)
            }
        }
    }

    pub fn url(&self) -> Option<&SessionUrl> {
        self.url.as_ref()
    }

    /// Log an error together with its chain of causes
    fn log(&self, err: &dyn std::error::Error) {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        tracing::error!(
            course = %self.course,
            error = %err,
            causes = ?causes,
            "Session operation failed"
        );
    }
}

impl<'a> IntoIterator for &'a Session {
    type Item = &'a SharedStudent;
    type IntoIter = std::slice::Iter<'a, SharedStudent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.course == other.course
    }
}

impl Eq for Session {}

impl PartialOrd for Session {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Session {
    fn cmp(&self, other: &Self) -> Ordering {
        self.department_code()
            .cmp(other.department_code())
            .then_with(|| self.course_number().cmp(other.course_number()))
    }
}
