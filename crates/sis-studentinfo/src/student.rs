//! Student data structure

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::StudentError;

/// Handle to a student shared between the caller and every session roster
/// the student is enrolled in.
pub type SharedStudent = Arc<RwLock<Student>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn points(&self) -> u32 {
        match self {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::F => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingStrategy {
    #[default]
    Regular,
    /// One bonus point for every passing grade
    Honors,
}

impl GradingStrategy {
    pub fn points_for(&self, grade: Grade) -> u32 {
        let points = grade.points();
        match self {
            GradingStrategy::Regular => points,
            GradingStrategy::Honors if points > 0 => points + 1,
            GradingStrategy::Honors => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    first_name: String,
    middle_name: String,
    last_name: String,
    credit_hours: i32,
    grades: Vec<Grade>,
    grading_strategy: GradingStrategy,
    state: Option<String>,
}

impl Student {
    /// Credit hours at which a student counts as full-time
    pub const MIN_FULL_TIME_CREDITS: i32 = 12;
    pub const MAX_NAME_PARTS: usize = 3;
    pub const IN_STATE: &'static str = "CO";

    /// Create a student from a full name of up to three whitespace-separated
    /// parts. A single part is taken as the last name.
    pub fn new(full_name: impl Into<String>) -> Result<Self, StudentError> {
        let name = full_name.into();
        let mut parts: Vec<&str> = name.split_whitespace().collect();

        if parts.len() > Self::MAX_NAME_PARTS {
            let err = StudentError::NameFormat {
                name: name.clone(),
                parts: parts.len(),
                max: Self::MAX_NAME_PARTS,
            };
            tracing::warn!(error = %err, "Rejected student name");
            return Err(err);
        }

        let last_name = parts.pop().unwrap_or_default().to_string();
        let next = parts.pop().unwrap_or_default().to_string();
        let (first_name, middle_name) = match parts.pop() {
            Some(first) => (first.to_string(), next),
            None => (next, String::new()),
        };

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            first_name,
            middle_name,
            last_name,
            credit_hours: 0,
            grades: Vec::new(),
            grading_strategy: GradingStrategy::default(),
            state: None,
        })
    }

    /// Wrap into a handle that can be enrolled in sessions
    pub fn into_shared(self) -> SharedStudent {
        Arc::new(RwLock::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn credit_hours(&self) -> i32 {
        self.credit_hours
    }

    pub fn add_credit_hours(&mut self, credits: i32) {
        self.credit_hours += credits;
    }

    pub fn is_full_time(&self) -> bool {
        self.credit_hours >= Self::MIN_FULL_TIME_CREDITS
    }

    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn grading_strategy(&self) -> GradingStrategy {
        self.grading_strategy
    }

    pub fn set_grading_strategy(&mut self, strategy: GradingStrategy) {
        self.grading_strategy = strategy;
    }

    /// Grade point average, 0.0 when no grades are recorded
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }

        let total: u32 = self
            .grades
            .iter()
            .map(|grade| self.grading_strategy.points_for(*grade))
            .sum();
        f64::from(total) / self.grades.len() as f64
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    pub fn is_in_state(&self) -> bool {
        self.state
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(Self::IN_STATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        let student = Student::new("Jane Doe").unwrap();
        assert_eq!(student.name(), "Jane Doe");
        assert_eq!(student.first_name(), "Jane");
        assert_eq!(student.middle_name(), "");
        assert_eq!(student.last_name(), "Doe");

        let student = Student::new("Raymond Douglas Davies").unwrap();
        assert_eq!(student.first_name(), "Raymond");
        assert_eq!(student.middle_name(), "Douglas");
        assert_eq!(student.last_name(), "Davies");

        let student = Student::new("Blow").unwrap();
        assert_eq!(student.first_name(), "");
        assert_eq!(student.middle_name(), "");
        assert_eq!(student.last_name(), "Blow");
    }

    #[test]
    fn test_too_many_name_parts() {
        let err = Student::new("Thelonious Sphere Monk Jr").unwrap_err();
        assert_eq!(
            err,
            StudentError::NameFormat {
                name: "Thelonious Sphere Monk Jr".to_string(),
                parts: 4,
                max: 3,
            }
        );
    }

    #[test]
    fn test_full_time_threshold() {
        let mut student = Student::new("a").unwrap();
        assert_eq!(student.credit_hours(), 0);
        assert!(!student.is_full_time());

        student.add_credit_hours(3);
        student.add_credit_hours(4);
        assert_eq!(student.credit_hours(), 7);
        assert!(!student.is_full_time());

        student.add_credit_hours(5);
        assert_eq!(student.credit_hours(), Student::MIN_FULL_TIME_CREDITS);
        assert!(student.is_full_time());
    }

    #[test]
    fn test_gpa() {
        let mut student = Student::new("a").unwrap();
        assert_eq!(student.gpa(), 0.0);

        student.add_grade(Grade::A);
        assert!((student.gpa() - 4.0).abs() < 0.05);
        student.add_grade(Grade::B);
        assert!((student.gpa() - 3.5).abs() < 0.05);
        student.add_grade(Grade::C);
        student.add_grade(Grade::D);
        student.add_grade(Grade::F);
        assert!((student.gpa() - 2.0).abs() < 0.05);
    }

    #[test]
    fn test_honors_gpa() {
        let mut student = Student::new("a").unwrap();
        student.set_grading_strategy(GradingStrategy::Honors);

        student.add_grade(Grade::A);
        assert!((student.gpa() - 5.0).abs() < 0.05);
        student.add_grade(Grade::F);
        assert!((student.gpa() - 2.5).abs() < 0.05);
    }

    #[test]
    fn test_in_state() {
        let mut student = Student::new("a").unwrap();
        assert!(!student.is_in_state());

        student.set_state("MD");
        assert!(!student.is_in_state());

        student.set_state("co");
        assert!(student.is_in_state());
    }

    #[test]
    fn test_unique_ids() {
        let first = Student::new("a").unwrap();
        let second = Student::new("a").unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_serialize() {
        let mut student = Student::new("Jane Doe").unwrap();
        student.add_grade(Grade::B);

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["last_name"], "Doe");
        assert_eq!(json["grades"][0], "B");
        assert_eq!(json["grading_strategy"], "regular");
    }
}
