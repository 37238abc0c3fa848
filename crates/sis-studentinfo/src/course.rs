//! Course identity

use serde::{Deserialize, Serialize};

/// A course in the catalog, identified by department and number.
///
/// Field order matters: the derived ordering compares the department first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Course {
    /// Department code, e.g. "ENGL"
    pub department: String,
    /// Course number within the department, e.g. "101"
    pub number: String,
}

impl Course {
    pub fn new(department: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            number: number.into(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course() {
        let course = Course::new("ENGL", "101");
        assert_eq!(course.department(), "ENGL");
        assert_eq!(course.number(), "101");
        assert_eq!(course.to_string(), "ENGL 101");
    }

    #[test]
    fn test_ordering_department_first() {
        let cmsc_210 = Course::new("CMSC", "210");
        let engl_101 = Course::new("ENGL", "101");
        assert!(cmsc_210 < engl_101);
        assert!(Course::new("CMSC", "101") < cmsc_210);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Course::new("MATH", "300")).unwrap();
        assert_eq!(json["department"], "MATH");
        assert_eq!(json["number"], "300");
    }
}
