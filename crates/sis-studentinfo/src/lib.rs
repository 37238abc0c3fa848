//! SIS Student Information
//!
//! A session is one scheduled offering of a course:
//! - Identity is the course (department code + course number) and start date
//! - Students are enrolled in order and never removed
//! - Enrolling credits the student with the session's credit hours
//! - The session length in weeks is supplied by the session variant

pub mod date;
mod course;
mod error;
mod length;
mod session;
mod session_url;
mod student;

pub use course::Course;
pub use error::{MalformedUrl, SessionError, StudentError};
pub use length::{Semester, SessionLength, SummerTerm, Weeks};
pub use session::Session;
pub use session_url::SessionUrl;
pub use student::{Grade, GradingStrategy, SharedStudent, Student};

pub type Result<T> = std::result::Result<T, SessionError>;
