//! Session length policies
//!
//! A session variant decides how many weeks it runs. The session derives
//! its end date from that number.

use std::fmt::Debug;

/// Length of a session in weeks.
pub trait SessionLength: Debug + Send + Sync {
    fn weeks(&self) -> u32;
}

/// Regular fall/spring term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Semester;

impl Semester {
    pub const WEEKS: u32 = 16;
}

impl SessionLength for Semester {
    fn weeks(&self) -> u32 {
        Self::WEEKS
    }
}

/// Compressed summer term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummerTerm;

impl SummerTerm {
    pub const WEEKS: u32 = 8;
}

impl SessionLength for SummerTerm {
    fn weeks(&self) -> u32 {
        Self::WEEKS
    }
}

/// Fixed number of weeks, for sessions that follow neither calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weeks(pub u32);

impl SessionLength for Weeks {
    fn weeks(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(Semester.weeks(), 16);
        assert_eq!(SummerTerm.weeks(), 8);
        assert_eq!(Weeks(3).weeks(), 3);
    }
}
