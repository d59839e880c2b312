//! Review status codes and their verdict sentences.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A review status code known to the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as sent by the API.
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| AppError::unknown_status(s))
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed mapping from status to the sentence shown in chat.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerdictTable;

impl VerdictTable {
    pub fn verdict(&self, status: HomeworkStatus) -> &'static str {
        match status {
            HomeworkStatus::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken for review.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has remarks.",
        }
    }

    /// Look up a raw status code.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        code.parse().ok().map(|status| self.verdict(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.code().parse::<HomeworkStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = "unknown".parse::<HomeworkStatus>().unwrap_err();
        assert!(matches!(err, AppError::UnknownStatus(ref s) if s == "unknown"));
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let table = VerdictTable;
        let approved = table.lookup("approved").unwrap();
        let reviewing = table.lookup("reviewing").unwrap();
        let rejected = table.lookup("rejected").unwrap();
        assert_ne!(approved, reviewing);
        assert_ne!(approved, rejected);
        assert_ne!(reviewing, rejected);
        assert_eq!(table.lookup("graded"), None);
    }
}
