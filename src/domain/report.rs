// SPDX-License-Identifier: MPL-2.0
//! Downloadable reports and the date window used to filter them.

use chrono::NaiveDate;
use std::fmt;

/// Identifier of a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportId(pub u32);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing status of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Processed,
    Pending,
    Failed,
}

impl ReportStatus {
    /// Returns the i18n message key for the status tag.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ReportStatus::Processed => "status-processed",
            ReportStatus::Pending => "status-pending",
            ReportStatus::Failed => "status-failed",
        }
    }
}

/// A report row in a group's listing.
///
/// The date is carried as the ISO string the generator produced and parsed
/// lazily: a row whose date does not parse is excluded whenever a date bound
/// is active, without failing the filter as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    pub group: Option<String>,
    pub description: String,
    pub date: String,
    pub status: ReportStatus,
    pub url: String,
}

impl Report {
    /// Parses the row's date, if it is well-formed ISO-8601.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An applied date-range filter with optional bounds.
///
/// Bounds are compared at date granularity, so the upper bound is inclusive
/// through the end of its day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    /// True when neither bound is set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether a report passes this window.
    ///
    /// With no bounds set every row passes, including rows with malformed
    /// dates. Once either bound is set, a malformed date excludes the row.
    #[must_use]
    pub fn admits(self, report: &Report) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(date) = report.parsed_date() else {
            return false;
        };
        let after_from = self.from.is_none_or(|from| date >= from);
        let before_to = self.to.is_none_or(|to| date <= to);
        after_from && before_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(date: &str) -> Report {
        Report {
            id: ReportId(1),
            name: "Ops Reports File 1".to_string(),
            group: Some("Ops_Reports".to_string()),
            description: "Detailed quarterly financial summary for Q1.".to_string(),
            date: date.to_string(),
            status: ReportStatus::Processed,
            url: "/reports/file1.pdf".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_window_admits_everything() {
        let window = DateWindow::default();
        assert!(window.admits(&report("2024-03-05")));
        assert!(window.admits(&report("not a date")));
    }

    #[test]
    fn bounds_are_inclusive() {
        let window = DateWindow {
            from: Some(day(2024, 3, 5)),
            to: Some(day(2024, 3, 10)),
        };
        assert!(window.admits(&report("2024-03-05")));
        assert!(window.admits(&report("2024-03-10")));
        assert!(!window.admits(&report("2024-03-04")));
        assert!(!window.admits(&report("2024-03-11")));
    }

    #[test]
    fn half_open_windows_apply_single_bound() {
        let from_only = DateWindow {
            from: Some(day(2024, 3, 5)),
            to: None,
        };
        assert!(from_only.admits(&report("2025-01-01")));
        assert!(!from_only.admits(&report("2024-03-04")));

        let to_only = DateWindow {
            from: None,
            to: Some(day(2024, 3, 5)),
        };
        assert!(to_only.admits(&report("2023-12-31")));
        assert!(!to_only.admits(&report("2024-03-06")));
    }

    #[test]
    fn malformed_date_is_excluded_once_a_bound_is_set() {
        let window = DateWindow {
            from: Some(day(2024, 1, 1)),
            to: None,
        };
        assert!(!window.admits(&report("2024-13-40")));
        assert!(!window.admits(&report("yesterday")));
    }
}
