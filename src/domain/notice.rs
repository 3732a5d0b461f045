// SPDX-License-Identifier: MPL-2.0
//! Dashboard notices about report-group activity.

use super::contains_ci;

/// A short notification shown in the dashboard's side panel. Clicking one
/// navigates to the reports screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNotice {
    pub group: String,
    pub message: String,
}

impl GroupNotice {
    /// Search filter over group name and message text.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        contains_ci(&self.group, term) || contains_ci(&self.message, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_group_or_message() {
        let notice = GroupNotice {
            group: "Ops_Reports".to_string(),
            message: "New operations report uploaded on 2025-10-09".to_string(),
        };
        assert!(notice.matches("ops"));
        assert!(notice.matches("uploaded"));
        assert!(!notice.matches("finance"));
    }
}
