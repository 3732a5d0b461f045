// SPDX-License-Identifier: MPL-2.0
//! Subscription requests as seen by the admin screen.

use super::contains_ci;
use chrono::NaiveDate;
use std::fmt;

/// Identifier of a subscription request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a subscription request.
///
/// Reachable transitions (all via [`Decision`]): `Pending → Approved`,
/// `Pending → Denied`, `Approved → Denied` (revoke), and any state back to
/// `Pending` via `Decision::Reset`. Denied rows stay in the collection but
/// are shown in neither admin partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    /// Returns the i18n message key for the status tag.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-pending",
            RequestStatus::Approved => "status-approved",
            RequestStatus::Denied => "status-denied",
        }
    }
}

/// An admin decision on a request. `Reset` puts a row back to `Pending`; the
/// admin screen exposes only Approve and Deny (revoke reuses Deny).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
    Reset,
}

impl Decision {
    /// The status a request ends up in after this decision.
    #[must_use]
    pub fn applied(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Deny => RequestStatus::Denied,
            Decision::Reset => RequestStatus::Pending,
        }
    }
}

/// A subscription request row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub id: RequestId,
    pub user_name: String,
    pub ad_group: String,
    pub folder: String,
    pub report_name: String,
    pub date_requested: NaiveDate,
    pub status: RequestStatus,
}

impl SubscriptionRequest {
    /// Search filter over user name, AD group, and report name.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        contains_ci(&self.user_name, term)
            || contains_ci(&self.ad_group, term)
            || contains_ci(&self.report_name, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_map_to_statuses() {
        assert_eq!(Decision::Approve.applied(), RequestStatus::Approved);
        assert_eq!(Decision::Deny.applied(), RequestStatus::Denied);
        assert_eq!(Decision::Reset.applied(), RequestStatus::Pending);
    }

    #[test]
    fn matches_covers_the_three_searchable_fields() {
        let req = SubscriptionRequest {
            id: RequestId(1),
            user_name: "Alice".to_string(),
            ad_group: "Finance_Reports".to_string(),
            folder: "Client_Data_A".to_string(),
            report_name: "Q3-Report-2024".to_string(),
            date_requested: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            status: RequestStatus::Pending,
        };
        assert!(req.matches("alice"));
        assert!(req.matches("finance"));
        assert!(req.matches("q3-report"));
        // The folder column is displayed but not searched.
        assert!(!req.matches("client_data"));
    }
}
