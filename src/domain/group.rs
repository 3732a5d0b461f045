// SPDX-License-Identifier: MPL-2.0
//! Report groups a subscriber can browse, request, and read reports from.

use super::contains_ci;
use chrono::NaiveDate;
use std::fmt;

/// Identifier of a report group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a report group from the subscriber's point of view.
///
/// Reachable transitions: `Available → Pending` (subscription request) and
/// `Pending → Active` (approval). `Inactive` is only ever produced by the
/// seed generator; no runtime transition produces or consumes it. It is kept
/// because the subscribed table displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    Available,
    Pending,
    Active,
    Inactive,
}

impl GroupStatus {
    /// Returns the i18n message key for the status tag.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            GroupStatus::Available => "status-available",
            GroupStatus::Pending => "status-pending",
            GroupStatus::Active => "status-active",
            GroupStatus::Inactive => "status-inactive",
        }
    }
}

/// A report group record as held by the dashboard collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    /// Set when (and only when) the group has been subscribed to.
    pub subscribed_on: Option<NaiveDate>,
    pub status: GroupStatus,
}

impl ReportGroup {
    /// Search filter over name and description.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || contains_ci(&self.description, term)
    }

    /// Marks the group as requested. Used when moving an available group into
    /// the pending collection.
    #[must_use]
    pub fn into_pending(mut self) -> Self {
        self.status = GroupStatus::Pending;
        self
    }

    /// Marks the group as approved on the given date. Used when moving a
    /// pending group into the subscribed collection.
    #[must_use]
    pub fn into_active(mut self, on: NaiveDate) -> Self {
        self.status = GroupStatus::Active;
        self.subscribed_on = Some(on);
        self
    }
}
