// SPDX-License-Identifier: MPL-2.0
//! Dashboard state model: three group collections, a notice list, and the
//! active-tab selector.

use crate::domain::group::{GroupId, ReportGroup};
use crate::domain::notice::GroupNotice;
use chrono::NaiveDate;

/// The mutually-exclusive view selector over the three group collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Subscribed,
    Unsubscribed,
    Pending,
}

impl Tab {
    /// Returns the i18n message key for the tab label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Subscribed => "tab-subscribed",
            Tab::Unsubscribed => "tab-unsubscribed",
            Tab::Pending => "tab-pending",
        }
    }
}

/// State owned by the dashboard screen. The collections are moved in from
/// the seed catalog at construction and never shared.
pub struct State {
    subscribed: Vec<ReportGroup>,
    unsubscribed: Vec<ReportGroup>,
    pending: Vec<ReportGroup>,
    notices: Vec<GroupNotice>,
    search: String,
    active_tab: Tab,
}

impl State {
    #[must_use]
    pub fn new(
        subscribed: Vec<ReportGroup>,
        unsubscribed: Vec<ReportGroup>,
        notices: Vec<GroupNotice>,
    ) -> Self {
        Self {
            subscribed,
            unsubscribed,
            pending: Vec::new(),
            notices,
            search: String::new(),
            active_tab: Tab::default(),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Pure UI selection; no effect on the collections.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn filtered_subscribed(&self) -> Vec<&ReportGroup> {
        Self::filter(&self.subscribed, &self.search)
    }

    #[must_use]
    pub fn filtered_unsubscribed(&self) -> Vec<&ReportGroup> {
        Self::filter(&self.unsubscribed, &self.search)
    }

    #[must_use]
    pub fn filtered_pending(&self) -> Vec<&ReportGroup> {
        Self::filter(&self.pending, &self.search)
    }

    #[must_use]
    pub fn filtered_notices(&self) -> Vec<&GroupNotice> {
        self.notices
            .iter()
            .filter(|n| n.matches(&self.search))
            .collect()
    }

    /// Unread count for the navbar badge; not affected by the search term.
    #[must_use]
    pub fn notice_count(&self) -> usize {
        self.notices.len()
    }

    /// Moves an available group into the pending collection and switches the
    /// view to it. Returns the group name, or `None` when the id does not
    /// match anything (silent no-op).
    pub fn request_subscription(&mut self, id: GroupId) -> Option<String> {
        let index = self.unsubscribed.iter().position(|g| g.id == id)?;
        let group = self.unsubscribed.remove(index).into_pending();
        let name = group.name.clone();
        self.pending.insert(0, group);
        self.active_tab = Tab::Pending;
        Some(name)
    }

    /// Moves a pending group into the subscribed collection with an Active
    /// status, stamped with the given approval date.
    pub fn approve(&mut self, id: GroupId, today: NaiveDate) -> Option<String> {
        let index = self.pending.iter().position(|g| g.id == id)?;
        let group = self.pending.remove(index).into_active(today);
        let name = group.name.clone();
        self.subscribed.insert(0, group);
        Some(name)
    }

    fn filter<'a>(groups: &'a [ReportGroup], term: &str) -> Vec<&'a ReportGroup> {
        groups.iter().filter(|g| g.matches(term)).collect()
    }
}
