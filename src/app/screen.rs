// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Reports,
    Admin,
    Ops,
    Settings,
}

impl Screen {
    /// Returns the i18n message key for the screen's menu label and title.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Dashboard => "screen-dashboard",
            Screen::Reports => "screen-reports",
            Screen::Admin => "screen-admin",
            Screen::Ops => "screen-ops",
            Screen::Settings => "screen-settings",
        }
    }
}

impl FromStr for Screen {
    type Err = ();

    /// Parses the `--screen` CLI value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Screen::Dashboard),
            "reports" => Ok(Screen::Reports),
            "admin" => Ok(Screen::Admin),
            "ops" => Ok(Screen::Ops),
            "settings" => Ok(Screen::Settings),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_values_case_insensitively() {
        assert_eq!("ops".parse::<Screen>(), Ok(Screen::Ops));
        assert_eq!("Admin".parse::<Screen>(), Ok(Screen::Admin));
        assert!("viewer".parse::<Screen>().is_err());
    }
}
