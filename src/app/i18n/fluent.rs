// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.
//!
//! Every `.ftl` file under `assets/i18n/` becomes an available locale. The
//! current locale is resolved from, in order: the CLI `--lang` flag, the
//! config file, and the OS locale; `en-US` is the fallback.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        for file in Asset::iter() {
            let Some(locale) = file
                .as_ref()
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(file.as_ref()) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = FluentResource::try_new(source).expect("Failed to parse FTL file.");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Keep interpolated output free of bidi isolation marks; messages
            // here are plain table labels.
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).expect("Failed to add resource.");
            bundles.insert(locale, bundle);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| "en-US".parse().unwrap());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the current locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Looks up a message by key in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up a message and interpolates the given arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// A lookup that fails at any stage renders as `MISSING: key` so broken
    /// keys are visible in the UI instead of blank.
    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return format!("MISSING: {key}");
        };
        let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else {
            return format!("MISSING: {key}");
        };
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            value.into_owned()
        } else {
            format!("MISSING: {key}")
        }
    }
}

/// Picks the first candidate (CLI flag, then config, then OS locale) that
/// parses and is actually available.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];
    candidates.into_iter().flatten().find_map(|raw| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_locales_are_ignored() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let lang = resolve_locale(Some("xx-XX".to_string()), &config, &available);
        // Falls through to the OS locale, which may or may not be available;
        // either way it cannot be the unknown CLI locale.
        assert_ne!(lang, Some("xx-XX".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_available() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales
            .contains(&"en-US".parse::<LanguageIdentifier>().unwrap()));
        assert!(i18n
            .available_locales
            .contains(&"fr".parse::<LanguageIdentifier>().unwrap()));
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-key"),
            "MISSING: definitely-not-a-key"
        );
    }

    #[test]
    fn tr_with_args_interpolates() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let message = i18n.tr_with_args("toast-request-sent", &[("group", "Ops_Reports_G16")]);
        assert!(message.contains("Ops_Reports_G16"), "got: {message}");
    }

    #[test]
    fn set_locale_ignores_unknown() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }
}
