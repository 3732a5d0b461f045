// SPDX-License-Identifier: MPL-2.0
use iced_portal::app::config::{self, Config};
use iced_portal::app::i18n::I18n;
use iced_portal::catalog::{Catalog, ReportShelf};
use iced_portal::domain::request::{Decision, RequestStatus};
use iced_portal::ui::{admin, dashboard, ops, reports};
use tempfile::tempdir;

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_the_config_file() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_status_label_resolves_in_both_locales() {
    let keys = [
        "status-available",
        "status-pending",
        "status-active",
        "status-inactive",
        "status-approved",
        "status-denied",
        "status-processed",
        "status-failed",
        "status-ready",
        "status-processing",
        "status-transferred",
    ];

    for locale in ["en-US", "fr"] {
        let mut i18n = I18n::default();
        i18n.set_locale(locale.parse().unwrap());
        for key in keys {
            let label = i18n.tr(key);
            assert!(!label.starts_with("MISSING:"), "{locale}: {key}");
        }
    }
}

#[test]
fn subscription_request_flow_reaches_the_subscribed_collection() {
    let catalog = Catalog::generate();
    let mut state = dashboard::State::new(
        catalog.subscribed_groups,
        catalog.unsubscribed_groups,
        catalog.group_notices,
    );

    let id = state.filtered_unsubscribed()[0].id;
    let event = dashboard::update(&mut state, dashboard::Message::RequestSubscription(id));
    assert!(matches!(event, dashboard::Event::RequestSent(_)));
    assert_eq!(state.active_tab(), dashboard::Tab::Pending);

    let event = dashboard::update(&mut state, dashboard::Message::ApprovePending(id));
    assert!(matches!(event, dashboard::Event::Approved(_)));

    let subscribed = state.filtered_subscribed();
    assert_eq!(subscribed[0].id, id);
    assert_eq!(
        subscribed[0].subscribed_on,
        Some(chrono::Local::now().date_naive())
    );
}

#[test]
fn admin_denial_makes_a_request_invisible_everywhere() {
    let catalog = Catalog::generate();
    let mut state = admin::State::new(catalog.subscription_requests);

    let id = state.pending_view()[0].id;
    admin::update(&mut state, admin::Message::Decide(id, Decision::Approve));
    let event = admin::update(&mut state, admin::Message::Decide(id, Decision::Deny));

    assert!(matches!(
        event,
        admin::Event::Decided {
            status: RequestStatus::Denied,
            ..
        }
    ));
    assert!(state.pending_view().iter().all(|r| r.id != id));
    assert!(state.approved_view().iter().all(|r| r.id != id));
}

#[test]
fn ops_intake_then_transfer_lifecycle() {
    let catalog = Catalog::generate();
    let mut state = ops::State::new(catalog.transfer_files, catalog.file_arrivals);

    let arrival_id = state.arrivals()[0].id.clone();
    let event = ops::update(&mut state, ops::Message::GetFile(arrival_id.clone()));
    assert!(matches!(event, ops::Event::FileReceived(_)));

    let event = ops::update(&mut state, ops::Message::Transfer(arrival_id.clone()));
    assert!(matches!(event, ops::Event::TransferStarted(_)));

    let event = ops::update(&mut state, ops::Message::TransferElapsed(arrival_id.clone()));
    assert!(matches!(event, ops::Event::TransferCompleted(_)));
    assert!(state.filtered_files()[0].is_transferred());

    // Replayed completions stay silent.
    let event = ops::update(&mut state, ops::Message::TransferElapsed(arrival_id));
    assert!(matches!(event, ops::Event::None));
}

#[test]
fn reports_selection_is_stable_across_filters_and_downloads() {
    let mut state = reports::State::new(ReportShelf::generate());

    // Fallback listing: 20 rows dated 2024-01-01 through 2024-01-20.
    reports::update(
        &mut state,
        reports::Message::FromInputChanged("2024-01-01".to_string()),
    );
    reports::update(
        &mut state,
        reports::Message::ToInputChanged("2024-01-05".to_string()),
    );
    reports::update(&mut state, reports::Message::ApplyFilters);
    assert_eq!(state.filtered().len(), 5);

    reports::update(&mut state, reports::Message::SelectAllFiltered(true));
    assert_eq!(state.header_state(), reports::HeaderState::Checked);

    reports::update(&mut state, reports::Message::ClearFilters);
    assert_eq!(state.header_state(), reports::HeaderState::Indeterminate);

    let event = reports::update(&mut state, reports::Message::DownloadSelected);
    assert!(matches!(event, reports::Event::DownloadStarted(5)));
    // Selections persist after the simulated download.
    assert_eq!(state.selected_count(), 5);

    reports::update(&mut state, reports::Message::SelectAllFiltered(true));
    assert_eq!(state.header_state(), reports::HeaderState::Checked);
    assert_eq!(state.selected_count(), 20);
}
