// SPDX-License-Identifier: MPL-2.0
use lingo::config::Preferences;
use lingo::i18n::fluent::Localizer;
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

/// Message keys of the `en-US` reference table, read from the same asset the
/// binary embeds.
fn base_table_keys() -> Vec<String> {
    include_str!("../assets/i18n/en-US.ftl")
        .lines()
        .filter(|line| {
            line.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        })
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .collect()
}

#[test]
fn language_choice_survives_restart() {
    let dir = tempdir().expect("failed to create temp dir");
    let prefs = Preferences::at(dir.path().join("settings.toml"));

    let mut localizer = Localizer::new(Some("en-US".to_string()), prefs.clone());
    localizer.set_locale("ko".parse().unwrap());
    drop(localizer);

    // Simulated restart: same preference file, no CLI override.
    let restarted = Localizer::new(None, prefs);
    assert_eq!(restarted.current_locale().to_string(), "ko");
}

#[test]
fn rejected_locale_is_neither_applied_nor_persisted() {
    let dir = tempdir().expect("failed to create temp dir");
    let prefs = Preferences::at(dir.path().join("settings.toml"));

    let mut localizer = Localizer::new(Some("en-US".to_string()), prefs.clone());
    localizer.set_locale("fr".parse().unwrap());

    assert_eq!(localizer.current_locale().to_string(), "en-US");
    let config = prefs.load().expect("load should not error");
    assert!(config.language.is_none());
}

#[test]
fn fresh_start_resolves_system_locale_or_default() {
    let dir = tempdir().expect("failed to create temp dir");
    let prefs = Preferences::at(dir.path().join("settings.toml"));

    let localizer = Localizer::new(None, prefs);

    let system = sys_locale::get_locale().and_then(|s| s.parse::<LanguageIdentifier>().ok());
    let expected: LanguageIdentifier = match system {
        Some(locale) if localizer.available_locales.contains(&locale) => locale,
        _ => "en-US".parse().unwrap(),
    };
    assert_eq!(localizer.current_locale(), &expected);
}

#[test]
fn every_base_key_resolves_in_every_locale() {
    let keys = base_table_keys();
    assert!(!keys.is_empty(), "reference table should not be empty");

    let dir = tempdir().expect("failed to create temp dir");
    let locales = Localizer::new(Some("en-US".to_string()), Preferences::at(dir.path().join("s.toml")))
        .available_locales;

    for locale in &locales {
        let prefs = Preferences::at(dir.path().join(format!("{}.toml", locale)));
        let localizer = Localizer::new(Some(locale.to_string()), prefs);
        for key in &keys {
            let value = localizer.tr(key);
            assert!(
                !value.is_empty(),
                "key '{}' resolved to an empty string under '{}'",
                key,
                locale
            );
        }
    }
}

#[test]
fn lagging_translation_falls_back_to_reference_table() {
    let dir = tempdir().expect("failed to create temp dir");
    let prefs = Preferences::at(dir.path().join("settings.toml"));
    let localizer = Localizer::new(Some("ko".to_string()), prefs);

    assert_eq!(localizer.tr("action-save"), "저장");
    // "action-cancel" has no Korean translation yet.
    assert_eq!(localizer.tr("action-cancel"), "Cancel");
}

#[test]
fn unknown_key_degrades_to_caller_fallback_then_key() {
    let dir = tempdir().expect("failed to create temp dir");
    let prefs = Preferences::at(dir.path().join("settings.toml"));
    let localizer = Localizer::new(Some("en-US".to_string()), prefs);

    assert_eq!(localizer.tr_or("no-such-key", "X"), "X");
    assert_eq!(localizer.tr("no-such-key"), "no-such-key");
}
