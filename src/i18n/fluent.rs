use crate::config::{Config, Preferences};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else resolves. Its table is also the reference
/// table consulted for keys the active locale does not carry.
pub const FALLBACK_LOCALE: &str = "en-US";

/// The localization store: per-locale Fluent bundles, the active locale, and
/// the preference file the active locale is persisted to.
///
/// The store is a plain owned value; hand it (or a reference) to whatever
/// renders text. It is single-threaded by construction — a multi-threaded
/// host must serialize access itself.
pub struct Localizer {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
    prefs: Preferences,
}

impl Localizer {
    /// Builds the store from the embedded translation tables and resolves the
    /// starting locale: CLI override, then persisted preference, then OS
    /// locale, then [`FALLBACK_LOCALE`]. Never fails — an unreadable
    /// preference file simply drops out of the resolution chain.
    pub fn new(cli_lang: Option<String>, prefs: Preferences) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        // Plain output, no Unicode directional isolation
                        // around placeables.
                        bundle.set_use_isolating(false);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let config = prefs.load().unwrap_or_default();
        let current_locale = resolve_locale(
            cli_lang,
            &config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
            prefs,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active locale and persists the choice.
    ///
    /// A locale with no loaded table is ignored: the active locale is
    /// retained and nothing is written. A failed preference write is reported
    /// on stderr; the in-memory switch stands either way.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if !self.bundles.contains_key(&locale) {
            return;
        }
        self.current_locale = locale;

        let mut cfg = self.prefs.load().unwrap_or_default();
        cfg.language = Some(self.current_locale.to_string());
        if let Err(error) = self.prefs.save(&cfg) {
            eprintln!("Failed to save language preference: {:?}", error);
        }
    }

    /// Resolves `key` for the active locale.
    ///
    /// Lookup order, first match wins: the active locale's table, the
    /// [`FALLBACK_LOCALE`] table, the key itself. A message that formats to
    /// an empty string is a valid translation and is returned as-is; only a
    /// missing or unformattable message falls through.
    pub fn tr(&self, key: &str) -> String {
        self.resolve(key, None)
    }

    /// Like [`tr`](Self::tr), but yields `fallback` instead of the key when
    /// neither table carries the message.
    pub fn tr_or(&self, key: &str, fallback: &str) -> String {
        self.resolve(key, Some(fallback))
    }

    /// Human-readable name for a locale, taken from the `language-name-*`
    /// messages with the raw locale code as a last resort.
    pub fn language_display_name(&self, locale: &LanguageIdentifier) -> String {
        let key = format!("language-name-{}", locale);
        self.tr_or(&key, &locale.to_string())
    }

    fn resolve(&self, key: &str, fallback: Option<&str>) -> String {
        if let Some(value) = self.format(&self.current_locale, key) {
            return value;
        }
        if self.current_locale != self.fallback_locale {
            if let Some(value) = self.format(&self.fallback_locale, key) {
                return value;
            }
        }
        match fallback {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    system_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI override, for this session only.
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Persisted preference.
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale.
    if let Some(os_locale_str) = system_locale {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
