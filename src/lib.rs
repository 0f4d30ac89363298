// SPDX-License-Identifier: MPL-2.0
//! `lingo` is a localization store with a persistent language preference.
//!
//! Translation tables are Fluent resources embedded at compile time, one per
//! supported locale. Lookup is total: a key missing from the active locale
//! falls back to the `en-US` reference table, then to a caller-supplied
//! string, then to the key itself, so a rendering layer never has to handle
//! a missing translation. The active language is chosen once at startup and
//! every later change is written back to the user's configuration file.
//!
//! ```no_run
//! use lingo::config::Preferences;
//! use lingo::i18n::fluent::Localizer;
//!
//! let mut localizer = Localizer::new(None, Preferences::default());
//! println!("{}", localizer.tr("window-title"));
//! localizer.set_locale("ko".parse().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod i18n;
