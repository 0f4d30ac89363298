// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language resolution, translation loading,
//! and string lookup.
//!
//! # Features
//!
//! - Locale resolution from CLI, persisted preference, or system settings
//! - Compile-time embedded `.ftl` translation tables
//! - Runtime language switching, persisted across sessions
//! - Total lookup: missing translations degrade through the `en-US`
//!   reference table down to the key itself, never an error

pub mod fluent;
