// SPDX-License-Identifier: MPL-2.0
//! Internationalization support for the settings overlay.
//!
//! Localization uses the Fluent system: `.ftl` resources are embedded in
//! the binary, the locale is resolved from an explicit override, the stored
//! `language` setting, or the OS locale, and the locale can be switched at
//! runtime when the user picks a different language in the panel.
//!
//! Lookups for keys a locale does not define return nothing, so callers
//! keep their authored label text instead of rendering a blank.

pub mod fluent;

pub use fluent::Translations;
