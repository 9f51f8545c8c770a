// SPDX-License-Identifier: MPL-2.0
use crate::config::{defaults, StoreHandle};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fluent-backed translation service shared with the settings panel.
pub struct Translations {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Translations {
    /// Loads every embedded `.ftl` resource and resolves the starting
    /// locale from `override_lang`, the stored `language` setting, then the
    /// OS locale.
    pub fn new(override_lang: Option<&str>, store: &StoreHandle) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping translation file with bad locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let Ok(resource) = FluentResource::try_new(source) else {
                tracing::warn!(filename, "skipping unparsable translation file");
                continue;
            };
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            if bundle.add_resource(resource).is_err() {
                tracing::warn!(filename, "translation file has overlapping messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(override_lang, store, &available_locales)
            .unwrap_or_else(|| fallback_locale());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Switches to a locale given as a BCP-47 string. Returns whether the
    /// locale was known and the switch happened.
    pub fn set_locale_str(&mut self, locale: &str) -> bool {
        match locale.parse::<LanguageIdentifier>() {
            Ok(parsed) if self.bundles.contains_key(&parsed) => {
                self.current_locale = parsed;
                true
            }
            _ => {
                tracing::debug!(locale, "ignoring switch to unavailable locale");
                false
            }
        }
    }

    /// Resolves one key for the current locale. `None` when the locale has
    /// no such message; the caller keeps its authored label.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
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

    /// The key→string mapping for a set of label keys, containing only the
    /// keys the current locale actually defines.
    pub fn translations_for(&self, keys: &[&str]) -> HashMap<String, String> {
        keys.iter()
            .filter_map(|key| self.lookup(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

fn fallback_locale() -> LanguageIdentifier {
    defaults::LANGUAGE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn resolve_locale(
    override_lang: Option<&str>,
    store: &StoreHandle,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let find = |candidate: &str| {
        candidate
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    if let Some(lang) = override_lang.and_then(find) {
        return Some(lang);
    }

    let stored = store.get_text("language", "");
    if !stored.is_empty() {
        if let Some(lang) = find(&stored) {
            return Some(lang);
        }
    }

    sys_locale::get_locale().as_deref().and_then(find)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileStore, SettingValue};

    fn empty_store() -> StoreHandle {
        StoreHandle::new(FileStore::in_memory())
    }

    #[test]
    fn override_beats_stored_language() {
        let store = empty_store();
        store.set("language", SettingValue::Text("es".into()));
        let translations = Translations::new(Some("pt-BR"), &store);
        assert_eq!(translations.current_locale().to_string(), "pt-BR");
    }

    #[test]
    fn stored_language_is_used_without_override() {
        let store = empty_store();
        store.set("language", SettingValue::Text("es".into()));
        let translations = Translations::new(None, &store);
        assert_eq!(translations.current_locale().to_string(), "es");
    }

    #[test]
    fn lookup_resolves_known_keys() {
        let store = empty_store();
        let mut translations = Translations::new(Some("en"), &store);
        assert_eq!(translations.lookup("darkMode").as_deref(), Some("Dark Mode"));

        assert!(translations.set_locale_str("es"));
        assert_eq!(
            translations.lookup("darkMode").as_deref(),
            Some("Modo oscuro")
        );
    }

    #[test]
    fn missing_keys_resolve_to_none() {
        let store = empty_store();
        let translations = Translations::new(Some("en"), &store);
        assert_eq!(translations.lookup("noSuchLabel"), None);
    }

    #[test]
    fn unavailable_locale_switch_is_rejected() {
        let store = empty_store();
        let mut translations = Translations::new(Some("en"), &store);
        assert!(!translations.set_locale_str("de"));
        assert_eq!(translations.current_locale().to_string(), "en");
    }

    #[test]
    fn translations_for_skips_unknown_keys() {
        let store = empty_store();
        let translations = Translations::new(Some("en"), &store);
        let mapping = translations.translations_for(&["darkMode", "noSuchLabel"]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("darkMode").map(String::as_str), Some("Dark Mode"));
    }
}
