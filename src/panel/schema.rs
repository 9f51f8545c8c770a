// SPDX-License-Identifier: MPL-2.0
//! The settings form: groups, controls, store keys and label keys.
//!
//! The schema is data, not behaviour: the view model reads it to build a
//! render snapshot and `get-translations` replies cover exactly the label
//! keys listed here.

/// One group of related settings in the panel.
#[derive(Debug, Clone, Copy)]
pub struct SettingGroup {
    pub label_key: &'static str,
    pub items: &'static [SettingItem],
}

/// One form control bound to a store key.
#[derive(Debug, Clone, Copy)]
pub struct SettingItem {
    pub key: &'static str,
    pub label_key: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, Copy)]
pub enum Control {
    /// On/off switch persisted as a boolean.
    Toggle { default: bool },
    /// Switch persisted as the theme text value; checked while the theme
    /// is anything but light.
    ThemeSwitch,
    /// Free text field.
    Text { default: &'static str },
    /// Fixed option list.
    Select {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// Label key of the apply-changes action.
pub const APPLY_LABEL_KEY: &str = "applyChanges";

pub const GROUPS: &[SettingGroup] = &[
    SettingGroup {
        label_key: "client",
        items: &[
            SettingItem {
                key: "theme",
                label_key: "darkMode",
                control: Control::ThemeSwitch,
            },
            SettingItem {
                key: "language",
                label_key: "language",
                control: Control::Select {
                    options: &["en", "es", "pt-BR"],
                    default: "en",
                },
            },
        ],
    },
    SettingGroup {
        label_key: "adBlocker",
        items: &[SettingItem {
            key: "adBlocker",
            label_key: "enableAdBlocker",
            control: Control::Toggle { default: false },
        }],
    },
    SettingGroup {
        label_key: "proxy",
        items: &[
            SettingItem {
                key: "proxyEnabled",
                label_key: "enableProxy",
                control: Control::Toggle { default: false },
            },
            SettingItem {
                key: "proxyHost",
                label_key: "proxyHost",
                control: Control::Text { default: "" },
            },
            SettingItem {
                key: "proxyPort",
                label_key: "proxyPort",
                control: Control::Text { default: "" },
            },
        ],
    },
    SettingGroup {
        label_key: "lastFm",
        items: &[
            SettingItem {
                key: "lastFmEnabled",
                label_key: "enableLastFm",
                control: Control::Toggle { default: false },
            },
            SettingItem {
                key: "lastFmApiKey",
                label_key: "lastFmApiKey",
                control: Control::Text { default: "" },
            },
            SettingItem {
                key: "lastFmSecret",
                label_key: "lastFmApiSecret",
                control: Control::Text { default: "" },
            },
        ],
    },
    SettingGroup {
        label_key: "discord",
        items: &[
            SettingItem {
                key: "discordRichPresence",
                label_key: "enableRichPresence",
                control: Control::Toggle { default: false },
            },
            SettingItem {
                key: "displayWhenIdling",
                label_key: "displayWhenPaused",
                control: Control::Toggle { default: false },
            },
            SettingItem {
                key: "displaySCSmallIcon",
                label_key: "displaySmallIcon",
                control: Control::Toggle { default: false },
            },
            SettingItem {
                key: "displayButtons",
                label_key: "displayButtons",
                control: Control::Toggle { default: false },
            },
        ],
    },
];

/// Every label key the panel can render, for translation pulls.
pub fn label_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for group in GROUPS {
        keys.push(group.label_key);
        for item in group.items {
            keys.push(item.label_key);
        }
    }
    keys.push(APPLY_LABEL_KEY);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keys_are_unique() {
        let mut keys: Vec<&str> = GROUPS
            .iter()
            .flat_map(|group| group.items.iter().map(|item| item.key))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn label_keys_include_groups_items_and_apply() {
        let keys = label_keys();
        assert!(keys.contains(&"client"));
        assert!(keys.contains(&"darkMode"));
        assert!(keys.contains(&APPLY_LABEL_KEY));
    }
}
