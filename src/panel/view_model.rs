// SPDX-License-Identifier: MPL-2.0
//! Render snapshot for the settings panel.
//!
//! The view model carries everything the content context needs to render
//! the form: label keys for localization and the current control values
//! read from the store. It is rebuilt from a fresh store read on every
//! render, never cached.

use crate::config::{defaults, SettingValue, StoreHandle};
use crate::panel::schema::{self, Control};
use std::collections::BTreeMap;

/// The full set of current setting values at one point in time.
pub type SettingsSnapshot = BTreeMap<String, SettingValue>;

/// Reads the current value of every schema key, applying defaults for keys
/// the store has never seen.
pub fn snapshot(store: &StoreHandle) -> SettingsSnapshot {
    let mut values = SettingsSnapshot::new();
    for group in schema::GROUPS {
        for item in group.items {
            let value = match item.control {
                Control::Toggle { default } => {
                    SettingValue::Bool(store.get_bool(item.key, default))
                }
                Control::ThemeSwitch => {
                    SettingValue::Text(store.get_text(item.key, defaults::THEME))
                }
                Control::Text { default } => {
                    SettingValue::Text(store.get_text(item.key, default))
                }
                Control::Select { default, .. } => {
                    SettingValue::Text(store.get_text(item.key, default))
                }
            };
            values.insert(item.key.to_string(), value);
        }
    }
    values
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlView {
    Toggle { checked: bool },
    Text { value: String },
    Select { options: Vec<String>, selected: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub key: String,
    pub label_key: String,
    pub control: ControlView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub label_key: String,
    pub items: Vec<ItemView>,
}

/// Everything the content context renders: the form groups with current
/// values, plus whether the panel should style itself dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    pub is_dark: bool,
    pub groups: Vec<GroupView>,
    pub apply_label_key: String,
}

impl PanelViewModel {
    /// Builds the view model from a fresh store read.
    pub fn from_store(store: &StoreHandle) -> Self {
        let theme = store.get_text("theme", defaults::THEME);
        let groups = schema::GROUPS
            .iter()
            .map(|group| GroupView {
                label_key: group.label_key.to_string(),
                items: group.items.iter().map(|item| item_view(item, store)).collect(),
            })
            .collect();

        Self {
            is_dark: defaults::theme_is_dark(&theme),
            groups,
            apply_label_key: schema::APPLY_LABEL_KEY.to_string(),
        }
    }

    /// The current value of one control, if the schema knows the key.
    pub fn value_of(&self, key: &str) -> Option<&ControlView> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter())
            .find(|item| item.key == key)
            .map(|item| &item.control)
    }
}

fn item_view(item: &schema::SettingItem, store: &StoreHandle) -> ItemView {
    let control = match item.control {
        Control::Toggle { default } => ControlView::Toggle {
            checked: store.get_bool(item.key, default),
        },
        Control::ThemeSwitch => ControlView::Toggle {
            checked: defaults::theme_is_dark(&store.get_text(item.key, defaults::THEME)),
        },
        Control::Text { default } => ControlView::Text {
            value: store.get_text(item.key, default),
        },
        Control::Select { options, default } => ControlView::Select {
            options: options.iter().map(|option| option.to_string()).collect(),
            selected: store.get_text(item.key, default),
        },
    };
    ItemView {
        key: item.key.to_string(),
        label_key: item.label_key.to_string(),
        control,
    }
}
