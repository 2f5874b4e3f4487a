use serde::{Deserialize, Serialize};

use crate::constants::THEME_KEY;
use crate::policy::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored `"dark"` means light.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get_item(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &mut S) {
        store.set_item(THEME_KEY, self.as_str());
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Night mode",
            Theme::Dark => "☀️ Day mode",
        }
    }
}
