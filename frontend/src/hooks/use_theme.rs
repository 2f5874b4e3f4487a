use shared::preferences::Theme;
use web_sys::window;
use yew::prelude::*;

use crate::storage::BrowserStore;

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

// Tailwind's `dark:` variants key off a class on the root element
fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| Theme::load(&BrowserStore::local()));

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            next.save(&mut BrowserStore::local());
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}
