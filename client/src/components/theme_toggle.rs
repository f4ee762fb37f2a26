//! Light/dark toggle button with its icon pair.

use leptos::prelude::*;

use crate::settings::PageSettings;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::theme::icon_display;

/// Theme toggle button.
///
/// After mount the initial theme is resolved (stored preference, then system
/// preference, then light) and applied to `<body>`; state is then re-synced
/// from what the page actually shows. Each click inverts the page's current
/// theme, persists it and re-applies it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let settings = expect_context::<PageSettings>();
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let initial = dark_mode::read_preference(settings.theme_storage_key);
        dark_mode::apply(initial);
        let shown = dark_mode::applied_theme().unwrap_or(initial);
        ui.update(|u| u.theme = shown);
    });

    let on_toggle = move |_| {
        let next = dark_mode::toggle(settings.theme_storage_key, ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let light_display = move || icon_display(ui.get().theme).0;
    let dark_display = move || icon_display(ui.get().theme).1;

    view! {
        <button
            id="darkModeToggle"
            class="btn theme-toggle"
            type="button"
            title="Cambiar tema"
            aria-label="Cambiar tema"
            on:click=on_toggle
        >
            <span id="theme-toggle-light-icon" class="theme-toggle__icon" style:display=light_display>
                "\u{2600}"
            </span>
            <span id="theme-toggle-dark-icon" class="theme-toggle__icon" style:display=dark_display>
                "\u{263E}"
            </span>
        </button>
    }
}
