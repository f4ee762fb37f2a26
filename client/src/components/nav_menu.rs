//! Collapsible navigation menu for narrow viewports.

use leptos::prelude::*;

use crate::settings::PageSettings;
use crate::state::ui::UiState;
use crate::util::nav::expanded_attr;

/// Menu button plus the navigation list it shows and hides.
///
/// A click reads the button's live `aria-expanded` attribute, flips it and
/// lets the list's `active` class follow. Nothing is persisted.
#[component]
pub fn NavMenu() -> impl IntoView {
    let settings = expect_context::<PageSettings>();
    let ui = expect_context::<RwSignal<UiState>>();
    let button_ref = NodeRef::<leptos::html::Button>::new();

    let on_toggle = move |_| {
        let next = next_from_button(button_ref).unwrap_or_else(|| !ui.get_untracked().menu_expanded);
        ui.update(|u| u.menu_expanded = next);
    };

    view! {
        <nav class="site-nav" aria-label="Principal">
            <button
                node_ref=button_ref
                class="menu-toggle"
                type="button"
                aria-controls="navList"
                aria-expanded=move || expanded_attr(ui.get().menu_expanded)
                on:click=on_toggle
            >
                <span class="menu-toggle__bar"></span>
                <span class="menu-toggle__bar"></span>
                <span class="menu-toggle__bar"></span>
                <span class="visually-hidden">"Menú"</span>
            </button>
            <ul id="navList" class="nav-list" class:active=move || ui.get().menu_expanded>
                {settings
                    .nav_links
                    .iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Expanded state after a click, from the attribute currently on the button.
#[cfg(feature = "hydrate")]
fn next_from_button(button: NodeRef<leptos::html::Button>) -> Option<bool> {
    let el = button.get_untracked()?;
    Some(crate::util::nav::next_expanded(el.get_attribute("aria-expanded").as_deref()))
}

#[cfg(not(feature = "hydrate"))]
fn next_from_button(_button: NodeRef<leptos::html::Button>) -> Option<bool> {
    None
}
