//! Landing page hosting every widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the bootstrap: it places each widget's mount point once the
//! document is rendered. Widgets start themselves after mount (first clock
//! tick plus its ticker, calendar generation, theme resolution); leaving a
//! widget off the page simply skips its behavior.

use leptos::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::clock::Clock;
use crate::components::nav_menu::NavMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::settings::PageSettings;

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = expect_context::<PageSettings>();

    view! {
        <header id="inicio" class="site-header">
            <span class="site-header__title">{settings.title}</span>
            <NavMenu/>
            <ThemeToggle/>
        </header>
        <main class="home">
            <section id="reloj" class="home__section home__clock">
                <Clock/>
            </section>
            <section id="calendario" class="home__section home__calendar">
                <Calendar/>
            </section>
        </main>
    }
}
