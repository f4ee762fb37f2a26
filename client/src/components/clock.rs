//! Live clock showing the long local date and the time with seconds.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::settings::PageSettings;
#[cfg(feature = "hydrate")]
use crate::util::date_format::clock_text;
#[cfg(feature = "hydrate")]
use crate::util::ticker::Ticker;

/// Text element refreshed once after mount and then every clock period.
///
/// The refresh task belongs to this component and is cancelled when the
/// component's owner is cleaned up.
#[component]
pub fn Clock() -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let settings = expect_context::<PageSettings>();
        let ticker = StoredValue::new_local(Ticker::new(settings.clock.period));

        Effect::new(move || {
            ticker.update_value(|t| {
                t.start(move || text.set(clock_text(&chrono::Local::now(), settings.locale, &settings.clock)));
            });
        });

        on_cleanup(move || {
            ticker.try_update_value(Ticker::stop);
        });
    }

    view! {
        <p id="current-time" class="clock" aria-live="off">
            {move || text.get()}
        </p>
    }
}
