//! Single-month calendar table with today marker and click selection.
//!
//! ARCHITECTURE
//! ============
//! The table body is a pure projection of `CalendarState`: generating a month
//! replaces every row, and cell classes are derived from `is_today` /
//! `is_selected`, so clearing the previous selection needs no DOM walk.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::settings::PageSettings;
use crate::state::calendar::CalendarState;
use crate::util::date_format::{month_caption, weekday_headers};
use crate::util::month_grid::{DayCell, Week};

/// Calendar for the current month, generated once after mount.
#[component]
pub fn Calendar() -> impl IntoView {
    let settings = expect_context::<PageSettings>();
    let calendar = expect_context::<RwSignal<CalendarState>>();

    Effect::new(move || {
        calendar.update(|state| state.generate(chrono::Local::now().date_naive()));
    });

    let caption = move || {
        calendar.with(|state| {
            state
                .view
                .as_ref()
                .and_then(|view| month_caption(view.year, view.month, settings.locale))
                .unwrap_or_default()
        })
    };

    let weeks = move || calendar.with(|state| state.view.as_ref().map(|view| view.weeks.clone()).unwrap_or_default());

    view! {
        <table id="calendar" class="calendar">
            <caption class="calendar__caption">{caption}</caption>
            <thead>
                <tr>
                    {weekday_headers(settings.locale)
                        .into_iter()
                        .map(|name| view! { <th scope="col">{name}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || weeks().into_iter().map(|week| week_row(week, calendar)).collect_view()}
            </tbody>
        </table>
    }
}

fn week_row(week: Week, calendar: RwSignal<CalendarState>) -> impl IntoView {
    view! { <tr>{week.into_iter().map(|cell| day_cell(cell, calendar)).collect_view()}</tr> }
}

fn day_cell(cell: DayCell, calendar: RwSignal<CalendarState>) -> impl IntoView {
    let Some(day) = cell.day() else {
        return view! { <td class="calendar__blank"></td> }.into_any();
    };

    view! {
        <td
            class="calendar__day"
            class:today=move || calendar.with(|state| state.is_today(day))
            class:selected=move || calendar.with(|state| state.is_selected(day))
            on:click=move |_| {
                calendar.update(|state| {
                    state.select(day);
                });
            }
        >
            {day}
        </td>
    }
    .into_any()
}
