use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn generated(today: NaiveDate) -> CalendarState {
    let mut state = CalendarState::default();
    state.generate(today);
    state
}

fn days(state: &CalendarState) -> Vec<u32> {
    state.view.as_ref().unwrap().weeks.iter().flatten().filter_map(|cell| cell.day()).collect()
}

// =============================================================
// generate
// =============================================================

#[test]
fn default_state_has_no_view() {
    let state = CalendarState::default();
    assert!(state.view.is_none());
    assert!(!state.is_today(1));
}

#[test]
fn generate_builds_current_month() {
    let state = generated(date(2024, 2, 14));
    let view = state.view.as_ref().unwrap();
    assert_eq!((view.year, view.month, view.today), (2024, 2, 14));
    assert_eq!(view.days_in_month, 29);
    assert_eq!(view.weeks.len(), 5);
}

#[test]
fn today_is_marked_exactly_once() {
    let state = generated(date(2024, 2, 14));
    let marked: Vec<u32> = days(&state).into_iter().filter(|day| state.is_today(*day)).collect();
    assert_eq!(marked, vec![14]);
}

#[test]
fn regenerate_rebuilds_and_clears_selection() {
    let mut state = generated(date(2024, 2, 14));
    assert!(state.select(3));
    state.generate(date(2024, 3, 1));
    assert_eq!(state.selected, None);
    let view = state.view.as_ref().unwrap();
    assert_eq!((view.month, view.days_in_month), (3, 31));
    assert_eq!(days(&state).len(), 31);
}

#[test]
fn regenerate_same_day_is_idempotent() {
    let mut state = generated(date(2024, 2, 14));
    let first = state.clone();
    state.generate(date(2024, 2, 14));
    assert_eq!(state, first);
}

// =============================================================
// select
// =============================================================

#[test]
fn clicking_a_then_b_selects_only_b() {
    let mut state = generated(date(2024, 2, 14));
    assert!(state.select(5));
    assert!(state.select(20));
    assert!(state.is_selected(20));
    assert!(!state.is_selected(5));
    let selected: Vec<u32> = days(&state).into_iter().filter(|day| state.is_selected(*day)).collect();
    assert_eq!(selected, vec![20]);
}

#[test]
fn reselecting_same_day_keeps_it_selected() {
    let mut state = generated(date(2024, 2, 14));
    assert!(state.select(7));
    assert!(state.select(7));
    assert_eq!(state.selected, Some(7));
}

#[test]
fn selecting_outside_month_is_rejected() {
    let mut state = generated(date(2024, 2, 14));
    assert!(state.select(9));
    assert!(!state.select(30));
    assert!(!state.select(0));
    assert_eq!(state.selected, Some(9));
}

#[test]
fn selecting_before_generation_is_rejected() {
    let mut state = CalendarState::default();
    assert!(!state.select(1));
    assert_eq!(state.selected, None);
}

#[test]
fn today_can_also_be_selected() {
    let mut state = generated(date(2024, 2, 14));
    assert!(state.select(14));
    assert!(state.is_today(14));
    assert!(state.is_selected(14));
}
