#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Page chrome state: current theme and navigation menu visibility.
///
/// Both fields mirror the DOM. Click handlers re-read the DOM first and
/// overwrite these values, so a stale field never decides a toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_expanded: bool,
}
