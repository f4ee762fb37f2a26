//! `aria-expanded` handling for the navigation menu button.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Only the literal `"true"` counts as expanded; a missing attribute is collapsed.
pub fn parse_expanded(attr: Option<&str>) -> bool {
    attr == Some("true")
}

/// State after a click on a button whose attribute currently reads `attr`.
pub fn next_expanded(attr: Option<&str>) -> bool {
    !parse_expanded(attr)
}

pub fn expanded_attr(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}
