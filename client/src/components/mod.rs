//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one widget: it renders its mount point, runs its own
//! startup step after mount and reads/writes shared state from Leptos context
//! providers. Components never depend on each other.

pub mod calendar;
pub mod clock;
pub mod nav_menu;
pub mod theme_toggle;
