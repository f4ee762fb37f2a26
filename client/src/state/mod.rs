//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`ui`, `calendar`) so each component depends on
//! a small focused model provided through Leptos context.

pub mod calendar;
pub mod ui;
