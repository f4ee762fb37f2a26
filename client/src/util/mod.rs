//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Everything except `dark_mode`,
//! `preference_store` and `ticker` is pure and runs identically on the server.

pub mod dark_mode;
pub mod date_format;
pub mod month_grid;
pub mod nav;
pub mod preference_store;
pub mod theme;
pub mod ticker;
