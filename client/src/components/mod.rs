//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the blog grid while reading/writing
//! shared state from Leptos context providers.

pub mod blog_card;
pub mod blog_grid;
pub mod nav_bar;
pub mod site_footer;
pub mod theme_notification;
pub mod theme_toggle;
