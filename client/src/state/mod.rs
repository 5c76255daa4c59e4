//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each module is plain data plus the rules that transform it. Nothing here
//! touches the DOM; `util` applies results to the page and components read
//! them through Leptos context.

pub mod feed;
pub mod notice;
pub mod preference;
pub mod theme;
pub mod ui;
