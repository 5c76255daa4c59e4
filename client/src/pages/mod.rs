//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns section layout and delegates rendering
//! details to `components`.

pub mod home;
