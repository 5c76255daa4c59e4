//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` concerns from components and state so
//! the pure rules compile and test without a browser. Modules that only make
//! sense with a DOM are compiled for `hydrate` builds alone.

#[cfg(feature = "hydrate")]
pub mod feed_refresh;
#[cfg(feature = "hydrate")]
pub mod page_events;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme_dom;
