//! Networking for the blog feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `feed` performs the bounded fetch and error classification, `rss` turns the
//! response body into card models.

pub mod feed;
pub mod rss;
