/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and status formatting (data.rs)
/// - The text and status filters (filter.rs)
/// - The read-only job store (store.rs)
/// - Tracking counts and status toggles (tracking.rs)

pub mod data;
pub mod filter;
pub mod store;
pub mod tracking;
