/// State management module
///
/// This module handles all gallery state, including:
/// - Photo records and their wire shape (data.rs)
/// - The one-shot photo store and fetch progress (store.rs)
/// - Hidden/visible toggles for the modal and loader (visibility.rs)

pub mod data;
pub mod store;
pub mod visibility;
