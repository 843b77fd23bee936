/// User interface module
///
/// This module handles everything between the store and the window:
/// - Detached page fragments (fragments.rs)
/// - Fragment constructors (factory.rs)
/// - Attaching fragments to their parents (compose.rs)
/// - Four-column grid math (grid.rs)
/// - Downloaded image handles (images.rs)
/// - Rendering fragments into iced widgets (view.rs)

pub mod compose;
pub mod factory;
pub mod fragments;
pub mod grid;
pub mod images;
pub mod view;
