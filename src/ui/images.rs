use iced::widget::image::Handle;
use std::collections::HashMap;

use crate::state::data::PhotoId;

/// Decoded-image handles for everything currently on screen.
///
/// Thumbnails are kept for the whole session (the grid never changes);
/// only one full-size image is held, the one the modal shows.
#[derive(Debug, Default)]
pub struct ImageCache {
    thumbnails: HashMap<PhotoId, Handle>,
    full: Option<(PhotoId, Handle)>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_thumbnail(&mut self, id: PhotoId, handle: Handle) {
        self.thumbnails.insert(id, handle);
    }

    pub fn thumbnail(&self, id: PhotoId) -> Option<&Handle> {
        self.thumbnails.get(&id)
    }

    /// Store a downloaded full-size image.
    ///
    /// Downloads that finish after the modal moved on to another photo (or
    /// closed) are dropped; returns whether the image was kept.
    pub fn set_full(&mut self, id: PhotoId, handle: Handle, displayed: Option<PhotoId>) -> bool {
        if displayed != Some(id) {
            return false;
        }
        self.full = Some((id, handle));
        true
    }

    /// Full-size image for `id`, if it is the one held
    pub fn full(&self, id: Option<PhotoId>) -> Option<&Handle> {
        match (&self.full, id) {
            (Some((held, handle)), Some(id)) if *held == id => Some(handle),
            _ => None,
        }
    }

    pub fn clear_full(&mut self) {
        self.full = None;
    }
}
