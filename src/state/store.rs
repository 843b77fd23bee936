use super::data::{Photo, PhotoId};

/// The Store holds the ordered photo sequence for the current session.
///
/// It is populated exactly once after the fetch and only read afterwards,
/// so the order items were rendered in never changes underneath the grid.
#[derive(Debug, Default)]
pub struct Store {
    photos: Vec<Photo>,
    populated: bool,
}

impl Store {
    /// Create an empty, unpopulated store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the store with the fetched photos.
    ///
    /// Returns `false` (and keeps the current content) if the store
    /// was already populated.
    pub fn populate(&mut self, photos: Vec<Photo>) -> bool {
        if self.populated {
            return false;
        }
        self.photos = photos;
        self.populated = true;
        true
    }

    /// Look up a photo by its id
    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        // Ids are handed out in order, so the id doubles as the slot
        self.photos.get(id.0).filter(|photo| photo.id == id)
    }

    /// Iterate photos in store order
    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

/// Progress of the one-shot photo fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Grid populated; `rejected` malformed records were skipped
    Loaded { rejected: usize },
    /// Fetch or population failed; the store stays empty
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Error message if the fetch failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
