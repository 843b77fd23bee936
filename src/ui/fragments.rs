//! Detached view-model fragments
//!
//! Each fragment is plain data describing one piece of the page. The
//! factory builds them, the composition helper attaches them to their
//! parents, and `view.rs` turns the assembled page into iced widgets.

use super::grid::GridGeometry;
use crate::state::data::{Photo, PhotoId};
use crate::state::visibility::Visibility;

/// Page header with its single title heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub class: &'static str,
    pub title: String,
}

/// Main content section; holds the grid once the photos arrive
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub class: &'static str,
    pub(super) grid: Option<ListContainer>,
}

impl Section {
    pub fn grid(&self) -> Option<&ListContainer> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut ListContainer> {
        self.grid.as_mut()
    }
}

/// Grid container: one child per photo, laid out by `geometry`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListContainer {
    pub class: &'static str,
    pub(super) items: Vec<GridItem>,
    pub(super) geometry: GridGeometry,
}

impl ListContainer {
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Set the row/column template (done before the items are attached)
    pub fn set_geometry(&mut self, geometry: GridGeometry) {
        self.geometry = geometry;
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// One clickable thumbnail in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    /// Stable id of the photo this item shows
    pub id: PhotoId,
    /// Thumbnail location (`urls.small`)
    pub src: String,
    pub alt: String,
}

/// Image slot inside the modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalImage {
    /// Photo currently shown, if any
    pub photo: Option<PhotoId>,
    /// Full-size location (`urls.regular`)
    pub src: Option<String>,
    pub alt: String,
}

/// Body of the modal: the image container plus the close control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub class: &'static str,
    pub image: ModalImage,
    pub close_label: String,
}

/// Overlay showing a full-size photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub class: &'static str,
    pub visibility: Visibility,
    pub(super) content: Option<ModalContent>,
}

impl Modal {
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Id of the photo on display, if the modal shows one
    pub fn displayed_photo(&self) -> Option<PhotoId> {
        self.content.as_ref().and_then(|content| content.image.photo)
    }

    /// Point the modal image at `photo`'s full-size version and reveal it.
    ///
    /// Opening while already visible just swaps the photo.
    pub fn open(&mut self, photo: &Photo) {
        if let Some(content) = self.content.as_mut() {
            content.image = ModalImage {
                photo: Some(photo.id),
                src: Some(photo.urls.regular.clone()),
                alt: photo.alt_text().to_string(),
            };
        }
        self.visibility.show();
    }

    /// Hide the modal; returns whether it was visible
    pub fn close(&mut self) -> bool {
        self.visibility.hide()
    }
}

/// Loading indicator shown while the photo list is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    pub class: &'static str,
    pub label: String,
    pub visibility: Visibility,
}

impl Loader {
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn show(&mut self) {
        self.visibility.show();
    }

    pub fn hide(&mut self) {
        self.visibility.hide();
    }
}

/// Top-level pieces of the page, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum Chrome {
    Header(Header),
    Section(Section),
    Modal(Modal),
    Loader(Loader),
}

impl Chrome {
    /// Position of this piece in the document
    pub fn slot(&self) -> usize {
        match self {
            Chrome::Header(_) => 0,
            Chrome::Section(_) => 1,
            Chrome::Modal(_) => 2,
            Chrome::Loader(_) => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        slot_name(self.slot())
    }
}

pub(super) fn slot_name(slot: usize) -> &'static str {
    match slot {
        0 => "header",
        1 => "section",
        2 => "modal",
        _ => "loader",
    }
}

/// Page root while it is being assembled
#[derive(Debug, Default)]
pub struct PageBuilder {
    pub(super) header: Option<Header>,
    pub(super) section: Option<Section>,
    pub(super) modal: Option<Modal>,
    pub(super) loader: Option<Loader>,
}

/// Fully assembled page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub header: Header,
    pub section: Section,
    pub modal: Modal,
    pub loader: Loader,
}
