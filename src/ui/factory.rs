//! Element factory
//!
//! Pure constructors for every page fragment. Each call returns a fresh,
//! unattached fragment with fixed classes and text.

use super::fragments::{
    GridItem, Header, ListContainer, Loader, Modal, ModalContent, ModalImage, Section,
};
use crate::state::store::Store;
use crate::state::visibility::Visibility;

/// Title shown in the page header
pub const HEADER_TITLE: &str = "Gallery";
/// Label of the modal's close control
pub const CLOSE_BUTTON_TEXT: &str = "Close";
/// Text of the loading indicator
pub const LOADING_TEXT: &str = "Loading...";

/// Header with a single title heading
pub fn create_header() -> Header {
    Header {
        class: "header",
        title: HEADER_TITLE.to_string(),
    }
}

/// Empty main section
pub fn create_section() -> Section {
    Section {
        class: "section",
        grid: None,
    }
}

/// Loading indicator, initially hidden
pub fn create_loading_component() -> Loader {
    Loader {
        class: "loader",
        label: LOADING_TEXT.to_string(),
        visibility: Visibility::Hidden,
    }
}

/// Modal shell, initially hidden and without content
pub fn create_modal_component() -> Modal {
    Modal {
        class: "modal",
        visibility: Visibility::Hidden,
        content: None,
    }
}

/// Modal body: an empty image slot and the close control
pub fn create_modal_content() -> ModalContent {
    ModalContent {
        class: "modal-content",
        image: ModalImage::default(),
        close_label: CLOSE_BUTTON_TEXT.to_string(),
    }
}

/// Empty grid container
pub fn create_list_item_container() -> ListContainer {
    ListContainer {
        class: "list-container",
        ..ListContainer::default()
    }
}

/// One grid item per stored photo, in store order
pub fn create_image_containers(store: &Store) -> Vec<GridItem> {
    store
        .iter()
        .map(|photo| GridItem {
            id: photo.id,
            src: photo.urls.small.clone(),
            alt: photo.alt_text().to_string(),
        })
        .collect()
}
