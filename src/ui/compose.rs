//! Composition helper
//!
//! Attaches child fragments to their parents. Attachment is synchronous:
//! when `append_items` returns `Ok`, every child is in place.

use super::fragments::{
    slot_name, Chrome, GridItem, ListContainer, Modal, ModalContent, Page, PageBuilder, Section,
};
use crate::state::data::PhotoId;
use thiserror::Error;

/// Reasons a child cannot be attached to its parent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The parent already holds a child of this kind
    #[error("{0} is already attached")]
    AlreadyAttached(&'static str),

    /// Page pieces must be attached in document order
    #[error("{slot} cannot be attached after {previous}")]
    OutOfOrder {
        slot: &'static str,
        previous: &'static str,
    },

    /// The page was finished without one of its pieces
    #[error("page has no {0}")]
    Missing(&'static str),

    /// Every grid item must show a different photo
    #[error("photo {0} is already in the grid")]
    DuplicateItem(PhotoId),
}

/// A fragment that can receive children
pub trait Container {
    type Child;

    /// Attach a single child
    fn attach(&mut self, child: Self::Child) -> Result<(), CompositionError>;
}

/// Attach `items` to `parent` in order.
///
/// Stops at the first failure; children attached before it stay attached.
pub fn append_items<P, I>(parent: &mut P, items: I) -> Result<&mut P, CompositionError>
where
    P: Container,
    I: IntoIterator<Item = P::Child>,
{
    for item in items {
        parent.attach(item)?;
    }
    Ok(parent)
}

impl PageBuilder {
    /// Highest slot filled so far
    fn last_slot(&self) -> Option<usize> {
        [
            self.header.is_some(),
            self.section.is_some(),
            self.modal.is_some(),
            self.loader.is_some(),
        ]
        .iter()
        .rposition(|filled| *filled)
    }

    /// Turn the builder into a page; every piece must be present
    pub fn finish(self) -> Result<Page, CompositionError> {
        Ok(Page {
            header: self.header.ok_or(CompositionError::Missing("header"))?,
            section: self.section.ok_or(CompositionError::Missing("section"))?,
            modal: self.modal.ok_or(CompositionError::Missing("modal"))?,
            loader: self.loader.ok_or(CompositionError::Missing("loader"))?,
        })
    }
}

impl Container for PageBuilder {
    type Child = Chrome;

    fn attach(&mut self, child: Chrome) -> Result<(), CompositionError> {
        let slot = child.slot();
        if let Some(last) = self.last_slot() {
            if last == slot {
                return Err(CompositionError::AlreadyAttached(child.name()));
            }
            if last > slot {
                return Err(CompositionError::OutOfOrder {
                    slot: child.name(),
                    previous: slot_name(last),
                });
            }
        }

        match child {
            Chrome::Header(header) => self.header = Some(header),
            Chrome::Section(section) => self.section = Some(section),
            Chrome::Modal(modal) => self.modal = Some(modal),
            Chrome::Loader(loader) => self.loader = Some(loader),
        }
        Ok(())
    }
}

impl Container for Section {
    type Child = ListContainer;

    fn attach(&mut self, child: ListContainer) -> Result<(), CompositionError> {
        if self.grid.is_some() {
            return Err(CompositionError::AlreadyAttached("list-container"));
        }
        self.grid = Some(child);
        Ok(())
    }
}

impl Container for Modal {
    type Child = ModalContent;

    fn attach(&mut self, child: ModalContent) -> Result<(), CompositionError> {
        if self.content.is_some() {
            return Err(CompositionError::AlreadyAttached("modal-content"));
        }
        self.content = Some(child);
        Ok(())
    }
}

impl Container for ListContainer {
    type Child = GridItem;

    fn attach(&mut self, child: GridItem) -> Result<(), CompositionError> {
        if self.contains(child.id) {
            return Err(CompositionError::DuplicateItem(child.id));
        }
        self.items.push(child);
        Ok(())
    }
}
