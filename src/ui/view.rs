//! Renders the assembled page into iced widgets
//!
//! Layout, back to front: header, status line and the grid section;
//! the modal overlay when visible; the loading indicator when visible.

use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, responsive, scrollable, stack, text,
    Column, Row, Space,
};
use iced::{mouse, Alignment, Color, ContentFit, Element, Length, Size, Theme};

use super::fragments::{GridItem, Header, ListContainer, Loader, Modal, Page, Section};
use super::grid::GridGeometry;
use super::images::ImageCache;
use crate::state::store::LoadState;
use crate::Message;

/// Gap between thumbnails
const TILE_PADDING: u16 = 4;

/// Build the whole window content
pub fn page<'a>(
    page: &'a Page,
    load_state: &'a LoadState,
    images: &'a ImageCache,
) -> Element<'a, Message> {
    let base = column![
        header(&page.header),
        status_line(load_state),
        section(&page.section, images),
    ]
    .spacing(16)
    .padding(24)
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = stack![base].width(Length::Fill).height(Length::Fill);

    if page.modal.is_visible() {
        layers = layers.push(modal(&page.modal, images));
    }
    if page.loader.is_visible() {
        layers = layers.push(loader(&page.loader));
    }

    layers.into()
}

fn header(header: &Header) -> Element<'_, Message> {
    container(text(header.title.as_str()).size(40))
        .id(container::Id::new(header.class))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Error panel or summary line under the header
fn status_line(load_state: &LoadState) -> Element<'_, Message> {
    if let Some(message) = load_state.failure() {
        return container(
            column![
                text("Unable to load photos").size(18),
                text(message).size(14),
            ]
            .spacing(4),
        )
        .padding(12)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.8, 0.15, 0.15, 0.25).into()),
            text_color: Some(Color::from_rgb(1.0, 0.6, 0.6)),
            ..container::Style::default()
        })
        .into();
    }

    match load_state {
        LoadState::Loaded { rejected } if *rejected > 0 => {
            text(format!("Skipped {rejected} malformed photo records."))
                .size(14)
                .into()
        }
        _ => Space::new(Length::Shrink, Length::Shrink).into(),
    }
}

fn section<'a>(section: &'a Section, images: &'a ImageCache) -> Element<'a, Message> {
    let content: Element<'a, Message> = match section.grid() {
        Some(list) if list.items().is_empty() => center(text("No photos to show.")).into(),
        Some(list) => grid(list, images),
        None => Space::new(Length::Fill, Length::Fill).into(),
    };

    container(content)
        .id(container::Id::new(section.class))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Fixed four-column grid; row height follows the available width
fn grid<'a>(list: &'a ListContainer, images: &'a ImageCache) -> Element<'a, Message> {
    let geometry = list.geometry();

    responsive(move |size: Size| {
        let row_height = GridGeometry::row_height(size.width);

        let rows = list.items().chunks(geometry.columns).map(|chunk| {
            let mut cells = Row::new().width(Length::Fill);
            for item in chunk {
                cells = cells.push(tile(item, images, row_height));
            }
            // Keep the last row's tiles the same width as the others
            for _ in chunk.len()..geometry.columns {
                cells = cells.push(Space::new(Length::FillPortion(1), Length::Fixed(row_height)));
            }
            Element::from(cells)
        });

        let body = container(
            Column::with_children(rows)
                .width(Length::Fill)
                .height(Length::Fixed(geometry.total_height(size.width))),
        )
        .id(container::Id::new(list.class));

        scrollable(body).height(Length::Fill).into()
    })
    .into()
}

fn tile<'a>(item: &'a GridItem, images: &'a ImageCache, height: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match images.thumbnail(item.id) {
        Some(handle) => {
            let thumbnail: Image<Handle> = Image::new(handle.clone());
            thumbnail
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        // Not downloaded (yet): show the alt text in its place
        None => center(text(item.alt.as_str()).size(14)).into(),
    };

    mouse_area(
        container(content)
            .padding(TILE_PADDING)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(height)),
    )
    .on_press(Message::ThumbnailClicked(item.id))
    .interaction(mouse::Interaction::Pointer)
    .into()
}

/// Parts of the open modal a press can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalRegion {
    /// The displayed photo
    Image,
    CloseControl,
    /// Backdrop, captions and card padding
    Elsewhere,
}

/// Message a press on `region` produces; presses on the photo are swallowed
fn modal_press(region: ModalRegion) -> Option<Message> {
    match region {
        ModalRegion::Image => None,
        ModalRegion::CloseControl => Some(Message::CloseModal),
        ModalRegion::Elsewhere => Some(Message::BackdropClicked),
    }
}

/// Full-size overlay. A press anywhere but the photo closes it.
fn modal<'a>(modal: &'a Modal, images: &'a ImageCache) -> Element<'a, Message> {
    let Some(content) = modal.content() else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let picture: Element<'a, Message> = match images.full(content.image.photo) {
        Some(handle) => {
            let full: Image<Handle> = Image::new(handle.clone());
            full.content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => center(text(content.image.alt.as_str()).size(16)).into(),
    };
    let picture: Element<'a, Message> = match modal_press(ModalRegion::Image) {
        Some(message) => mouse_area(picture).on_press(message).into(),
        None => opaque(picture),
    };

    let card = container(
        column![
            container(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill),
            text(content.image.alt.as_str()).size(14),
            text(content.image.src.as_deref().unwrap_or_default()).size(11),
            button(text(content.close_label.as_str()))
                .on_press_maybe(modal_press(ModalRegion::CloseControl))
                .padding([8, 16]),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .id(container::Id::new(content.class))
    .padding(16)
    .max_width(960)
    .max_height(720)
    .style(container::rounded_box);

    let backdrop = mouse_area(
        center(card)
            .id(container::Id::new(modal.class))
            .style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }),
    );
    let backdrop = match modal_press(ModalRegion::Elsewhere) {
        Some(message) => backdrop.on_press(message),
        None => backdrop,
    };

    // Keep presses from reaching the grid underneath
    opaque(backdrop)
}

fn loader(loader: &Loader) -> Element<'_, Message> {
    center(
        container(text(loader.label.as_str()).size(20))
            .id(container::Id::new(loader.class))
            .padding(16)
            .style(container::rounded_box),
    )
    .into()
}
