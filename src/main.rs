use iced::widget::image;
use iced::{Element, Task, Theme};
use reqwest::Client;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod net;
mod state;
mod ui;

use config::Config;
use error::GalleryError;
use net::loader::{self, LoadReport};
use net::source::Source;
use net::LoadError;
use state::data::PhotoId;
use state::store::{LoadState, Store};
use ui::compose::{self, CompositionError};
use ui::factory;
use ui::fragments::{Chrome, GridItem, Page, PageBuilder};
use ui::grid::GridGeometry;
use ui::images::ImageCache;

/// Main application state
struct Gallery {
    /// The assembled page: header, section, modal, loader
    page: Page,
    /// Photos fetched for this session
    store: Store,
    /// Progress of the photo list fetch
    load_state: LoadState,
    /// Downloaded thumbnails and the current full-size image
    images: ImageCache,
    /// Where the photo list lives
    source: Source,
    /// Shared HTTP client (cheap to clone)
    client: Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background fetch of the photo list finished
    PhotosLoaded(Result<LoadReport, LoadError>),
    /// A thumbnail download finished
    ThumbnailLoaded(PhotoId, Result<image::Handle, LoadError>),
    /// A full-size download finished
    FullImageLoaded(PhotoId, Result<image::Handle, LoadError>),
    /// User clicked a grid item
    ThumbnailClicked(PhotoId),
    /// User clicked outside the modal card
    BackdropClicked,
    /// User clicked the modal's close control
    CloseModal,
}

impl Gallery {
    /// Build the static page and start fetching the photo list.
    ///
    /// Fails if the page cannot be assembled or the source is unusable;
    /// the application does not start in that case.
    fn new(config: Config) -> Result<(Self, Task<Message>), GalleryError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GalleryError::Client(e.to_string()))?;
        let source = Source::parse(&config.photos_location())?;

        let page = build_page().inspect_err(|e| error!(error = %e, "❌ Page composition failed"))?;

        let mut gallery = Gallery {
            page,
            store: Store::new(),
            load_state: LoadState::Idle,
            images: ImageCache::new(),
            source,
            client,
        };
        let task = gallery.start_loading();

        info!("🎨 Gallery initialized");
        Ok((gallery, task))
    }

    /// Reveal the loader and launch the fetch (once)
    fn start_loading(&mut self) -> Task<Message> {
        if self.load_state.is_loading() || self.store.is_populated() {
            debug!("Photo list already requested, ignoring");
            return Task::none();
        }

        self.page.loader.show();
        self.load_state = LoadState::Loading;

        let client = self.client.clone();
        let source = self.source.clone();
        Task::perform(
            async move { loader::fetch_photos(&client, &source).await },
            Message::PhotosLoaded,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PhotosLoaded(Ok(report)) => match self.populate(report) {
                Ok(task) => task,
                Err(e) => {
                    error!(error = %e, "❌ Could not attach the photo grid");
                    self.page.loader.hide();
                    self.load_state = LoadState::Failed(e.to_string());
                    Task::none()
                }
            },
            Message::PhotosLoaded(Err(e)) => {
                error!(error = %e, "❌ Photo list fetch failed");
                self.page.loader.hide();
                self.load_state = LoadState::Failed(e.to_string());
                Task::none()
            }
            Message::ThumbnailLoaded(id, Ok(handle)) => {
                self.images.insert_thumbnail(id, handle);
                Task::none()
            }
            Message::ThumbnailLoaded(id, Err(e)) => {
                warn!(photo = %id, error = %e, "⚠️  Thumbnail download failed");
                Task::none()
            }
            Message::FullImageLoaded(id, Ok(handle)) => {
                if !self
                    .images
                    .set_full(id, handle, self.page.modal.displayed_photo())
                {
                    debug!(photo = %id, "Dropping full-size image for a photo no longer shown");
                }
                Task::none()
            }
            Message::FullImageLoaded(id, Err(e)) => {
                warn!(photo = %id, error = %e, "⚠️  Full-size download failed");
                Task::none()
            }
            Message::ThumbnailClicked(id) => self.open_photo(id),
            Message::BackdropClicked => {
                // Only meaningful while the modal is up
                if self.page.modal.is_visible() {
                    self.close_modal();
                }
                Task::none()
            }
            Message::CloseModal => {
                self.close_modal();
                Task::none()
            }
        }
    }

    /// Store the fetched photos and build the grid.
    ///
    /// The loader is hidden only once every item is attached.
    fn populate(&mut self, report: LoadReport) -> Result<Task<Message>, CompositionError> {
        let rejected = report.rejected;
        if !self.store.populate(report.photos) {
            warn!("Store already populated, ignoring second photo list");
            return Ok(Task::none());
        }

        let mut list = factory::create_list_item_container();
        list.set_geometry(GridGeometry::for_items(self.store.len()));
        compose::append_items(&mut self.page.section, [list])?;

        let items = factory::create_image_containers(&self.store);
        if let Some(grid) = self.page.section.grid_mut() {
            compose::append_items(grid, items)?;
        }

        self.page.loader.hide();
        self.load_state = LoadState::Loaded { rejected };
        if self.store.is_empty() {
            info!(rejected, "📭 Photo list is empty");
        } else {
            info!(photos = self.store.len(), rejected, "🖼️  Grid populated");
        }

        let downloads: Vec<Task<Message>> = self
            .page
            .section
            .grid()
            .map(|grid| grid.items().iter().map(|item| self.fetch_thumbnail(item)).collect())
            .unwrap_or_default();
        Ok(Task::batch(downloads))
    }

    fn fetch_thumbnail(&self, item: &GridItem) -> Task<Message> {
        let id = item.id;
        Task::perform(
            net::images::fetch_image(self.client.clone(), item.src.clone()),
            move |result| Message::ThumbnailLoaded(id, result.map(image::Handle::from_bytes)),
        )
    }

    /// Show `id` in the modal and download its full-size image
    fn open_photo(&mut self, id: PhotoId) -> Task<Message> {
        let Some(photo) = self.store.get(id) else {
            warn!(photo = %id, "Click on an unknown photo");
            return Task::none();
        };

        self.page.modal.open(photo);
        self.images.clear_full();
        debug!(photo = %id, src = %photo.urls.regular, "Modal opened");

        Task::perform(
            net::images::fetch_image(self.client.clone(), photo.urls.regular.clone()),
            move |result| Message::FullImageLoaded(id, result.map(image::Handle::from_bytes)),
        )
    }

    fn close_modal(&mut self) {
        if self.page.modal.close() {
            self.images.clear_full();
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        ui::view::page(&self.page, &self.load_state, &self.images)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Assemble the static chrome: the modal gets its content first, then
/// header, section, modal and loader are attached in document order.
fn build_page() -> Result<Page, CompositionError> {
    let loader = factory::create_loading_component();

    let mut modal = factory::create_modal_component();
    compose::append_items(&mut modal, [factory::create_modal_content()])?;

    let mut root = PageBuilder::default();
    compose::append_items(
        &mut root,
        [
            Chrome::Header(factory::create_header()),
            Chrome::Section(factory::create_section()),
            Chrome::Modal(modal),
            Chrome::Loader(loader),
        ],
    )?;
    root.finish()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), GalleryError> {
    init_tracing();

    let config = Config::load();
    let (gallery, startup) = Gallery::new(config)?;

    iced::application("Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(move || (gallery, startup))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::{Photo, PhotoUrls};

    fn gallery() -> Gallery {
        let (gallery, _task) = Gallery::new(Config::default()).unwrap();
        gallery
    }

    fn report(count: usize) -> LoadReport {
        let photos = (0..count)
            .map(|i| Photo {
                id: PhotoId(i),
                description: (i % 2 == 0).then(|| format!("Photo {i}")),
                urls: PhotoUrls {
                    small: format!("https://cdn.test/{i}-small.jpg"),
                    regular: format!("https://cdn.test/{i}-regular.jpg"),
                },
            })
            .collect();
        LoadReport {
            photos,
            rejected: 0,
        }
    }

    fn loaded(count: usize) -> Gallery {
        let mut gallery = gallery();
        let _ = gallery.update(Message::PhotosLoaded(Ok(report(count))));
        gallery
    }

    #[test]
    fn test_build_page_document_order() {
        let page = build_page().unwrap();
        assert_eq!(page.header.title, "Gallery");
        assert!(page.section.grid().is_none());
        assert!(!page.modal.is_visible());
        assert_eq!(page.modal.content().unwrap().close_label, "Close");
        assert_eq!(page.loader.label, "Loading...");
    }

    #[test]
    fn test_loader_visible_while_fetching() {
        let gallery = gallery();
        assert!(gallery.page.loader.is_visible());
        assert!(gallery.load_state.is_loading());
        assert!(!gallery.page.modal.is_visible());
        assert!(gallery.store.is_empty());
    }

    #[test]
    fn test_second_fetch_is_ignored() {
        let mut gallery = gallery();
        let _ = gallery.start_loading();
        assert!(gallery.load_state.is_loading());
        assert!(gallery.page.loader.is_visible());
    }

    #[test]
    fn test_grid_has_one_item_per_photo() {
        let gallery = loaded(5);
        let grid = gallery.page.section.grid().unwrap();

        assert_eq!(grid.items().len(), 5);
        for (item, photo) in grid.items().iter().zip(gallery.store.iter()) {
            assert_eq!(item.id, photo.id);
            assert_eq!(item.src, photo.urls.small);
        }
        assert_eq!(grid.items()[1].alt, "image");
        assert_eq!(grid.items()[2].alt, "Photo 2");

        assert_eq!(grid.geometry(), GridGeometry { columns: 4, rows: 2 });
        assert!(!gallery.page.loader.is_visible());
        assert_eq!(gallery.load_state, LoadState::Loaded { rejected: 0 });
    }

    #[test]
    fn test_empty_photo_list() {
        let gallery = loaded(0);
        let grid = gallery.page.section.grid().unwrap();
        assert!(grid.items().is_empty());
        assert_eq!(grid.geometry().rows, 0);
        assert_eq!(grid.geometry().total_height(1200.0), 0.0);
        assert!(!gallery.page.loader.is_visible());
    }

    #[test]
    fn test_fetch_failure_leaves_store_empty() {
        let mut gallery = gallery();
        let _ = gallery.update(Message::PhotosLoaded(Err(LoadError::Network(
            "connection refused".to_string(),
        ))));

        assert!(gallery.store.is_empty());
        assert!(!gallery.page.loader.is_visible());
        assert!(gallery.page.section.grid().is_none());
        assert!(gallery
            .load_state
            .failure()
            .unwrap()
            .contains("connection refused"));
    }

    #[test]
    fn test_click_opens_modal_with_regular_url() {
        let mut gallery = loaded(6);
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(4)));

        assert!(gallery.page.modal.is_visible());
        let image = &gallery.page.modal.content().unwrap().image;
        assert_eq!(image.photo, Some(PhotoId(4)));
        assert_eq!(image.src.as_deref(), Some("https://cdn.test/4-regular.jpg"));
        assert_eq!(image.alt, "Photo 4");
    }

    #[test]
    fn test_click_while_visible_swaps_photo() {
        let mut gallery = loaded(3);
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(0)));
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(1)));

        assert!(gallery.page.modal.is_visible());
        let image = &gallery.page.modal.content().unwrap().image;
        assert_eq!(image.src.as_deref(), Some("https://cdn.test/1-regular.jpg"));
        assert_eq!(image.alt, "image");
    }

    #[test]
    fn test_click_on_unknown_photo_is_ignored() {
        let mut gallery = loaded(2);
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(9)));
        assert!(!gallery.page.modal.is_visible());
    }

    #[test]
    fn test_outside_click_closes_modal() {
        let mut gallery = loaded(2);

        // Hidden: nothing happens
        let _ = gallery.update(Message::BackdropClicked);
        assert!(!gallery.page.modal.is_visible());

        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(1)));
        assert!(gallery.page.modal.is_visible());

        let _ = gallery.update(Message::BackdropClicked);
        assert!(!gallery.page.modal.is_visible());
    }

    #[test]
    fn test_close_control_hides_modal() {
        let mut gallery = loaded(2);
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(0)));
        let _ = gallery.update(Message::CloseModal);
        assert!(!gallery.page.modal.is_visible());
    }

    #[test]
    fn test_stale_full_image_is_dropped() {
        let mut gallery = loaded(3);
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(0)));
        let _ = gallery.update(Message::ThumbnailClicked(PhotoId(2)));

        let handle = image::Handle::from_bytes(vec![0u8; 4]);
        let _ = gallery.update(Message::FullImageLoaded(PhotoId(0), Ok(handle.clone())));
        assert!(gallery.images.full(Some(PhotoId(0))).is_none());

        let _ = gallery.update(Message::FullImageLoaded(PhotoId(2), Ok(handle)));
        assert!(gallery.images.full(Some(PhotoId(2))).is_some());
    }

    #[test]
    fn test_thumbnail_results() {
        let mut gallery = loaded(2);
        let handle = image::Handle::from_bytes(vec![0u8; 4]);
        let _ = gallery.update(Message::ThumbnailLoaded(PhotoId(0), Ok(handle)));
        let _ = gallery.update(Message::ThumbnailLoaded(
            PhotoId(1),
            Err(LoadError::Status {
                status: 404,
                url: "https://cdn.test/1-small.jpg".to_string(),
            }),
        ));
        assert!(gallery.images.thumbnail(PhotoId(0)).is_some());
        assert!(gallery.images.thumbnail(PhotoId(1)).is_none());
    }

    #[test]
    fn test_second_photo_list_is_ignored() {
        let mut gallery = loaded(2);
        let _ = gallery.update(Message::PhotosLoaded(Ok(report(7))));
        assert_eq!(gallery.store.len(), 2);
        assert_eq!(gallery.page.section.grid().unwrap().items().len(), 2);
    }
}
