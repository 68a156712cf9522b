//! Page content consumed by the sequencer.

mod static_pages;

pub use static_pages::{SAMPLE_CHAPTERS, StaticPages, default_sample_pages};

/// One navigable unit of content (a chapter).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page<'a> {
    pub title: &'a str,
    pub body: &'a str,
    /// Opaque reference resolved by the host (path, URL, asset key).
    pub image: Option<&'a str>,
}

impl<'a> Page<'a> {
    pub const fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            image: None,
        }
    }

    pub const fn with_image(mut self, image: &'a str) -> Self {
        self.image = Some(image);
        self
    }
}

/// Read-only ordered list of pages. Indices are zero-based.
pub trait PageCatalog {
    fn page_count(&self) -> u16;
    fn page_at(&self, index: u16) -> Option<Page<'_>>;

    fn last_index(&self) -> u16 {
        self.page_count().saturating_sub(1)
    }
}
