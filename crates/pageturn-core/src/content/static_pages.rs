use super::{Page, PageCatalog};

/// Chapters shown when the host supplies no content of its own.
pub const SAMPLE_CHAPTERS: [Page<'static>; 2] = [
    Page::new(
        "Chapter 1: Introduction",
        "Welcome to our interactive reading experience. This platform is designed to make \
reading comfortable and enjoyable across all devices.",
    ),
    Page::new(
        "Chapter 2: Getting Started",
        "Use the controls at the bottom of the screen to customize your reading experience. \
You can adjust the text size and toggle between light and dark modes for comfortable reading \
in any environment.",
    ),
];

pub fn default_sample_pages() -> StaticPages<'static> {
    StaticPages::new(&SAMPLE_CHAPTERS)
}

/// Static in-memory page list.
#[derive(Debug, Clone, Copy)]
pub struct StaticPages<'a> {
    pages: &'a [Page<'a>],
}

impl<'a> StaticPages<'a> {
    pub const fn new(pages: &'a [Page<'a>]) -> Self {
        Self { pages }
    }
}

impl PageCatalog for StaticPages<'_> {
    fn page_count(&self) -> u16 {
        self.pages.len().min(u16::MAX as usize) as u16
    }

    fn page_at(&self, index: u16) -> Option<Page<'_>> {
        self.pages.get(index as usize).copied()
    }
}
