//! View models and page-flip animation metadata.

use heapless::String as HeaplessString;

use crate::{
    content::Page,
    settings::{FontScale, ThemeMode},
};

pub const PAGE_LABEL_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    PageTurnForward,
    PageTurnBackward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Everything the render layer needs to paint one frame.
pub struct Screen<'a> {
    pub app_title: &'a str,
    /// `None` only when the catalog is empty.
    pub page: Option<Page<'a>>,
    /// "Page 1 of 2"
    pub page_label: &'a str,
    pub page_index: u16,
    pub page_count: u16,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub turn: Option<AnimationFrame>,
    pub font_scale: FontScale,
    pub theme: ThemeMode,
    pub fullscreen: bool,
}

pub fn page_label(index: u16, count: u16) -> HeaplessString<PAGE_LABEL_BYTES> {
    use core::fmt::Write;

    let mut label = HeaplessString::new();
    if count == 0 {
        let _ = label.push_str("No pages");
    } else {
        let _ = write!(label, "Page {} of {}", index.saturating_add(1), count);
    }
    label
}
