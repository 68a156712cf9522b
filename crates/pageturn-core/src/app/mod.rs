//! Reader state machine: paging, presentation settings and host effects.

use log::{debug, info, warn};

use crate::{
    content::{Page, PageCatalog},
    input::{Intent, IntentProvider},
    render::{Screen, page_label},
    sequencer::{DEFAULT_TURN_MS, PageSequencer, SequencerConfig},
    settings::{FONT_SCALE_DEFAULT, HostEnvironment, ReaderSettings},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    /// Length of the page-flip window.
    pub turn_ms: u16,
    /// Font scale at mount, clamped like any other request.
    pub font_scale: i32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            turn_ms: DEFAULT_TURN_MS,
            font_scale: FONT_SCALE_DEFAULT as i32,
        }
    }
}

pub struct ReaderApp<C, IN, H>
where
    C: PageCatalog,
    IN: IntentProvider,
    H: HostEnvironment,
{
    pages: C,
    input: IN,
    host: H,
    app_title: &'static str,
    sequencer: PageSequencer,
    settings: ReaderSettings,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

#[cfg(test)]
mod tests;
