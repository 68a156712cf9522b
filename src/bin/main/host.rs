use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use pageturn_core::settings::{HostEnvironment, ThemeMode};

/// Terminal stand-in for the document: theme marker plus alternate screen
/// as "fullscreen".
#[derive(Debug)]
pub(super) struct TerminalHost {
    fullscreen: bool,
}

impl TerminalHost {
    pub(super) fn new() -> Self {
        Self { fullscreen: false }
    }
}

impl HostEnvironment for TerminalHost {
    fn apply_theme(&mut self, theme: ThemeMode) {
        // Colours are painted per frame from the screen model.
        debug!("host: theme marker {}", theme.as_str());
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if fullscreen == self.fullscreen {
            return;
        }
        self.fullscreen = fullscreen;

        let result = if fullscreen {
            execute!(io::stdout(), EnterAlternateScreen)
        } else {
            execute!(io::stdout(), LeaveAlternateScreen)
        };
        if let Err(err) = result {
            warn!("host: fullscreen switch failed: {}", err);
        }
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        if self.fullscreen {
            self.set_fullscreen(false);
        }
    }
}
