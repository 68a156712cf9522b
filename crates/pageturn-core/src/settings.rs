//! Reader presentation settings and the host hooks they drive.

use log::info;

pub const FONT_SCALE_MIN: u8 = 80;
pub const FONT_SCALE_MAX: u8 = 150;
pub const FONT_SCALE_STEP: u8 = 10;
pub const FONT_SCALE_DEFAULT: u8 = 100;

/// Font size in percent, always within `[80, 150]` on a 10% grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct FontScale(u8);

impl FontScale {
    pub const MIN: Self = Self(FONT_SCALE_MIN);
    pub const MAX: Self = Self(FONT_SCALE_MAX);

    /// Clamp into range, then snap to the nearest step (ties round up).
    pub fn clamped(percent: i32) -> Self {
        let min = FONT_SCALE_MIN as i32;
        let max = FONT_SCALE_MAX as i32;
        let step = FONT_SCALE_STEP as i32;

        let clamped = percent.clamp(min, max);
        let snapped = min + ((clamped - min + step / 2) / step) * step;
        Self(snapped.min(max) as u8)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    pub fn stepped(self, increase: bool) -> Self {
        let next = if increase {
            self.0 as i32 + FONT_SCALE_STEP as i32
        } else {
            self.0 as i32 - FONT_SCALE_STEP as i32
        };
        Self::clamped(next)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(FONT_SCALE_DEFAULT)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Document-level effects owned by whatever embeds the reader.
///
/// Calls are fire-and-forget; nothing is read back.
pub trait HostEnvironment {
    fn apply_theme(&mut self, theme: ThemeMode);
    fn set_fullscreen(&mut self, fullscreen: bool);
}

/// Host that ignores every request. Useful headless.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoopHost;

impl HostEnvironment for NoopHost {
    fn apply_theme(&mut self, _theme: ThemeMode) {}

    fn set_fullscreen(&mut self, _fullscreen: bool) {}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReaderSettings {
    font_scale: FontScale,
    theme: ThemeMode,
    fullscreen: bool,
}

impl ReaderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Store `percent` after clamping. Returns the stored value.
    pub fn set_font_scale(&mut self, percent: i32) -> FontScale {
        let next = FontScale::clamped(percent);
        if next != self.font_scale {
            info!(
                "settings: font scale {}% -> {}%",
                self.font_scale.percent(),
                next.percent()
            );
        }
        self.font_scale = next;
        next
    }

    /// One slider notch. Returns `false` when already at the limit.
    pub fn step_font_scale(&mut self, increase: bool) -> bool {
        let next = self.font_scale.stepped(increase);
        if next == self.font_scale {
            return false;
        }
        self.set_font_scale(next.percent() as i32);
        true
    }

    pub fn toggle_theme<H: HostEnvironment>(&mut self, host: &mut H) -> ThemeMode {
        self.theme = self.theme.toggled();
        info!("settings: theme {}", self.theme.as_str());
        host.apply_theme(self.theme);
        self.theme
    }

    pub fn toggle_fullscreen<H: HostEnvironment>(&mut self, host: &mut H) -> bool {
        self.fullscreen = !self.fullscreen;
        info!("settings: fullscreen {}", self.fullscreen);
        host.set_fullscreen(self.fullscreen);
        self.fullscreen
    }
}
