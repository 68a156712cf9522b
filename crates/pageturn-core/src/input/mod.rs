//! Intent abstraction layer.

mod mock;
mod scripted;

pub use mock::NoInput;
pub use scripted::ScriptedIntents;

use heapless::String as HeaplessString;

pub const JUMP_TEXT_BYTES: usize = 8;

/// Requests emitted by the control surface.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Intent {
    Advance,
    Retreat,
    /// 1-based page number.
    JumpTo(u32),
    /// Raw page-field text; parsed by the sequencer.
    JumpToText(HeaplessString<JUMP_TEXT_BYTES>),
    SetFontScale(i32),
    FontScaleStep {
        increase: bool,
    },
    ToggleTheme,
    ToggleFullscreen,
}

impl Intent {
    /// Parse one line of the terminal command grammar.
    ///
    /// `n`/`next`, `p`/`prev`, `g <n>`/`goto <n>`, `f <n>`/`font <n>`,
    /// `+`, `-`, `t`/`theme`, `fs`/`fullscreen`.
    pub fn parse_command(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?;
        let argument = parts.next();
        if parts.next().is_some() {
            return None;
        }

        let intent = match (command, argument) {
            ("n" | "next", None) => Self::Advance,
            ("p" | "prev", None) => Self::Retreat,
            ("+", None) => Self::FontScaleStep { increase: true },
            ("-", None) => Self::FontScaleStep { increase: false },
            ("t" | "theme", None) => Self::ToggleTheme,
            ("fs" | "fullscreen", None) => Self::ToggleFullscreen,
            ("g" | "goto", Some(raw)) => match raw.parse::<u32>() {
                Ok(page_number) => Self::JumpTo(page_number),
                Err(_) => {
                    let mut text = HeaplessString::new();
                    // Not a number at any length; a marker keeps it malformed.
                    if text.push_str(raw).is_err() {
                        let _ = text.push_str("?");
                    }
                    Self::JumpToText(text)
                }
            },
            ("f" | "font", Some(raw)) => Self::SetFontScale(raw.parse().ok()?),
            _ => return None,
        };
        Some(intent)
    }
}

/// Polled intent provider.
pub trait IntentProvider {
    type Error;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error>;
}
