use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use log::warn;
use pageturn_core::{
    render::{AnimationFrame, AnimationKind, Screen},
    settings::{FONT_SCALE_MAX, FONT_SCALE_MIN, FONT_SCALE_STEP, ThemeMode},
};

const MIN_TEXT_COLUMNS: usize = 20;
const TURN_BAR_CELLS: usize = 20;

/// Paints a [`Screen`] through crossterm.
pub(super) struct TerminalRenderer {
    columns: usize,
}

impl TerminalRenderer {
    pub(super) fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(MIN_TEXT_COLUMNS),
        }
    }

    pub(super) fn render(&mut self, screen: &Screen<'_>) {
        let mut out = io::stdout().lock();
        if let Err(err) = self.draw(&mut out, screen).and_then(|()| out.flush()) {
            warn!("render: terminal write failed: {}", err);
        }
    }

    pub(super) fn restore(&mut self) {
        if let Err(err) = execute!(io::stdout(), ResetColor, Print("\n")) {
            warn!("render: terminal restore failed: {}", err);
        }
    }

    fn draw<W: Write>(&self, out: &mut W, screen: &Screen<'_>) -> io::Result<()> {
        let (foreground, background) = palette(screen.theme);
        queue!(
            out,
            SetForegroundColor(foreground),
            SetBackgroundColor(background),
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;

        let rule = "-".repeat(self.columns);
        queue!(
            out,
            Print(centered(screen.app_title, self.columns)),
            Print("\n"),
            Print(&rule),
            Print("\n")
        )?;

        let text_columns = text_columns(self.columns, screen.font_scale.percent());
        match screen.page {
            Some(page) => {
                queue!(
                    out,
                    Print("\n"),
                    Print(centered(page.title, self.columns)),
                    Print("\n\n")
                )?;
                for line in wrap(page.body, text_columns) {
                    queue!(out, Print(line), Print("\n"))?;
                }
                if let Some(image) = page.image {
                    queue!(out, Print(format!("\n[image: {}]\n", image)))?;
                }
            }
            None => {
                queue!(
                    out,
                    Print("\n"),
                    Print(centered("Nothing to read", self.columns)),
                    Print("\n\n")
                )?;
            }
        }

        queue!(out, Print("\n"))?;
        if let Some(turn) = screen.turn {
            queue!(out, Print(turn_bar(turn)), Print("\n"))?;
        }
        button(out, "< Previous", screen.can_retreat)?;
        queue!(
            out,
            Print("  "),
            Print(centered(screen.page_label, self.columns.saturating_sub(26))),
            Print("  ")
        )?;
        button(out, "Next >", screen.can_advance)?;
        queue!(
            out,
            Print("\n"),
            Print(&rule),
            Print("\n"),
            Print(format!(
                "A- {} A+ {:>4}%   theme: {}   fullscreen: {}\n",
                font_slider(screen.font_scale.percent()),
                screen.font_scale.percent(),
                screen.theme.as_str(),
                if screen.fullscreen { "on" } else { "off" }
            )),
            ResetColor
        )
    }
}

fn palette(theme: ThemeMode) -> (Color, Color) {
    if theme.is_dark() {
        (Color::White, Color::Black)
    } else {
        (Color::Black, Color::White)
    }
}

/// Disabled buttons are drawn dim.
fn button<W: Write>(out: &mut W, label: &str, enabled: bool) -> io::Result<()> {
    if enabled {
        queue!(out, Print(format!("[{}]", label)))
    } else {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(format!("[{}]", label)),
            SetAttribute(Attribute::NormalIntensity)
        )
    }
}

/// Larger type leaves fewer characters per line.
fn text_columns(columns: usize, font_scale_pct: u8) -> usize {
    (columns * 100 / font_scale_pct.max(1) as usize).max(MIN_TEXT_COLUMNS)
}

fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn turn_bar(turn: AnimationFrame) -> String {
    let filled = (turn.progress_pct as usize * TURN_BAR_CELLS) / 100;
    let (glyph, label) = match turn.kind {
        AnimationKind::PageTurnForward => ('>', "turning forward"),
        AnimationKind::PageTurnBackward => ('<', "turning back"),
    };
    let mut bar = String::with_capacity(TURN_BAR_CELLS);
    for cell in 0..TURN_BAR_CELLS {
        bar.push(if cell < filled { glyph } else { ' ' });
    }
    format!("{} [{}] {:>3}%", label, bar, turn.progress_pct)
}

fn font_slider(percent: u8) -> String {
    let notches = ((FONT_SCALE_MAX - FONT_SCALE_MIN) / FONT_SCALE_STEP) as usize;
    let position = (percent.saturating_sub(FONT_SCALE_MIN) / FONT_SCALE_STEP) as usize;
    let mut slider = String::from("[");
    for notch in 0..=notches {
        slider.push(if notch == position { '|' } else { '=' });
    }
    slider.push(']');
    slider
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
