use super::*;
use crate::{
    content::{Page, SAMPLE_CHAPTERS, StaticPages, default_sample_pages},
    input::{NoInput, ScriptedIntents},
    render::AnimationKind,
    sequencer::Direction,
    settings::{NoopHost, ThemeMode},
};

#[derive(Default)]
struct RecordingHost {
    themes: std::vec::Vec<ThemeMode>,
    fullscreen: std::vec::Vec<bool>,
}

impl HostEnvironment for RecordingHost {
    fn apply_theme(&mut self, theme: ThemeMode) {
        self.themes.push(theme);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen.push(fullscreen);
    }
}

struct FailingInput;

impl IntentProvider for FailingInput {
    type Error = ();

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        Err(())
    }
}

/// Stays silent for a number of tick rounds, then yields one intent.
struct DelayedIntent {
    silent_rounds: u8,
    intent: Option<Intent>,
}

impl IntentProvider for DelayedIntent {
    type Error = ();

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        if self.silent_rounds > 0 {
            self.silent_rounds -= 1;
            return Ok(None);
        }
        Ok(self.intent.take())
    }
}

const THREE_PAGES: [Page<'static>; 3] = [
    Page::new("One", "first"),
    Page::new("Two", "second"),
    Page::new("Three", "third"),
];

fn sample_app() -> ReaderApp<StaticPages<'static>, NoInput, NoopHost> {
    ReaderApp::new(
        default_sample_pages(),
        NoInput::new(),
        NoopHost,
        ReaderConfig::default(),
        "Test",
    )
}

#[test]
fn mounts_with_defaults() {
    let mut app = sample_app();

    assert_eq!(app.sequencer().index(), 0);
    assert!(!app.sequencer().transitioning());
    assert_eq!(app.settings().font_scale().percent(), 100);
    assert_eq!(app.settings().theme(), ThemeMode::Light);
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(16), TickResult::NoRender);
}

#[test]
fn two_page_walkthrough() {
    let mut app = sample_app();
    let _ = app.tick(0);

    app.apply_intent(Intent::Advance, 0);
    assert!(app.sequencer().transitioning());
    assert_eq!(app.sequencer().direction(), Some(Direction::Forward));
    assert_eq!(app.sequencer().index(), 0);
    assert_eq!(app.tick(0), TickResult::RenderRequested);

    // Animation frames keep the renderer busy inside the window.
    assert_eq!(app.tick(150), TickResult::RenderRequested);
    assert_eq!(app.sequencer().index(), 0);

    assert_eq!(app.tick(300), TickResult::RenderRequested);
    assert!(!app.sequencer().transitioning());
    assert_eq!(app.sequencer().index(), 1);
    assert_eq!(
        app.current_page().map(|page| page.title),
        Some(SAMPLE_CHAPTERS[1].title)
    );

    app.apply_intent(Intent::Advance, 400);
    assert!(!app.sequencer().transitioning());
    assert_eq!(app.sequencer().index(), 1);
    assert_eq!(app.tick(400), TickResult::NoRender);
}

#[test]
fn scripted_burst_turns_once() {
    let intents = [Intent::Advance, Intent::Advance, Intent::Retreat];
    let mut app = ReaderApp::new(
        default_sample_pages(),
        ScriptedIntents::new(&intents),
        NoopHost,
        ReaderConfig::default(),
        "Test",
    );

    let _ = app.tick(0);
    assert_eq!(app.sequencer().direction(), Some(Direction::Forward));
    let _ = app.tick(300);
    assert_eq!(app.sequencer().index(), 1);
    assert!(!app.sequencer().transitioning());
}

#[test]
fn screen_reflects_state() {
    let mut app = sample_app();
    app.apply_intent(Intent::SetFontScale(999), 0);
    app.apply_intent(Intent::Advance, 0);

    let mut seen = None;
    app.with_screen(150, |screen| {
        seen = Some((
            screen.page.map(|page| std::string::String::from(page.title)),
            std::string::String::from(screen.page_label),
            screen.can_retreat,
            screen.can_advance,
            screen.turn.map(|frame| (frame.kind, frame.progress_pct)),
            screen.font_scale.percent(),
        ));
    });

    assert_eq!(
        seen,
        Some((
            Some(std::string::String::from("Chapter 1: Introduction")),
            std::string::String::from("Page 1 of 2"),
            false,
            true,
            Some((AnimationKind::PageTurnForward, 50)),
            150,
        ))
    );

    let _ = app.tick(300);
    let mut label = std::string::String::new();
    let mut turn = Some(None);
    app.with_screen(300, |screen| {
        label.push_str(screen.page_label);
        turn = Some(screen.turn);
    });
    assert_eq!(label, "Page 2 of 2");
    assert_eq!(turn, Some(None));
}

#[test]
fn jump_intents_apply_without_transition() {
    let mut app = sample_app();

    app.apply_intent(Intent::JumpTo(2), 0);
    assert_eq!(app.sequencer().index(), 1);
    assert!(!app.sequencer().transitioning());

    app.apply_intent(Intent::JumpTo(3), 0);
    assert_eq!(app.sequencer().index(), 1);

    let mut text = heapless::String::new();
    let _ = text.push_str("1");
    app.apply_intent(Intent::JumpToText(text), 0);
    assert_eq!(app.sequencer().index(), 0);

    let mut text = heapless::String::new();
    let _ = text.push_str("x");
    app.apply_intent(Intent::JumpToText(text), 0);
    assert_eq!(app.sequencer().index(), 0);
}

#[test]
fn settings_intents_reach_host() {
    let mut app = ReaderApp::new(
        default_sample_pages(),
        NoInput::new(),
        RecordingHost::default(),
        ReaderConfig::default(),
        "Test",
    );

    app.apply_intent(Intent::ToggleTheme, 0);
    app.apply_intent(Intent::ToggleTheme, 0);
    app.apply_intent(Intent::ToggleFullscreen, 0);

    assert_eq!(app.settings().theme(), ThemeMode::Light);
    assert!(app.settings().fullscreen());
    // Mount syncs the host first.
    assert_eq!(
        app.host().themes,
        [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
    assert_eq!(app.host().fullscreen, [true]);
}

#[test]
fn font_steps_and_initial_scale_are_clamped() {
    let mut app = ReaderApp::new(
        default_sample_pages(),
        NoInput::new(),
        NoopHost,
        ReaderConfig {
            font_scale: 5,
            ..ReaderConfig::default()
        },
        "Test",
    );
    assert_eq!(app.settings().font_scale().percent(), 80);

    let _ = app.tick(0);
    app.apply_intent(Intent::FontScaleStep { increase: false }, 10);
    assert_eq!(app.tick(10), TickResult::NoRender);

    app.apply_intent(Intent::FontScaleStep { increase: true }, 20);
    assert_eq!(app.settings().font_scale().percent(), 90);
    assert_eq!(app.tick(20), TickResult::RenderRequested);
}

#[test]
fn input_errors_do_not_break_reading() {
    let mut app = ReaderApp::new(
        default_sample_pages(),
        FailingInput,
        NoopHost,
        ReaderConfig::default(),
        "Test",
    );

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(10), TickResult::NoRender);
    assert_eq!(app.sequencer().index(), 0);
}

#[test]
fn empty_catalog_renders_placeholder() {
    let mut app = ReaderApp::new(
        StaticPages::new(&[]),
        NoInput::new(),
        NoopHost,
        ReaderConfig::default(),
        "Test",
    );
    app.apply_intent(Intent::Advance, 0);
    assert!(!app.sequencer().transitioning());

    let mut page_missing = false;
    let mut label = std::string::String::new();
    app.with_screen(0, |screen| {
        page_missing = screen.page.is_none();
        label.push_str(screen.page_label);
    });
    assert!(page_missing);
    assert_eq!(label, "No pages");
}

#[test]
fn wake_hint_only_while_turning() {
    let mut app = sample_app();
    assert_eq!(app.next_wake_ms(0, 16), None);
    app.apply_intent(Intent::Advance, 0);
    assert_eq!(app.next_wake_ms(0, 16), Some(16));
}

#[test]
fn intent_on_landing_tick_starts_next_turn() {
    let mut app = ReaderApp::new(
        StaticPages::new(&THREE_PAGES),
        DelayedIntent {
            silent_rounds: 1,
            intent: Some(Intent::Advance),
        },
        NoopHost,
        ReaderConfig::default(),
        "Test",
    );

    app.apply_intent(Intent::Advance, 0);
    let _ = app.tick(100);
    assert_eq!(app.sequencer().index(), 0);

    // Window closed at 300; the queued advance arrives on the next tick.
    assert_eq!(app.tick(310), TickResult::RenderRequested);
    assert_eq!(app.sequencer().index(), 1);
    assert!(app.sequencer().transitioning());
    assert_eq!(app.sequencer().direction(), Some(Direction::Forward));

    let _ = app.tick(610);
    assert_eq!(app.sequencer().index(), 2);
    assert!(!app.sequencer().transitioning());
}

#[test]
fn direct_intent_after_window_is_not_busy() {
    let mut app = ReaderApp::new(
        StaticPages::new(&THREE_PAGES),
        NoInput::new(),
        NoopHost,
        ReaderConfig::default(),
        "Test",
    );
    let _ = app.tick(0);

    app.apply_intent(Intent::Advance, 0);
    let _ = app.tick(0);
    app.apply_intent(Intent::Retreat, 400);
    assert_eq!(app.sequencer().index(), 1);
    assert_eq!(app.sequencer().direction(), Some(Direction::Backward));
    assert_eq!(app.tick(400), TickResult::RenderRequested);

    let _ = app.tick(700);
    assert_eq!(app.sequencer().index(), 0);
}

#[test]
fn jump_after_window_lands_pending_turn() {
    let mut app = sample_app();
    let _ = app.tick(0);
    app.apply_intent(Intent::JumpTo(2), 10);
    assert_eq!(app.tick(10), TickResult::RenderRequested);

    app.apply_intent(Intent::Retreat, 20);
    let _ = app.tick(20);
    // A later jump lands the closed window first.
    app.apply_intent(Intent::JumpTo(2), 500);
    assert_eq!(app.sequencer().index(), 1);
    assert!(!app.sequencer().transitioning());
    assert_eq!(app.tick(500), TickResult::RenderRequested);
}
