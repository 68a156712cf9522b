use embassy_executor::Spawner;
use embassy_futures::select::{Either3, select3};
use embassy_time::{Instant, Timer};
use log::info;
use pageturn_core::{
    app::{ReaderApp, ReaderConfig, TickResult},
    content::default_sample_pages,
};

use host::TerminalHost;
use intents::{ChannelIntents, INTENTS, QUIT};
use terminal::TerminalRenderer;

#[path = "main/host.rs"]
mod host;
#[path = "main/intents.rs"]
mod intents;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Pageturn";
const TURN_MS: u16 = 300;
const FRAME_INTERVAL_MS: u64 = 50;
const IDLE_POLL_MS: u64 = 1_000;
const TERMINAL_COLUMNS: usize = 72;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("boot: pageturn starting");

    if let Err(err) = intents::spawn_stdin_reader() {
        log::error!("stdin reader failed to start: {}", err);
        std::process::exit(1);
    }

    let config = ReaderConfig {
        turn_ms: TURN_MS,
        ..ReaderConfig::default()
    };
    let mut app = ReaderApp::new(
        default_sample_pages(),
        ChannelIntents::new(),
        TerminalHost::new(),
        config,
        TITLE,
    );
    let mut renderer = TerminalRenderer::new(TERMINAL_COLUMNS);
    let boot = Instant::now();

    loop {
        let now_ms = boot.elapsed().as_millis();
        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(now_ms, |screen| renderer.render(&screen));
        }

        let delay_ms = app
            .next_wake_ms(now_ms, FRAME_INTERVAL_MS)
            .map(|wake_ms| wake_ms.saturating_sub(now_ms))
            .unwrap_or(IDLE_POLL_MS);

        match select3(
            INTENTS.ready_to_receive(),
            QUIT.wait(),
            Timer::after_millis(delay_ms),
        )
        .await
        {
            Either3::First(()) | Either3::Third(()) => {}
            Either3::Second(()) => break,
        }
    }

    info!("pageturn exiting");
    drop(app);
    renderer.restore();
    std::process::exit(0);
}
