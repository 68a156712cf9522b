use std::io::{self, BufRead};

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, TryReceiveError},
    signal::Signal,
};
use log::{info, warn};
use pageturn_core::input::{Intent, IntentProvider};

const INTENT_QUEUE_DEPTH: usize = 8;

pub(super) static INTENTS: IntentQueue = Channel::new();
pub(super) static QUIT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

const HELP: &str = "commands: n|next  p|prev  g|goto <page>  f|font <percent>  + -  t|theme  fs|fullscreen  q|quit";

/// Reads commands from stdin on a plain thread and forwards them to the
/// executor. Signals [`QUIT`] on `q` or end of input.
pub(super) fn spawn_stdin_reader() -> io::Result<()> {
    println!("{HELP}");
    std::thread::Builder::new()
        .name("stdin-intents".into())
        .spawn(|| {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("stdin read failed: {}", err);
                        break;
                    }
                };
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                if matches!(command, "q" | "quit") {
                    break;
                }

                match Intent::parse_command(command) {
                    Some(intent) => {
                        if !offer(&INTENTS, intent) {
                            warn!("intent queue full; dropping {:?}", command);
                        }
                    }
                    None => warn!("unknown command {:?}; {}", command, HELP),
                }
            }

            info!("stdin closed");
            QUIT.signal(());
        })?;
    Ok(())
}

type IntentQueue = Channel<CriticalSectionRawMutex, Intent, INTENT_QUEUE_DEPTH>;

/// Enqueue without waiting. Returns `false` when the queue is full.
fn offer(queue: &IntentQueue, intent: Intent) -> bool {
    queue.try_send(intent).is_ok()
}

/// Drains [`INTENTS`] without blocking.
#[derive(Default, Debug, Clone, Copy)]
pub(super) struct ChannelIntents;

impl ChannelIntents {
    pub(super) const fn new() -> Self {
        Self
    }
}

impl IntentProvider for ChannelIntents {
    type Error = core::convert::Infallible;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        match INTENTS.try_receive() {
            Ok(intent) => Ok(Some(intent)),
            Err(TryReceiveError::Empty) => Ok(None),
        }
    }
}
