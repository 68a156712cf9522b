//! Chapter paging with a fixed page-flip window.
//!
//! A turn is accepted only while idle. The index moves when the window
//! closes (observed by [`PageSequencer::tick`]), so at most one structural
//! change happens per window no matter how many intents arrive in between.

use log::debug;

use crate::render::{AnimationFrame, AnimationKind, AnimationSpec};

pub const DEFAULT_TURN_MS: u16 = 300;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequencerConfig {
    pub turn_ms: u16,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            turn_ms: DEFAULT_TURN_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn animation(self) -> AnimationKind {
        match self {
            Self::Forward => AnimationKind::PageTurnForward,
            Self::Backward => AnimationKind::PageTurnBackward,
        }
    }
}

/// Why an intent was dropped. Only ever logged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Rejection {
    Busy,
    AtFirstPage,
    AtLastPage,
    OutOfRange,
    Malformed,
}

impl Rejection {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Busy => "turn in progress",
            Self::AtFirstPage => "already at first page",
            Self::AtLastPage => "already at last page",
            Self::OutOfRange => "page out of range",
            Self::Malformed => "page number malformed",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingTurn {
    direction: Direction,
    started_ms: u64,
    due_ms: u64,
}

#[derive(Clone, Debug)]
pub struct PageSequencer {
    page_count: u16,
    index: u16,
    turn_ms: u16,
    pending: Option<PendingTurn>,
}

impl PageSequencer {
    pub fn new(page_count: u16, config: SequencerConfig) -> Self {
        Self {
            page_count,
            index: 0,
            turn_ms: config.turn_ms.max(1),
            pending: None,
        }
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn page_count(&self) -> u16 {
        self.page_count
    }

    pub fn turn_ms(&self) -> u16 {
        self.turn_ms
    }

    /// Flip window state as of the last clock-aware call (`tick`, `advance`,
    /// `retreat`, `jump_to*`). Use [`Self::transitioning_at`] to ask about a
    /// specific instant.
    pub fn transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn transitioning_at(&self, now_ms: u64) -> bool {
        self.pending.is_some_and(|turn| now_ms < turn.due_ms)
    }

    /// Direction of the in-flight turn, `None` while idle. Same clock caveat
    /// as [`Self::transitioning`].
    pub fn direction(&self) -> Option<Direction> {
        self.pending.map(|turn| turn.direction)
    }

    pub fn can_advance(&self) -> bool {
        self.index.saturating_add(1) < self.page_count
    }

    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    pub fn advance(&mut self, now_ms: u64) -> bool {
        let result = self.begin_turn(Direction::Forward, now_ms);
        self.report("advance", result)
    }

    pub fn retreat(&mut self, now_ms: u64) -> bool {
        let result = self.begin_turn(Direction::Backward, now_ms);
        self.report("retreat", result)
    }

    /// Jump to a 1-based page number. Applies immediately, no flip window.
    pub fn jump_to(&mut self, page_number: u32, now_ms: u64) -> bool {
        let result = self.jump(page_number, now_ms);
        self.report("jump", result)
    }

    /// Same as [`Self::jump_to`] for raw text typed into a page field.
    pub fn jump_to_text(&mut self, raw: &str, now_ms: u64) -> bool {
        let result = match raw.trim().parse::<u32>() {
            Ok(page_number) => self.jump(page_number, now_ms),
            Err(_) => Err(Rejection::Malformed),
        };
        self.report("jump", result)
    }

    /// Close the flip window once it is due. Returns `true` when the index moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(turn) = self.pending else {
            return false;
        };
        if now_ms < turn.due_ms {
            return false;
        }

        self.pending = None;
        let previous = self.index;
        self.index = match turn.direction {
            Direction::Forward => self.index.saturating_add(1).min(self.last_index()),
            Direction::Backward => self.index.saturating_sub(1),
        };
        debug!(
            "sequencer: turn {:?} landed page={}/{} (from {})",
            turn.direction,
            self.index.saturating_add(1),
            self.page_count,
            previous.saturating_add(1)
        );
        self.index != previous
    }

    /// Flip progress while a turn is pending. Holds at 100% if the window
    /// already elapsed but has not been ticked yet.
    pub fn turn_animation(&self, now_ms: u64) -> Option<AnimationFrame> {
        let turn = self.pending?;
        let kind = turn.direction.animation();
        let frame = AnimationSpec::new(kind, turn.started_ms, self.turn_ms)
            .frame(now_ms)
            .unwrap_or(AnimationFrame {
                kind,
                progress_pct: 100,
            });
        Some(frame)
    }

    fn begin_turn(&mut self, direction: Direction, now_ms: u64) -> Result<(), Rejection> {
        // A window that already closed lands first; only an open one is busy.
        self.tick(now_ms);
        if self.pending.is_some() {
            return Err(Rejection::Busy);
        }
        match direction {
            Direction::Forward if !self.can_advance() => return Err(Rejection::AtLastPage),
            Direction::Backward if !self.can_retreat() => return Err(Rejection::AtFirstPage),
            _ => {}
        }

        self.pending = Some(PendingTurn {
            direction,
            started_ms: now_ms,
            due_ms: now_ms.saturating_add(self.turn_ms as u64),
        });
        Ok(())
    }

    fn jump(&mut self, page_number: u32, now_ms: u64) -> Result<(), Rejection> {
        self.tick(now_ms);
        if self.pending.is_some() {
            return Err(Rejection::Busy);
        }
        if page_number == 0 || page_number > self.page_count as u32 {
            return Err(Rejection::OutOfRange);
        }

        self.index = (page_number - 1) as u16;
        Ok(())
    }

    fn last_index(&self) -> u16 {
        self.page_count.saturating_sub(1)
    }

    fn report(&self, intent: &str, result: Result<(), Rejection>) -> bool {
        match result {
            Ok(()) => {
                debug!(
                    "sequencer: {} accepted page={}/{} transitioning={}",
                    intent,
                    self.index.saturating_add(1),
                    self.page_count,
                    self.transitioning()
                );
                true
            }
            Err(rejection) => {
                debug!("sequencer: {} ignored ({})", intent, rejection.as_str());
                false
            }
        }
    }
}
