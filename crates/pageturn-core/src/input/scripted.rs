use super::{Intent, IntentProvider};

/// Replays a fixed list of intents, one per poll.
#[derive(Debug, Clone)]
pub struct ScriptedIntents<'a> {
    intents: &'a [Intent],
    cursor: usize,
}

impl<'a> ScriptedIntents<'a> {
    pub const fn new(intents: &'a [Intent]) -> Self {
        Self { intents, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.intents.len().saturating_sub(self.cursor)
    }
}

impl IntentProvider for ScriptedIntents<'_> {
    type Error = core::convert::Infallible;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        let Some(intent) = self.intents.get(self.cursor).cloned() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(intent))
    }
}
