use super::{Intent, IntentProvider};

/// Provider that never yields an intent; the app is driven directly.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoInput;

impl NoInput {
    pub const fn new() -> Self {
        Self
    }
}

impl IntentProvider for NoInput {
    type Error = core::convert::Infallible;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        Ok(None)
    }
}
