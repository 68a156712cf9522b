impl<C, IN, H> ReaderApp<C, IN, H>
where
    C: PageCatalog,
    IN: IntentProvider,
    H: HostEnvironment,
{
    /// Apply a turn whose window has closed. Runs before intents are drained
    /// so an intent arriving on the landing tick sees the idle sequencer.
    fn land_due_turn(&mut self, now_ms: u64) {
        let was_turning = self.sequencer.transitioning();
        let moved = self.sequencer.tick(now_ms);
        if moved || was_turning != self.sequencer.transitioning() {
            self.pending_redraw = true;
        }
    }

    fn tick_turn(&mut self, now_ms: u64) -> TickResult {
        self.land_due_turn(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        if self.sequencer.turn_animation(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }
}
