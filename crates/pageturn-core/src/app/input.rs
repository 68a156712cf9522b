impl<C, IN, H> ReaderApp<C, IN, H>
where
    C: PageCatalog,
    IN: IntentProvider,
    H: HostEnvironment,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_intent() {
                Ok(Some(intent)) => self.apply_intent(intent, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("app: intent provider failed; skipping input this tick");
                    break;
                }
            }
        }
    }

    /// Apply one intent. Rejected intents leave state untouched.
    pub fn apply_intent(&mut self, intent: Intent, now_ms: u64) {
        debug!("app: intent {:?} at {}ms", intent, now_ms);
        self.land_due_turn(now_ms);

        let changed = match intent {
            Intent::Advance => self.sequencer.advance(now_ms),
            Intent::Retreat => self.sequencer.retreat(now_ms),
            Intent::JumpTo(page_number) => self.sequencer.jump_to(page_number, now_ms),
            Intent::JumpToText(raw) => self.sequencer.jump_to_text(raw.as_str(), now_ms),
            Intent::SetFontScale(percent) => {
                let before = self.settings.font_scale();
                self.settings.set_font_scale(percent) != before
            }
            Intent::FontScaleStep { increase } => self.settings.step_font_scale(increase),
            Intent::ToggleTheme => {
                self.settings.toggle_theme(&mut self.host);
                true
            }
            Intent::ToggleFullscreen => {
                self.settings.toggle_fullscreen(&mut self.host);
                true
            }
        };

        if changed {
            self.pending_redraw = true;
        }
    }
}
