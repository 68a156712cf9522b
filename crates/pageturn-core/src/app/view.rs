impl<C, IN, H> ReaderApp<C, IN, H>
where
    C: PageCatalog,
    IN: IntentProvider,
    H: HostEnvironment,
{
    pub fn new(
        pages: C,
        input: IN,
        mut host: H,
        config: ReaderConfig,
        app_title: &'static str,
    ) -> Self {
        let sequencer = PageSequencer::new(
            pages.page_count(),
            SequencerConfig {
                turn_ms: config.turn_ms,
            },
        );
        let mut settings = ReaderSettings::new();
        settings.set_font_scale(config.font_scale);
        host.apply_theme(settings.theme());

        info!(
            "app: mounted pages={} turn_ms={} font_scale={}%",
            sequencer.page_count(),
            sequencer.turn_ms(),
            settings.font_scale().percent()
        );

        Self {
            pages,
            input,
            host,
            app_title,
            sequencer,
            settings,
            pending_redraw: true,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.land_due_turn(now_ms);
        self.process_inputs(now_ms);
        self.tick_turn(now_ms)
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let index = self.sequencer.index();
        let count = self.sequencer.page_count();
        let label = page_label(index, count);

        f(Screen {
            app_title: self.app_title,
            page: self.pages.page_at(index),
            page_label: label.as_str(),
            page_index: index,
            page_count: count,
            can_retreat: self.sequencer.can_retreat(),
            can_advance: self.sequencer.can_advance(),
            turn: self.sequencer.turn_animation(now_ms),
            font_scale: self.settings.font_scale(),
            theme: self.settings.theme(),
            fullscreen: self.settings.fullscreen(),
        });
    }

    pub fn current_page(&self) -> Option<Page<'_>> {
        self.pages.page_at(self.sequencer.index())
    }

    pub fn sequencer(&self) -> &PageSequencer {
        &self.sequencer
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Next time `tick` has work to do without new input, if any.
    pub fn next_wake_ms(&self, now_ms: u64, frame_interval_ms: u64) -> Option<u64> {
        self.sequencer
            .transitioning()
            .then(|| now_ms.saturating_add(frame_interval_ms.max(1)))
    }
}
