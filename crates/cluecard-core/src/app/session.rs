impl<R: Rng> Session<R> {
    /// Wrap a loaded word list. Fails when the list cannot fill one round.
    pub fn new(records: Vec<Record>, config: GameConfig, rng: R) -> Result<Self, PoolError> {
        let config = config.normalized();
        let pool = RoundPool::new(records.len(), config.batch_size as usize)?;

        Ok(Self {
            records,
            pool,
            rng,
            config,
            stage: Stage::Setup,
            timer: TimerState::start(0),
            round: Batch::new(),
            previous_round: None,
            round_number: 0,
        })
    }

    /// Apply one event and return the effects the driver must perform.
    ///
    /// Events that do not apply to the current phase change nothing.
    pub fn apply(&mut self, event: Event) -> Effects {
        match (self.stage, event) {
            (Stage::Setup, Event::Input(InputEvent::Start(text))) => self.start(&text),
            (Stage::Running, Event::Tick) => self.tick(),
            (Stage::Running, Event::Input(InputEvent::PauseToggle)) => self.toggle_pause(),
            (Stage::Running, Event::Input(InputEvent::Stop)) => self.stop(),
            (Stage::Expired, Event::Input(InputEvent::Reveal)) => self.reveal(),
            (Stage::Revealed, Event::Input(InputEvent::Continue)) => self.continue_round(),
            (Stage::Expired | Stage::Revealed, Event::Input(InputEvent::Previous)) => {
                self.replay_previous()
            }
            (
                Stage::Running | Stage::Expired | Stage::Revealed,
                Event::Input(InputEvent::NewGame),
            ) => self.new_game(),
            (stage, event) => {
                debug!("session: ignoring {} in {:?}", event.name(), stage);
                Effects::new()
            }
        }
    }

    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Setup => Phase::Setup,
            Stage::Running => Phase::Running {
                paused: self.timer.paused,
            },
            Stage::Expired => Phase::Expired,
            Stage::Revealed => Phase::Revealed,
        }
    }

    /// Control visibility for the current phase.
    pub fn controls(&self) -> Controls {
        match self.stage {
            Stage::Running => Controls {
                pause: true,
                stop: true,
                reveal: false,
                previous: false,
                paused: self.timer.paused,
            },
            Stage::Expired => Controls {
                reveal: true,
                previous: self.previous_round.is_some(),
                ..Controls::HIDDEN
            },
            Stage::Revealed => Controls {
                previous: self.previous_round.is_some(),
                ..Controls::HIDDEN
            },
            Stage::Setup => Controls::HIDDEN,
        }
    }

    pub fn timer(&self) -> TimerState {
        self.timer
    }

    /// Record indices of the current (or just finished) round.
    pub fn round(&self) -> &[usize] {
        &self.round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn pool_remaining(&self) -> usize {
        self.pool.remaining()
    }

    fn start(&mut self, text: &str) -> Effects {
        let mut effects = Effects::new();

        let duration = match parse_duration(text, self.config.max_round_secs) {
            Ok(duration) => duration,
            Err(err) => {
                info!("session: rejected round length {:?}: {}", text, err);
                effects.emit(Effect::RejectDuration(err));
                return effects;
            }
        };

        self.pool.init_session(&mut self.rng);
        self.round_number = 0;
        self.previous_round = None;
        let batch = self.pool.next_batch(&mut self.rng);
        self.begin_round(duration, batch, &mut effects);
        effects
    }

    fn continue_round(&mut self) -> Effects {
        let mut effects = Effects::new();
        let batch = self.pool.next_batch(&mut self.rng);
        self.previous_round = Some(mem::take(&mut self.round));
        self.begin_round(self.timer.duration, batch, &mut effects);
        effects
    }

    fn replay_previous(&mut self) -> Effects {
        let mut effects = Effects::new();
        let Some(batch) = self.previous_round.take() else {
            debug!("session: no earlier round to replay");
            return effects;
        };

        self.previous_round = Some(mem::take(&mut self.round));
        self.begin_round(self.timer.duration, batch, &mut effects);
        effects
    }

    fn begin_round(&mut self, duration: u32, batch: Batch, effects: &mut Effects) {
        self.stage = Stage::Running;
        self.timer = TimerState::start(duration);
        self.round_number = self.round_number.saturating_add(1);
        self.round = batch;

        info!(
            "round {}: started duration={}s cards={} pool_left={}",
            self.round_number,
            duration,
            self.round.len(),
            self.pool.remaining()
        );

        effects.emit(Effect::RenderRound {
            round: self.round_number,
            batch: self.round.clone(),
        });
        effects.emit(Effect::RenderTimer(self.timer.clock_text()));
        effects.emit(Effect::SetControls(self.controls()));
        effects.emit(Effect::ArmTick);
    }

    fn toggle_pause(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.timer.paused = !self.timer.paused;
        info!(
            "round {}: {} at {}s",
            self.round_number,
            if self.timer.paused { "paused" } else { "resumed" },
            self.timer.remaining
        );
        effects.emit(Effect::SetControls(self.controls()));
        effects
    }

    fn tick(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.timer.tick() {
            return effects;
        }

        effects.emit(Effect::RenderTimer(self.timer.clock_text()));
        if self.timer.is_expired() {
            info!("round {}: time is up", self.round_number);
            self.finish_round(&mut effects);
        } else if self.timer.remaining <= self.config.cue_window_secs as u32 {
            effects.emit(Effect::PlayCue);
        }
        effects
    }

    fn stop(&mut self) -> Effects {
        let mut effects = Effects::new();
        info!(
            "round {}: stopped with {}s left",
            self.round_number, self.timer.remaining
        );
        effects.emit(Effect::RenderTimer(format_clock(0)));
        self.finish_round(&mut effects);
        effects
    }

    fn finish_round(&mut self, effects: &mut Effects) {
        self.timer.expire();
        self.stage = Stage::Expired;
        effects.emit(Effect::DisarmTick);
        effects.emit(Effect::StopCue);
        effects.emit(Effect::SetControls(self.controls()));
    }

    fn reveal(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.stage = Stage::Revealed;
        effects.emit(Effect::DisarmTick);
        effects.emit(Effect::RenderReveal(self.round.clone()));
        effects.emit(Effect::SetControls(self.controls()));
        effects
    }

    fn new_game(&mut self) -> Effects {
        let mut effects = Effects::new();
        info!("session: back to setup after {} rounds", self.round_number);
        self.stage = Stage::Setup;
        self.timer = TimerState::start(0);
        self.round.clear();
        self.previous_round = None;
        self.round_number = 0;
        effects.emit(Effect::DisarmTick);
        effects.emit(Effect::StopCue);
        effects.emit(Effect::SetControls(self.controls()));
        effects.emit(Effect::ShowSetup);
        effects
    }
}
