impl<R, IN, P, C> GameApp<R, IN, P, C>
where
    R: Rng,
    IN: InputProvider,
    P: Presenter,
    C: CuePlayer,
{
    /// Drain input, then fire every tick that came due by `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let mut rendered = false;

        if self.pending_setup {
            self.pending_setup = false;
            let mut effects = Effects::new();
            effects.emit(Effect::ShowSetup);
            rendered |= self.run_effects(effects, now_ms);
        }

        rendered |= self.process_inputs(now_ms);

        while self.schedule.take_due(now_ms) {
            let effects = self.session.apply(Event::Tick);
            rendered |= self.run_effects(effects, now_ms);
        }

        if rendered {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Feed one event directly, bypassing the input provider.
    pub fn dispatch(&mut self, event: Event, now_ms: u64) -> TickResult {
        let effects = self.session.apply(event);
        if self.run_effects(effects, now_ms) {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn run_effects(&mut self, effects: Effects, now_ms: u64) -> bool {
        let mut rendered = false;

        for effect in effects {
            let result = match effect {
                Effect::ShowSetup => self.presenter.show_setup(),
                Effect::RejectDuration(err) => self.presenter.show_invalid_input(err),
                Effect::RenderRound { round, batch } => {
                    let cards = self.session.round_cards(&batch);
                    self.presenter.render_round(round, &cards)
                }
                Effect::RenderTimer(text) => self.presenter.render_timer(&text),
                Effect::RenderReveal(batch) => {
                    let items = self.session.reveal_items(&batch);
                    self.presenter.render_reveal(&items)
                }
                Effect::SetControls(controls) => self.presenter.set_controls(controls),
                Effect::PlayCue => {
                    if let Err(err) = self.cue.play_cue() {
                        warn!("cue: play failed: {}", err);
                    }
                    continue;
                }
                Effect::StopCue => {
                    if let Err(err) = self.cue.stop_cue() {
                        warn!("cue: stop failed: {}", err);
                    }
                    continue;
                }
                Effect::ArmTick => {
                    self.schedule.arm(now_ms);
                    continue;
                }
                Effect::DisarmTick => {
                    self.schedule.cancel();
                    continue;
                }
            };

            rendered = true;
            if let Err(err) = result {
                warn!("presenter: render failed: {:?}", err);
            }
        }

        rendered
    }
}
