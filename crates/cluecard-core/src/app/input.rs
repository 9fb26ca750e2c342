impl<R, IN, P, C> GameApp<R, IN, P, C>
where
    R: Rng,
    IN: InputProvider,
    P: Presenter,
    C: CuePlayer,
{
    fn process_inputs(&mut self, now_ms: u64) -> bool {
        let mut rendered = false;

        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => rendered |= self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider failed; dropping this poll");
                    break;
                }
            }
        }

        rendered
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) -> bool {
        debug!("input: {} in {:?}", event.name(), self.session.phase());
        let effects = self.session.apply(Event::Input(event));
        self.run_effects(effects, now_ms)
    }
}
