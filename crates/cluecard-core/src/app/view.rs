impl<R: Rng> Session<R> {
    pub fn round_cards(&self, batch: &[usize]) -> HeaplessVec<RoundCard<'_>, MAX_BATCH_SIZE> {
        let mut cards = HeaplessVec::new();
        for record in batch.iter().filter_map(|&index| self.records.get(index)) {
            let _ = cards.push(RoundCard {
                category: &record.category,
                keyword: &record.keyword,
            });
        }
        cards
    }

    pub fn reveal_items(&self, batch: &[usize]) -> HeaplessVec<RevealItem<'_>, MAX_BATCH_SIZE> {
        let mut items = HeaplessVec::new();
        for record in batch.iter().filter_map(|&index| self.records.get(index)) {
            let _ = items.push(RevealItem {
                category: &record.category,
                keyword: &record.keyword,
                clues: &record.clues,
            });
        }
        items
    }
}

impl<R, IN, P, C> GameApp<R, IN, P, C>
where
    R: Rng,
    IN: InputProvider,
    P: Presenter,
    C: CuePlayer,
{
    pub fn new(session: Session<R>, input: IN, presenter: P, cue: C) -> Self {
        Self {
            session,
            input,
            presenter,
            cue,
            schedule: TickSchedule::new(),
            pending_setup: true,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }
}
