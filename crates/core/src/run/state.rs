use super::{RunError, RunState};
use crate::{
    upgrades, BossEffect, Content, Deck, DeckKind, DeckModifiers, Event, EventBus, GameConfig,
    GamePhase, GameState, PlayerProfile, RngState, RoundOutcome, SavedRun, ShopState,
};

impl RunState {
    pub fn new(config: GameConfig, content: Content, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let deck = Deck::fresh(DeckKind::Standard, &mut rng);
        Self {
            config,
            content,
            rng,
            deck,
            active_deck_id: String::new(),
            deck_modifiers: DeckModifiers::default(),
            owned: Vec::new(),
            state: GameState::default(),
            shop: None,
            purchased_shop_ids: Vec::new(),
            pending: None,
        }
    }

    /// Begin a fresh run with the chosen deck preset. Discards any
    /// in-progress round state and pending transitions.
    pub fn start_run(
        &mut self,
        deck_id: &str,
        profile: Option<&PlayerProfile>,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        let preset = self
            .content
            .deck_by_id(deck_id)
            .ok_or_else(|| RunError::UnknownDeck(deck_id.to_string()))?;
        if !crate::deck_unlocked_for(profile, preset) {
            return Err(RunError::DeckLocked(deck_id.to_string()));
        }
        let modifiers = preset.modifiers;
        let kind = preset.kind;
        let preset_id = preset.id.clone();

        self.active_deck_id = preset_id;
        self.deck_modifiers = modifiers;
        self.deck = Deck::fresh(kind, &mut self.rng);
        self.owned.clear();
        self.shop = None;
        self.purchased_shop_ids.clear();
        self.pending = None;

        let target = self.config.target.target_for(1, 0, None);
        self.state = GameState {
            round_number: 1,
            round_target: target,
            draws_remaining: self.config.base_draws + modifiers.extra_draws,
            bank: modifiers.starting_bank,
            phase: GamePhase::Gameplay,
            ..GameState::default()
        };

        events.push(Event::PhaseChanged {
            phase: GamePhase::Gameplay,
        });
        events.push(Event::RoundStarted {
            round: 1,
            target,
            draws: self.state.draws_remaining,
            boss: None,
        });
        Ok(())
    }

    /// Jump back to the menu from anywhere. In-flight pending transitions
    /// are dropped so a stale timer can never fire afterwards.
    pub fn reset_to_menu(&mut self, events: &mut EventBus) {
        self.pending = None;
        self.state.phase = GamePhase::Menu;
        events.push(Event::PhaseChanged {
            phase: GamePhase::Menu,
        });
    }

    /// Apply the queued phase change, if any. The embedding layer calls
    /// this once its pacing delay has elapsed.
    pub fn resolve_pending(&mut self, events: &mut EventBus) -> Option<GamePhase> {
        let pending = self.pending.take()?;
        self.state.phase = pending.phase;
        events.push(Event::PhaseChanged {
            phase: pending.phase,
        });
        if pending.phase == GamePhase::Shop {
            let offers = self.shop.as_ref().map(|shop| shop.offers.len()).unwrap_or(0);
            events.push(Event::ShopEntered {
                round: self.state.round_number,
                offers,
            });
        }
        Some(pending.phase)
    }

    /// Draw allowance for a round: base plus deck and relic bonuses.
    pub fn draw_allowance(&self) -> i64 {
        self.config.base_draws + self.deck_modifiers.extra_draws + upgrades::extra_draws(&self.owned)
    }

    /// Aggregated flat bonus with the deck modifier and any boss override
    /// applied. The Accountant (noInterest) halves it; the Nullifier
    /// (reduceFlatBonus) replaces it outright.
    pub fn effective_flat_bonus(&self) -> i64 {
        let bonus = upgrades::flat_bonus(&self.owned) + self.deck_modifiers.flat_bonus;
        match self.current_boss_effect() {
            Some(BossEffect::ReduceFlatBonus { value }) => *value,
            Some(BossEffect::NoInterest) => (bonus as f64 * 0.5).floor() as i64,
            _ => bonus,
        }
    }

    /// Interest rate before the boss check at finalization.
    pub fn interest_rate(&self) -> f64 {
        self.config.base_interest
            + self.deck_modifiers.interest_bonus
            + upgrades::interest_bonus(&self.owned)
    }

    pub fn current_boss_effect(&self) -> Option<&BossEffect> {
        self.content
            .boss_for_round(self.state.round_number)
            .and_then(|boss| boss.effect.as_ref())
    }

    /// Serialize the run into the external persistence shape.
    pub fn snapshot(&self) -> SavedRun {
        SavedRun {
            deck: self.deck.draw.clone(),
            bank: self.state.bank,
            round_number: self.state.round_number,
            round_score: self.state.round_score,
            round_target: Some(self.state.round_target),
            draws_remaining: Some(self.state.draws_remaining),
            round_outcome: Some(self.state.outcome),
            game_phase: Some(self.state.phase),
            selected_bet_id: self.state.selected_bet_id.clone(),
            owned_upgrades: self.owned.clone(),
            target_achieved: self.state.target_achieved,
            current_shop_choices: self
                .shop
                .as_ref()
                .map(|shop| shop.offers.clone())
                .unwrap_or_default(),
            purchased_shop_ids: self.purchased_shop_ids.clone(),
            active_deck_id: Some(self.active_deck_id.clone()),
            deck_kind: Some(self.deck.kind),
            deck_modifiers: self.deck_modifiers,
            locked_bet_category: self.state.locked_bet_category,
            require_bet_change_after_hit: self.state.require_bet_change_after_hit,
            combo_streak: self.state.combo_streak,
            last_bet_hit: self.state.last_bet_hit,
        }
    }

    /// Hydrate a run from a snapshot. Missing fields fall back to sane
    /// defaults; an unknown deck id falls back to the first preset and a
    /// missing draw count to the base allowance.
    pub fn restore(config: GameConfig, content: Content, saved: SavedRun, seed: u64) -> Self {
        let mut run = Self::new(config, content, seed);

        let preset = saved
            .active_deck_id
            .as_deref()
            .and_then(|id| run.content.deck_by_id(id))
            .or_else(|| run.content.decks.first());
        let (deck_id, modifiers, kind) = match preset {
            Some(preset) => (preset.id.clone(), preset.modifiers, preset.kind),
            None => (
                String::new(),
                DeckModifiers::default(),
                saved.deck_kind.unwrap_or(DeckKind::Standard),
            ),
        };
        run.active_deck_id = deck_id;
        run.deck_modifiers = modifiers;
        run.owned = saved.owned_upgrades;
        run.purchased_shop_ids = saved.purchased_shop_ids;

        let round_number = saved.round_number.max(1);
        run.state.round_number = round_number;
        run.state.round_score = saved.round_score.max(0);
        run.state.bank = saved.bank.max(0);
        run.state.selected_bet_id = saved.selected_bet_id;
        run.state.target_achieved = saved.target_achieved;
        run.state.locked_bet_category = saved.locked_bet_category;
        run.state.require_bet_change_after_hit = saved.require_bet_change_after_hit;
        run.state.combo_streak = saved.combo_streak;
        run.state.last_bet_hit = saved.last_bet_hit;
        run.state.outcome = saved.round_outcome.unwrap_or(RoundOutcome::Active);
        run.state.phase = saved.game_phase.unwrap_or(GamePhase::Menu);

        run.state.round_target = saved.round_target.unwrap_or_else(|| {
            let boss_mult = run
                .content
                .boss_for_round(round_number)
                .map(|boss| boss.target_multiplier);
            run.config
                .target
                .target_for(round_number, upgrades::rarity_score(&run.owned), boss_mult)
        });
        run.state.draws_remaining = saved
            .draws_remaining
            .unwrap_or_else(|| run.draw_allowance())
            .max(0);

        run.deck = if saved.deck.is_empty() {
            Deck::fresh(kind, &mut run.rng)
        } else {
            Deck {
                kind,
                draw: saved.deck,
            }
        };
        run.shop = if saved.current_shop_choices.is_empty() {
            None
        } else {
            Some(ShopState {
                offers: saved.current_shop_choices,
            })
        };
        run
    }
}
