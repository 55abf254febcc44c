use super::{RunError, RunState, SHOP_TRANSITION_DELAY_MS};
use crate::{
    upgrades, BossEffect, Deck, Event, EventBus, GamePhase, PendingPhase, PlayerProfile,
    RoundOutcome, ShopState,
};

impl RunState {
    /// Bank the round (win path). With `convert_unused`, leftover draws are
    /// traded for guaranteed points before interest is applied. The shop
    /// for the next round is generated against the current relic set.
    pub fn finalize_round(
        &mut self,
        convert_unused: bool,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        if self.state.phase != GamePhase::Gameplay {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.state.outcome != RoundOutcome::Active {
            return Err(RunError::RoundNotActive);
        }
        if !self.state.target_achieved && self.state.round_score < self.state.round_target {
            return Err(RunError::TargetNotReached);
        }

        if convert_unused && self.state.draws_remaining > 0 {
            let conversion = self.state.draws_remaining * self.config.guaranteed_draw_value;
            self.state.round_score += conversion;
            events.push(Event::DrawsConverted {
                draws: self.state.draws_remaining,
                points: conversion,
            });
        }
        let final_score = self.state.round_score;

        let pre_interest = self.state.bank + final_score;
        let rate = match self.current_boss_effect() {
            Some(BossEffect::NoInterest) => 0.0,
            _ => self.interest_rate(),
        };
        let interest = (pre_interest as f64 * rate).floor() as i64;
        self.state.bank = pre_interest + interest;

        self.state.draws_remaining = 0;
        self.state.outcome = RoundOutcome::Won;
        self.state.target_achieved = false;
        self.state.clear_category_lock();

        self.shop = Some(ShopState::generate(
            self.state.round_number + 1,
            &self.owned,
            &self.content,
            &self.config.shop,
            &mut self.rng,
        ));
        self.purchased_shop_ids.clear();
        self.state.phase = GamePhase::ShopTransition;
        self.pending = Some(PendingPhase {
            phase: GamePhase::Shop,
            delay_ms: SHOP_TRANSITION_DELAY_MS,
        });

        events.push(Event::RoundWon {
            score: final_score,
            interest,
            bank: self.state.bank,
        });
        events.push(Event::PhaseChanged {
            phase: GamePhase::ShopTransition,
        });
        Ok(())
    }

    /// Trade unused draws for guaranteed points. Only valid once the
    /// target has been reached with draws still in hand.
    pub fn convert_unused_draws(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if !self.state.target_achieved {
            return Err(RunError::TargetNotReached);
        }
        if self.state.draws_remaining <= 0 {
            return Err(RunError::NothingToConvert);
        }
        self.finalize_round(true, events)
    }

    /// Leave the shop and begin the next round: fresh deck, new target,
    /// full draw allowance. Reports the reached round to the profile.
    pub fn next_round(
        &mut self,
        profile: Option<&mut PlayerProfile>,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        if self.state.phase != GamePhase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let next = self.state.round_number + 1;
        self.deck = Deck::fresh(self.deck.kind, &mut self.rng);

        let boss = self.content.boss_for_round(next);
        let boss_id = boss.map(|b| b.id.clone());
        let boss_mult = boss.map(|b| b.target_multiplier);
        let target =
            self.config
                .target
                .target_for(next, upgrades::rarity_score(&self.owned), boss_mult);

        self.state.round_number = next;
        self.state.round_target = target;
        self.state.round_score = 0;
        self.state.draws_remaining = self.draw_allowance();
        self.state.outcome = RoundOutcome::Active;
        self.state.selected_bet_id = None;
        self.state.target_achieved = false;
        self.state.clear_category_lock();
        self.shop = None;
        self.purchased_shop_ids.clear();
        self.pending = None;
        self.state.phase = GamePhase::Gameplay;

        if let Some(profile) = profile {
            if profile.record_round(next, &self.content.decks) {
                events.push(Event::BestRoundImproved { round: next });
            }
        }

        events.push(Event::PhaseChanged {
            phase: GamePhase::Gameplay,
        });
        events.push(Event::RoundStarted {
            round: next,
            target,
            draws: self.state.draws_remaining,
            boss: boss_id,
        });
        Ok(())
    }
}
