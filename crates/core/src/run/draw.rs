use super::{RunError, RunState, GAME_OVER_DELAY_MS};
use crate::{
    base_score, upgrades, BossEffect, Card, DrawScore, Event, EventBus, GamePhase, PendingPhase,
    RoundOutcome,
};

/// Everything one draw produced, for the embedding layer to display.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResolution {
    pub card: Card,
    pub bet_id: String,
    pub hit: bool,
    pub score: DrawScore,
    pub total: i64,
    pub bank_delta: i64,
    pub target_achieved_now: bool,
    pub outcome: RoundOutcome,
}

impl RunState {
    /// Select the wager for the next draw. Selecting inside the locked
    /// category after a hit is rejected; selecting any other category
    /// clears the lock immediately.
    pub fn select_bet(&mut self, bet_id: &str) -> Result<(), RunError> {
        if self.state.phase != GamePhase::Gameplay {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let bet = self
            .content
            .bet_by_id(bet_id)
            .ok_or_else(|| RunError::UnknownBet(bet_id.to_string()))?;
        if self.content.bet_disabled(self.state.round_number, bet_id) {
            return Err(RunError::BetDisabled(bet_id.to_string()));
        }
        if self.state.require_bet_change_after_hit {
            match self.state.locked_bet_category {
                Some(locked) if locked == bet.category => {
                    return Err(RunError::BetCategoryLocked(locked));
                }
                Some(_) => self.state.clear_category_lock(),
                None => {}
            }
        }
        self.state.selected_bet_id = Some(bet_id.to_string());
        Ok(())
    }

    /// Resolve one draw against the selected wager.
    pub fn draw(&mut self, events: &mut EventBus) -> Result<DrawResolution, RunError> {
        if self.state.phase != GamePhase::Gameplay {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.state.outcome != RoundOutcome::Active {
            return Err(RunError::RoundNotActive);
        }
        let bet_id = self
            .state
            .selected_bet_id
            .clone()
            .ok_or(RunError::NoBetSelected)?;
        let bet = self
            .content
            .bet_by_id(&bet_id)
            .ok_or_else(|| RunError::UnknownBet(bet_id.clone()))?
            .clone();
        if self.content.bet_disabled(self.state.round_number, &bet_id) {
            return Err(RunError::BetDisabled(bet_id));
        }
        if self.state.require_bet_change_after_hit {
            match self.state.locked_bet_category {
                Some(locked) if locked == bet.category => {
                    return Err(RunError::BetCategoryLocked(locked));
                }
                Some(_) => self.state.clear_category_lock(),
                None => {}
            }
        }
        if self.state.draws_remaining <= 0 {
            return Err(RunError::NoDrawsLeft);
        }

        let card = self.deck.draw_one(&mut self.rng);
        let base = base_score(&card);
        let hit = bet.kind.matches(&card);

        let combo = upgrades::combo_bonus(&self.owned, self.state.combo_streak);
        // Comeback bonus: a hit immediately after a miss.
        let comeback = if hit && self.state.last_bet_hit == Some(false) {
            upgrades::comeback_multiplier(&self.owned)
        } else {
            0.0
        };
        let bet_bonus = upgrades::bet_bonus_map(&self.owned)
            .get(&bet_id)
            .copied()
            .unwrap_or(0.0);
        let global = upgrades::global_multiplier(&self.owned);

        let mut multiplier = bet.base_multiplier + bet_bonus + combo + comeback + global;
        if let Some(BossEffect::ReduceMultipliers { value }) = self.current_boss_effect() {
            multiplier *= value;
        }

        let score = DrawScore {
            base,
            hit,
            multiplier,
            flat_bonus: self.effective_flat_bonus(),
        };
        let total = score.total();

        if hit {
            self.state.combo_streak += 1;
            self.state.locked_bet_category = Some(bet.category);
            self.state.require_bet_change_after_hit = true;
        } else {
            self.state.combo_streak = 0;
            self.state.clear_category_lock();
        }
        self.state.last_bet_hit = Some(hit);

        let mut bank_delta = upgrades::conditional_bank_delta(&self.owned, hit);
        if !hit {
            if let Some(BossEffect::BankDrain { value }) = self.current_boss_effect() {
                bank_delta -= value;
            }
        }
        if bank_delta != 0 {
            // Bank floors at zero.
            self.state.bank = (self.state.bank + bank_delta).max(0);
            events.push(Event::BankAdjusted {
                delta: bank_delta,
                bank: self.state.bank,
            });
        }

        self.state.round_score += total;
        self.state.draws_remaining -= 1;
        events.push(Event::DrawResolved {
            card: card.clone(),
            bet_id: bet_id.clone(),
            hit,
            score: total,
            multiplier,
            streak: self.state.combo_streak,
        });

        let target_achieved_now =
            !self.state.target_achieved && self.state.round_score >= self.state.round_target;
        if target_achieved_now {
            self.state.target_achieved = true;
            events.push(Event::TargetReached {
                score: self.state.round_score,
                target: self.state.round_target,
            });
        }

        let outcome = if self.state.draws_remaining <= 0 {
            if self.state.target_achieved {
                self.finalize_round(false, events)?;
                RoundOutcome::Won
            } else {
                self.state.outcome = RoundOutcome::Lost;
                self.state.target_achieved = false;
                self.state.clear_category_lock();
                self.pending = Some(PendingPhase {
                    phase: GamePhase::GameOver,
                    delay_ms: GAME_OVER_DELAY_MS,
                });
                events.push(Event::RoundLost {
                    score: self.state.round_score,
                    target: self.state.round_target,
                });
                RoundOutcome::Lost
            }
        } else {
            RoundOutcome::Active
        };

        Ok(DrawResolution {
            card,
            bet_id,
            hit,
            score,
            total,
            bank_delta,
            target_achieved_now,
            outcome,
        })
    }
}
