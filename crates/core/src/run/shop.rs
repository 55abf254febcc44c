use super::{RunError, RunState};
use crate::{Event, EventBus, GamePhase, OwnedUpgrade};

impl RunState {
    /// Buy one offer out of the current shop. The offer is removed from
    /// the shop so it cannot be bought twice; its template joins the
    /// owned relic set immediately.
    pub fn buy(&mut self, offer_id: &str, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != GamePhase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let cost = self
            .shop
            .as_ref()
            .ok_or(RunError::ShopNotAvailable)?
            .offer_by_id(offer_id)
            .ok_or_else(|| RunError::UnknownOffer(offer_id.to_string()))?
            .template
            .cost;
        if self.state.bank < cost {
            return Err(RunError::NotEnoughBank {
                cost,
                bank: self.state.bank,
            });
        }
        let offer = self
            .shop
            .as_mut()
            .ok_or(RunError::ShopNotAvailable)?
            .take_offer(offer_id)
            .ok_or_else(|| RunError::UnknownOffer(offer_id.to_string()))?;

        self.state.bank -= cost;
        self.purchased_shop_ids.push(offer.id.clone());
        self.owned.push(OwnedUpgrade {
            offer_id: offer.id,
            purchased_at_round: self.state.round_number,
            template: offer.template,
        });

        events.push(Event::UpgradePurchased {
            id: offer_id.to_string(),
            cost,
            bank: self.state.bank,
        });
        Ok(())
    }
}
