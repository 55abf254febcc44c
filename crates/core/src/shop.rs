use crate::{Content, OwnedUpgrade, RngState, ShopRule, UpgradeDef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One purchasable slot. The offer id is unique per generation so buying an
/// offer retires only the template within this run's ownership lineage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopOffer {
    pub id: String,
    pub template: UpgradeDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
}

impl ShopState {
    /// Weighted-random offers for the round. Owned templates never
    /// reappear; one slot is reserved for a low-cost template when any
    /// remains; the rest are sampled without replacement with
    /// round-scaled rarity weights.
    pub fn generate(
        round: u32,
        owned: &[OwnedUpgrade],
        content: &Content,
        rule: &ShopRule,
        rng: &mut RngState,
    ) -> Self {
        let owned_templates: HashSet<&str> = owned
            .iter()
            .map(|upgrade| upgrade.template.id.as_str())
            .collect();
        let mut candidates: Vec<&UpgradeDef> = content
            .upgrades
            .iter()
            .filter(|template| !owned_templates.contains(template.id.as_str()))
            .collect();
        if candidates.is_empty() {
            return Self::default();
        }

        let slot_count = rule.slot_count(round);
        let mut offers = Vec::with_capacity(slot_count);

        let cheap_indices: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, template)| template.cost <= rule.cheap_cost_cap)
            .map(|(idx, _)| idx)
            .collect();
        if let Some(pick) = rng.pick_index(cheap_indices.len()) {
            let template = candidates.remove(cheap_indices[pick]);
            offers.push(make_offer(template, round, rng));
        }

        while offers.len() < slot_count && !candidates.is_empty() {
            let idx = pick_weighted_index(&candidates, round, rule, rng);
            let template = candidates.remove(idx);
            offers.push(make_offer(template, round, rng));
        }

        Self { offers }
    }

    pub fn offer_by_id(&self, id: &str) -> Option<&ShopOffer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    pub fn take_offer(&mut self, id: &str) -> Option<ShopOffer> {
        let idx = self.offers.iter().position(|offer| offer.id == id)?;
        Some(self.offers.remove(idx))
    }
}

fn make_offer(template: &UpgradeDef, round: u32, rng: &mut RngState) -> ShopOffer {
    ShopOffer {
        id: format!("{}-{}-{}", template.id, round, rng.hex_suffix()),
        template: template.clone(),
    }
}

/// Roll a uniform value in [0, totalWeight) and walk the candidate list
/// subtracting weights until it goes non-positive.
fn pick_weighted_index(
    candidates: &[&UpgradeDef],
    round: u32,
    rule: &ShopRule,
    rng: &mut RngState,
) -> usize {
    let total: f64 = candidates
        .iter()
        .map(|template| rule.rarity_weight(template.rarity, round))
        .sum();
    if total <= 0.0 {
        return 0;
    }
    let mut roll = rng.next_f64() * total;
    for (idx, template) in candidates.iter().enumerate() {
        roll -= rule.rarity_weight(template.rarity, round);
        if roll <= 0.0 {
            return idx;
        }
    }
    candidates.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Rarity, UpgradeEffect};

    fn template(id: &str, rarity: Rarity, cost: i64) -> UpgradeDef {
        UpgradeDef {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            rarity,
            cost,
            icon: "*".to_string(),
            effects: vec![UpgradeEffect::FlatBonus { value: 1 }],
            tags: Vec::new(),
        }
    }

    fn content_with(templates: Vec<UpgradeDef>) -> Content {
        Content {
            bets: Vec::new(),
            bosses: Vec::new(),
            upgrades: templates,
            decks: Vec::new(),
        }
    }

    fn own(template: &UpgradeDef, round: u32) -> OwnedUpgrade {
        OwnedUpgrade {
            offer_id: format!("{}-{}-cafebabe", template.id, round),
            purchased_at_round: round,
            template: template.clone(),
        }
    }

    #[test]
    fn slot_count_matches_rule() {
        let config = GameConfig::default();
        let templates: Vec<UpgradeDef> = (0..20)
            .map(|i| template(&format!("t{i}"), Rarity::Common, 60 + i))
            .collect();
        let content = content_with(templates);
        let mut rng = RngState::from_seed(11);
        for (round, expected) in [(1, 6), (4, 7), (10, 8)] {
            let shop = ShopState::generate(round, &[], &content, &config.shop, &mut rng);
            assert_eq!(shop.offers.len(), expected, "round {round}");
        }
    }

    #[test]
    fn owned_templates_are_excluded() {
        let config = GameConfig::default();
        let a = template("alpha", Rarity::Common, 60);
        let b = template("beta", Rarity::Rare, 200);
        let content = content_with(vec![a.clone(), b.clone()]);
        let owned = vec![own(&a, 2)];
        let mut rng = RngState::from_seed(21);
        for _ in 0..20 {
            let shop = ShopState::generate(3, &owned, &content, &config.shop, &mut rng);
            assert!(shop.offers.iter().all(|offer| offer.template.id != "alpha"));
        }
    }

    #[test]
    fn first_slot_is_cheap_when_possible() {
        let config = GameConfig::default();
        let mut templates = vec![template("cheap", Rarity::Common, 100)];
        for i in 0..10 {
            templates.push(template(&format!("dear{i}"), Rarity::Legendary, 400));
        }
        let content = content_with(templates);
        let mut rng = RngState::from_seed(31);
        for _ in 0..10 {
            let shop = ShopState::generate(1, &[], &content, &config.shop, &mut rng);
            assert!(shop.offers[0].template.cost <= config.shop.cheap_cost_cap);
        }
    }

    #[test]
    fn offers_are_distinct_templates_with_unique_ids() {
        let config = GameConfig::default();
        let templates: Vec<UpgradeDef> = (0..12)
            .map(|i| template(&format!("t{i}"), Rarity::Uncommon, 150))
            .collect();
        let content = content_with(templates);
        let mut rng = RngState::from_seed(41);
        let shop = ShopState::generate(2, &[], &content, &config.shop, &mut rng);
        let mut template_ids: Vec<&str> =
            shop.offers.iter().map(|offer| offer.template.id.as_str()).collect();
        template_ids.sort_unstable();
        let before = template_ids.len();
        template_ids.dedup();
        assert_eq!(before, template_ids.len());

        let mut offer_ids: Vec<&str> = shop.offers.iter().map(|offer| offer.id.as_str()).collect();
        offer_ids.sort_unstable();
        let before = offer_ids.len();
        offer_ids.dedup();
        assert_eq!(before, offer_ids.len());
    }

    #[test]
    fn fully_owned_catalog_yields_empty_shop() {
        let config = GameConfig::default();
        let a = template("alpha", Rarity::Common, 60);
        let content = content_with(vec![a.clone()]);
        let owned = vec![own(&a, 1)];
        let mut rng = RngState::from_seed(51);
        let shop = ShopState::generate(2, &owned, &content, &config.shop, &mut rng);
        assert!(shop.offers.is_empty());
    }

    #[test]
    fn fewer_candidates_than_slots_exhausts_the_pool() {
        let config = GameConfig::default();
        let content = content_with(vec![
            template("one", Rarity::Common, 60),
            template("two", Rarity::Rare, 200),
        ]);
        let mut rng = RngState::from_seed(61);
        let shop = ShopState::generate(1, &[], &content, &config.shop, &mut rng);
        assert_eq!(shop.offers.len(), 2);
    }
}
