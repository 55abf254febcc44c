use crate::DeckPreset;
use serde::{Deserialize, Serialize};

/// Persistent player identity. Storage lives outside the core; this crate
/// only reads unlock data and reports best-round improvements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unlocked_decks: Vec<String>,
    #[serde(default)]
    pub best_round: u32,
}

impl PlayerProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unlocked_decks: Vec::new(),
            best_round: 0,
        }
    }

    /// A preset is usable with no requirement, with the requirement met by
    /// the recorded best round, or when explicitly unlocked.
    pub fn deck_unlocked(&self, preset: &DeckPreset) -> bool {
        match &preset.requirement {
            None => true,
            Some(req) => {
                self.unlocked_decks.iter().any(|id| *id == preset.id)
                    || self.best_round >= req.best_round
            }
        }
    }

    /// Record a reached round. Improvements also unlock every deck whose
    /// threshold the new best satisfies. Returns true if the best improved.
    pub fn record_round(&mut self, round: u32, decks: &[DeckPreset]) -> bool {
        if round <= self.best_round {
            return false;
        }
        self.best_round = round;
        for preset in decks {
            if let Some(req) = &preset.requirement {
                if self.best_round >= req.best_round
                    && !self.unlocked_decks.iter().any(|id| *id == preset.id)
                {
                    self.unlocked_decks.push(preset.id.clone());
                }
            }
        }
        true
    }
}

/// A preset without a profile is usable only when it has no requirement.
pub fn deck_unlocked_for(profile: Option<&PlayerProfile>, preset: &DeckPreset) -> bool {
    match profile {
        Some(profile) => profile.deck_unlocked(preset),
        None => preset.requirement.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeckKind, DeckModifiers, DeckRequirement};

    fn preset(id: &str, requirement: Option<u32>) -> DeckPreset {
        DeckPreset {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            modifiers: DeckModifiers::default(),
            kind: DeckKind::Standard,
            requirement: requirement.map(|best_round| DeckRequirement {
                best_round,
                label: format!("Reach Round {best_round}"),
            }),
        }
    }

    #[test]
    fn unlock_paths() {
        let mut profile = PlayerProfile::new("p1", "Tester");
        let free = preset("balanced", None);
        let gated = preset("high-roller", Some(5));
        assert!(profile.deck_unlocked(&free));
        assert!(!profile.deck_unlocked(&gated));

        profile.best_round = 5;
        assert!(profile.deck_unlocked(&gated));

        profile.best_round = 0;
        profile.unlocked_decks.push("high-roller".to_string());
        assert!(profile.deck_unlocked(&gated));
    }

    #[test]
    fn record_round_unlocks_qualifying_decks() {
        let decks = vec![preset("balanced", None), preset("high-roller", Some(5))];
        let mut profile = PlayerProfile::new("p1", "Tester");
        assert!(!profile.record_round(0, &decks));
        assert!(profile.record_round(6, &decks));
        assert_eq!(profile.best_round, 6);
        assert!(profile.unlocked_decks.contains(&"high-roller".to_string()));
        // No regression on lower rounds.
        assert!(!profile.record_round(3, &decks));
        assert_eq!(profile.best_round, 6);
    }

    #[test]
    fn no_profile_blocks_gated_decks() {
        assert!(deck_unlocked_for(None, &preset("balanced", None)));
        assert!(!deck_unlocked_for(None, &preset("chaos", Some(12))));
    }
}
