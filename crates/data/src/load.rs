use anyhow::{bail, Context};
use pushluck_core::{BossEffect, Content, UpgradeEffect};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BETS_JSON: &str = include_str!("../assets/bets.json");
const BOSSES_JSON: &str = include_str!("../assets/bosses.json");
const UPGRADES_JSON: &str = include_str!("../assets/upgrades.json");
const DECKS_JSON: &str = include_str!("../assets/decks.json");

/// The built-in catalogs, embedded at compile time and validated on load.
pub fn builtin_content() -> anyhow::Result<Content> {
    let content = Content {
        bets: parse_embedded(BETS_JSON, "bets.json")?,
        bosses: parse_embedded(BOSSES_JSON, "bosses.json")?,
        upgrades: parse_embedded(UPGRADES_JSON, "upgrades.json")?,
        decks: parse_embedded(DECKS_JSON, "decks.json")?,
    };
    validate_content(&content)?;
    Ok(content)
}

/// Load the four catalog files from a directory instead of the embedded
/// copies. Same file names and validation as the built-in set.
pub fn load_content(dir: &Path) -> anyhow::Result<Content> {
    let content = Content {
        bets: load_json(dir.join("bets.json"))?,
        bosses: load_json(dir.join("bosses.json"))?,
        upgrades: load_json(dir.join("upgrades.json"))?,
        decks: load_json(dir.join("decks.json"))?,
    };
    validate_content(&content)?;
    Ok(content)
}

/// Cross-catalog checks: unique ids everywhere, and every bet reference
/// from a boss or relic effect must resolve.
pub fn validate_content(content: &Content) -> anyhow::Result<()> {
    check_unique("bet", content.bets.iter().map(|bet| bet.id.as_str()))?;
    check_unique("boss", content.bosses.iter().map(|boss| boss.id.as_str()))?;
    check_unique(
        "upgrade",
        content.upgrades.iter().map(|upgrade| upgrade.id.as_str()),
    )?;
    check_unique("deck", content.decks.iter().map(|deck| deck.id.as_str()))?;

    let bet_ids: HashSet<&str> = content.bets.iter().map(|bet| bet.id.as_str()).collect();
    for boss in &content.bosses {
        if let Some(BossEffect::DisableBets { bet_ids: disabled }) = &boss.effect {
            for id in disabled {
                if !bet_ids.contains(id.as_str()) {
                    bail!("boss {} disables unknown bet {}", boss.id, id);
                }
            }
        }
    }
    for upgrade in &content.upgrades {
        for effect in &upgrade.effects {
            if let UpgradeEffect::BetMultiplier { bet_id, .. } = effect {
                if !bet_ids.contains(bet_id.as_str()) {
                    bail!("upgrade {} boosts unknown bet {}", upgrade.id, bet_id);
                }
            }
        }
        if upgrade.cost <= 0 {
            bail!("upgrade {} has non-positive cost", upgrade.id);
        }
    }
    Ok(())
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            bail!("{kind} id cannot be empty");
        }
        if !seen.insert(id) {
            bail!("duplicate {kind} id {id}");
        }
    }
    Ok(())
}

fn parse_embedded<T: DeserializeOwned>(raw: &str, name: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("parse embedded {name}"))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
