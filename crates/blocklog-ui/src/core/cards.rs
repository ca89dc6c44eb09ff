//! Card view-models derived from the payload and the icon cache.

use crate::core::icons::{IconCache, IconUrl};
use crate::core::logic::{format_block_name, format_coordinates};
use blocklog_models::{FetchResult, LogEntry};

/// Badge tone for an event kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindTone {
    /// Placements.
    Primary,
    /// Breaks and anything else.
    Error,
}

impl KindTone {
    /// DaisyUI badge class for the tone.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Primary => "badge-primary",
            Self::Error => "badge-error",
        }
    }
}

/// Everything a single log card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogCardView {
    /// Position in the payload.
    pub index: usize,
    /// Kind label as sent by the server.
    pub kind: String,
    /// Badge tone for the kind.
    pub tone: KindTone,
    /// Event time in epoch milliseconds.
    pub date: i64,
    /// Acting player.
    pub player_name: String,
    /// Raw block id.
    pub block: String,
    /// Human-readable block name.
    pub block_label: String,
    /// Resolved icon URL, absent until ready or when the fetch failed.
    pub icon_url: Option<String>,
    /// Server name.
    pub server_name: String,
    /// World name.
    pub world: String,
    /// Coordinate line.
    pub coordinates: String,
    /// Staff badge flag.
    pub staff: bool,
}

impl LogCardView {
    /// Build the card for one entry.
    #[must_use]
    pub fn new<H: IconUrl>(index: usize, entry: &LogEntry, icons: &IconCache<H>) -> Self {
        let tone = if entry.kind.is_place() {
            KindTone::Primary
        } else {
            KindTone::Error
        };
        Self {
            index,
            kind: entry.kind.as_str().to_string(),
            tone,
            date: entry.date,
            player_name: entry.player_name.clone(),
            block: entry.block.clone(),
            block_label: format_block_name(&entry.block),
            icon_url: icons.icon_url(&entry.block).map(str::to_string),
            server_name: entry.server_name.clone(),
            world: entry.world.clone(),
            coordinates: format_coordinates(entry.x, entry.y, entry.z),
            staff: entry.staff,
        }
    }
}

/// One card per entry, in payload order.
#[must_use]
pub fn build_cards<H: IconUrl>(result: &FetchResult, icons: &IconCache<H>) -> Vec<LogCardView> {
    result
        .logs
        .iter()
        .enumerate()
        .map(|(index, entry)| LogCardView::new(index, entry, icons))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocklog_models::{LogKind, PlayerIdentity};

    fn entry(kind: LogKind, block: &str, date: i64) -> LogEntry {
        LogEntry {
            kind,
            server_name: "survival".into(),
            date,
            world: "world".into(),
            player_name: "Steve".into(),
            block: block.into(),
            x: 1,
            y: 2,
            z: 3,
            staff: false,
        }
    }

    fn payload() -> FetchResult {
        FetchResult {
            player: PlayerIdentity {
                name: "Steve".into(),
                uuid: "u-1".into(),
            },
            logs: vec![
                entry(LogKind::Break, "stone", 30),
                entry(LogKind::Place, "OAK_PLANKS", 10),
                entry(LogKind::Other("burn".into()), "stone", 20),
            ],
        }
    }

    #[test]
    fn cards_follow_payload_order() {
        let cards = build_cards(&payload(), &IconCache::<String>::default());
        assert_eq!(cards.len(), 3);
        let dates: Vec<i64> = cards.iter().map(|card| card.date).collect();
        assert_eq!(dates, vec![30, 10, 20]);
        assert_eq!(cards[1].block_label, "Oak Planks");
        assert_eq!(cards[1].coordinates, "X: 1, Y: 2, Z: 3");
    }

    #[test]
    fn place_uses_primary_tone() {
        let cards = build_cards(&payload(), &IconCache::<String>::default());
        assert_eq!(cards[0].tone, KindTone::Error);
        assert_eq!(cards[1].tone, KindTone::Primary);
        assert_eq!(cards[2].tone, KindTone::Error);
        assert_eq!(cards[2].kind, "burn");
    }

    #[test]
    fn failed_icon_only_hides_its_own_cards() {
        let mut icons = IconCache::default();
        let slugs = icons.claim_all(payload().logs.iter().map(|log| log.block.as_str()));
        assert_eq!(slugs, vec!["stone", "oak_planks"]);
        icons.resolve("stone", None);
        icons.resolve("oak_planks", Some("blob:oak".to_string()));

        let cards = build_cards(&payload(), &icons);
        assert_eq!(cards[0].icon_url, None);
        assert_eq!(cards[1].icon_url.as_deref(), Some("blob:oak"));
        assert_eq!(cards[2].icon_url, None);
    }
}
