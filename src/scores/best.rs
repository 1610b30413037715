//! Global and per-player best scores.

use super::store::KeyValueStore;
use crate::core::constants::{GLOBAL_BEST_KEY, PLAYER_BEST_KEY_PREFIX};
use std::io;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScores {
    /// Best across every player on this machine.
    pub global: u32,
    /// Best for the current player.
    pub player: u32,
}

/// Which records a finished run broke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub global: bool,
    pub player: bool,
}

impl RecordUpdate {
    pub fn any(self) -> bool {
        self.global || self.player
    }
}

/// `bestscore:<name>`
pub fn player_best_key(player_name: &str) -> String {
    format!("{}{}", PLAYER_BEST_KEY_PREFIX, player_name)
}

/// Stored values are decimal strings. Absent or unparsable reads as 0.
pub fn parse_score(raw: Option<String>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

pub fn load_best_scores<S: KeyValueStore + ?Sized>(store: &S, player_name: &str) -> BestScores {
    BestScores {
        global: parse_score(store.get(GLOBAL_BEST_KEY)),
        player: parse_score(store.get(&player_best_key(player_name))),
    }
}

/// Raise whichever bests `score` beats and persist them.
///
/// `best` is updated in memory even if a write fails, so the display never
/// shows a lower record than the player just set. The first write error is
/// returned after both keys have been attempted.
pub fn record_run<S: KeyValueStore + ?Sized>(
    store: &mut S,
    player_name: &str,
    score: u32,
    best: &mut BestScores,
) -> (RecordUpdate, io::Result<()>) {
    let mut update = RecordUpdate::default();
    let mut outcome = Ok(());

    if score > best.global {
        best.global = score;
        update.global = true;
        outcome = store.set(GLOBAL_BEST_KEY, &score.to_string());
    }
    if score > best.player {
        best.player = score;
        update.player = true;
        let written = store.set(&player_best_key(player_name), &score.to_string());
        if outcome.is_ok() {
            outcome = written;
        }
    }

    (update, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::store::MemoryStore;

    #[test]
    fn test_player_key_format() {
        assert_eq!(player_best_key("Ace"), "bestscore:Ace");
    }

    #[test]
    fn test_parse_score_defaults() {
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some("".to_string())), 0);
        assert_eq!(parse_score(Some("abc".to_string())), 0);
        assert_eq!(parse_score(Some("-4".to_string())), 0);
        assert_eq!(parse_score(Some("42".to_string())), 42);
        assert_eq!(parse_score(Some(" 9\n".to_string())), 9);
    }

    #[test]
    fn test_load_from_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(load_best_scores(&store, "Ace"), BestScores::default());
    }

    #[test]
    fn test_new_record_written_to_both_keys() {
        let mut store = MemoryStore::with_values([("bestscore", "3"), ("bestscore:Ace", "3")]);
        let mut best = load_best_scores(&store, "Ace");

        let (update, outcome) = record_run(&mut store, "Ace", 5, &mut best);
        assert!(outcome.is_ok());
        assert!(update.global && update.player);
        assert_eq!(best, BestScores { global: 5, player: 5 });
        assert_eq!(store.get("bestscore").as_deref(), Some("5"));
        assert_eq!(store.get("bestscore:Ace").as_deref(), Some("5"));
    }

    #[test]
    fn test_personal_record_below_global() {
        let mut store = MemoryStore::with_values([("bestscore", "20"), ("bestscore:Ace", "2")]);
        let mut best = load_best_scores(&store, "Ace");

        let (update, _) = record_run(&mut store, "Ace", 6, &mut best);
        assert!(!update.global);
        assert!(update.player);
        assert_eq!(store.get("bestscore").as_deref(), Some("20"));
        assert_eq!(store.get("bestscore:Ace").as_deref(), Some("6"));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_lower_score_writes_nothing() {
        let mut store = MemoryStore::with_values([("bestscore", "9"), ("bestscore:Ace", "9")]);
        let mut best = load_best_scores(&store, "Ace");

        let (update, _) = record_run(&mut store, "Ace", 9, &mut best);
        assert!(!update.any());
        assert_eq!(store.writes, 0);
        assert_eq!(best, BestScores { global: 9, player: 9 });
    }
}
