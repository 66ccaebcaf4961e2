use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{DifficultyLabel, SessionScore};

/// Maximum number of entries kept on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// A finished attempt as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Session percentage (0..=100).
    pub score: u32,
    pub date: DateTime<Utc>,
    #[serde(with = "label_or_blank", default)]
    pub difficulty_average: Option<DifficultyLabel>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn from_score(score: &SessionScore, date: DateTime<Utc>) -> Self {
        Self {
            score: score.percentage,
            date,
            difficulty_average: score.difficulty_average(),
        }
    }
}

/// Top scores, best first, capped at [`LEADERBOARD_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rebuild a leaderboard from stored entries, restoring order and cap.
    #[must_use]
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_SIZE);
        Self { entries }
    }

    /// Insert an entry and return its 1-based rank, or `None` if it did not make the cut.
    ///
    /// Ties keep earlier entries ahead of the new one.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .take_while(|existing| existing.score >= entry.score)
            .count();
        if position >= LEADERBOARD_SIZE {
            return None;
        }
        self.entries.insert(position, entry);
        self.entries.truncate(LEADERBOARD_SIZE);
        Some(position + 1)
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }
}

/// Stores a missing label as `""`, and reads unknown text back as `None`.
mod label_or_blank {
    use super::{Deserialize, Deserializer, DifficultyLabel, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        label: &Option<DifficultyLabel>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label.map_or("", DifficultyLabel::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DifficultyLabel>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Easy" => Some(DifficultyLabel::Easy),
            "Medium" => Some(DifficultyLabel::Medium),
            "Hard" => Some(DifficultyLabel::Hard),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn entry(score: u32, minutes: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            score,
            date: fixed_now() + Duration::minutes(minutes),
            difficulty_average: Some(DifficultyLabel::Medium),
        }
    }

    #[test]
    fn insert_orders_best_first() {
        let mut board = Leaderboard::default();
        assert_eq!(board.insert(entry(40, 0)), Some(1));
        assert_eq!(board.insert(entry(90, 1)), Some(1));
        assert_eq!(board.insert(entry(60, 2)), Some(2));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 60, 40]);
        assert_eq!(board.best().unwrap().score, 90);
    }

    #[test]
    fn ties_keep_earlier_entries_first() {
        let mut board = Leaderboard::default();
        board.insert(entry(50, 0));
        assert_eq!(board.insert(entry(50, 1)), Some(2));
        assert_eq!(board.entries()[0].date, fixed_now());
    }

    #[test]
    fn caps_at_ten_and_reports_misses() {
        let mut board = Leaderboard::default();
        for i in 0..10 {
            board.insert(entry(50 + i, i64::from(i)));
        }
        assert_eq!(board.len(), LEADERBOARD_SIZE);

        assert_eq!(board.insert(entry(10, 20)), None);
        assert_eq!(board.len(), LEADERBOARD_SIZE);

        assert_eq!(board.insert(entry(100, 21)), Some(1));
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board.entries().last().unwrap().score, 51);
    }

    #[test]
    fn from_entries_restores_order_and_cap() {
        let entries = (0..12).map(|i| entry(i * 5, i64::from(i))).collect();
        let board = Leaderboard::from_entries(entries);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board.best().unwrap().score, 55);
    }

    #[test]
    fn blank_label_round_trips_as_empty_string() {
        let entry = LeaderboardEntry {
            score: 0,
            date: fixed_now(),
            difficulty_average: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["difficultyAverage"], "");
        let back: LeaderboardEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
