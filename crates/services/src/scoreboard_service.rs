use std::sync::Arc;

use quiz_core::model::{Leaderboard, LeaderboardEntry, SessionScore};
use storage::repository::{KeyValueExt, KeyValueRepository, StorageError};
use tracing::warn;

use crate::Clock;
use crate::error::ScoreboardError;

/// Storage key for the best percentage ever reached.
pub const BEST_SCORE_KEY: &str = "market_test.best";
/// Storage key for the persisted top-10 leaderboard.
pub const LEADERBOARD_KEY: &str = "market_test.leaderboard";

/// What changed after recording a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardUpdate {
    pub best_score: u32,
    pub is_new_best: bool,
    /// 1-based leaderboard position of this session, if it made the top 10.
    pub rank: Option<usize>,
    pub leaderboard: Leaderboard,
}

/// Keeps the best score and leaderboard in a key/value store.
#[derive(Clone)]
pub struct ScoreboardService {
    clock: Clock,
    kv: Arc<dyn KeyValueRepository>,
}

impl ScoreboardService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, kv }
    }

    /// Best stored percentage, 0 when nothing (or nothing readable) is stored.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Storage` if the backend fails.
    pub async fn best_score(&self) -> Result<u32, ScoreboardError> {
        match self.kv.get_as::<u32>(BEST_SCORE_KEY).await {
            Ok(best) => Ok(best.unwrap_or(0)),
            Err(StorageError::Serialization(err)) => {
                warn!(key = BEST_SCORE_KEY, %err, "ignoring unreadable best score");
                Ok(0)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Stored leaderboard, empty when nothing (or nothing readable) is stored.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Storage` if the backend fails.
    pub async fn leaderboard(&self) -> Result<Leaderboard, ScoreboardError> {
        match self.kv.get_as::<Vec<LeaderboardEntry>>(LEADERBOARD_KEY).await {
            Ok(entries) => Ok(Leaderboard::from_entries(entries.unwrap_or_default())),
            Err(StorageError::Serialization(err)) => {
                warn!(key = LEADERBOARD_KEY, %err, "ignoring unreadable leaderboard");
                Ok(Leaderboard::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Record a finished session: bump the best score and insert a leaderboard entry.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Storage` if reading or writing fails.
    pub async fn record(&self, score: &SessionScore) -> Result<ScoreboardUpdate, ScoreboardError> {
        let previous_best = self.best_score().await?;
        let best_score = previous_best.max(score.percentage);
        let is_new_best = best_score != previous_best;
        if is_new_best {
            self.kv.set_as(BEST_SCORE_KEY, &best_score).await?;
        }

        let mut leaderboard = self.leaderboard().await?;
        let rank = leaderboard.insert(LeaderboardEntry::from_score(score, self.clock.now()));
        self.kv.set_as(LEADERBOARD_KEY, &leaderboard).await?;

        Ok(ScoreboardUpdate {
            best_score,
            is_new_best,
            rank,
            leaderboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{DifficultyBreakdown, DifficultyLabel};
    use quiz_core::time::{fixed_clock, fixed_now};
    use serde_json::json;
    use storage::repository::InMemoryRepository;

    fn score(percentage: u32) -> SessionScore {
        SessionScore {
            weighted_score: percentage * 20 / 100,
            possible_score: 20,
            percentage,
            difficulty_breakdown: DifficultyBreakdown {
                easy: 0,
                medium: 10,
                hard: 0,
            },
            max_streak: 3,
            correct: 5,
            answered: 10,
        }
    }

    fn service(repo: &InMemoryRepository) -> ScoreboardService {
        ScoreboardService::new(fixed_clock(), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn empty_store_reads_as_zero() {
        let svc = service(&InMemoryRepository::new());
        assert_eq!(svc.best_score().await.unwrap(), 0);
        assert!(svc.leaderboard().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn best_score_only_moves_up() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);

        let first = svc.record(&score(60)).await.unwrap();
        assert_eq!(first.best_score, 60);
        assert!(first.is_new_best);

        let lower = svc.record(&score(40)).await.unwrap();
        assert_eq!(lower.best_score, 60);
        assert!(!lower.is_new_best);

        let higher = svc.record(&score(90)).await.unwrap();
        assert_eq!(higher.best_score, 90);
        assert!(higher.is_new_best);

        assert_eq!(repo.get(BEST_SCORE_KEY).await.unwrap(), Some(json!(90)));
    }

    #[tokio::test]
    async fn records_ranked_entries_with_difficulty_label() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);

        svc.record(&score(50)).await.unwrap();
        let update = svc.record(&score(80)).await.unwrap();
        assert_eq!(update.rank, Some(1));
        assert_eq!(update.leaderboard.len(), 2);

        let stored = svc.leaderboard().await.unwrap();
        let top = stored.best().unwrap();
        assert_eq!(top.score, 80);
        assert_eq!(top.date, fixed_now());
        assert_eq!(top.difficulty_average, Some(DifficultyLabel::Medium));
    }

    #[tokio::test]
    async fn leaderboard_keeps_top_ten() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        for pct in (10..=100).step_by(10) {
            svc.record(&score(pct)).await.unwrap();
        }
        let update = svc.record(&score(5)).await.unwrap();
        assert_eq!(update.rank, None);

        let stored = svc.leaderboard().await.unwrap();
        assert_eq!(stored.len(), 10);
        assert_eq!(stored.entries().last().unwrap().score, 10);
    }

    #[tokio::test]
    async fn unreadable_values_are_reset() {
        let repo = InMemoryRepository::new();
        repo.set(BEST_SCORE_KEY, &json!("eighty")).await.unwrap();
        repo.set(LEADERBOARD_KEY, &json!({ "not": "a list" })).await.unwrap();

        let svc = service(&repo);
        assert_eq!(svc.best_score().await.unwrap(), 0);
        assert!(svc.leaderboard().await.unwrap().is_empty());

        let update = svc.record(&score(30)).await.unwrap();
        assert_eq!(update.best_score, 30);
        assert_eq!(update.leaderboard.len(), 1);
    }
}
