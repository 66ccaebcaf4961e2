use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::scoreboard_service::ScoreboardService;
use crate::sessions::QuizLoopService;

/// Assembles app-facing services over one storage backend and question bank.
#[derive(Clone)]
pub struct AppServices {
    scoreboard: Arc<ScoreboardService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        bank: QuestionBank,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, bank))
    }

    /// Build services over in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, bank: QuestionBank) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, bank)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, bank: QuestionBank) -> Self {
        let scoreboard = Arc::new(ScoreboardService::new(clock, Arc::clone(&storage.kv)));
        let quiz_loop = Arc::new(QuizLoopService::new(bank, Arc::clone(&scoreboard)));
        Self {
            scoreboard,
            quiz_loop,
        }
    }

    #[must_use]
    pub fn scoreboard(&self) -> Arc<ScoreboardService> {
        Arc::clone(&self.scoreboard)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
