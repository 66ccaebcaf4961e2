use std::sync::Arc;

use quiz_core::model::{HistoryEntry, Question, QuestionBank};
use rand::Rng;
use tracing::info;

use crate::error::SessionError;
use crate::scoreboard_service::{ScoreboardService, ScoreboardUpdate};

use super::service::AdaptiveSession;

/// Result of answering a single question in the quiz loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub entry: HistoryEntry,
    /// Question to show next; `None` once the session is over.
    pub next: Option<Question>,
    /// Scoreboard changes, present only for the answer that finished the session.
    pub finished: Option<ScoreboardUpdate>,
}

/// Orchestrates session start, swipe grading, and scoreboard updates.
#[derive(Clone)]
pub struct QuizLoopService {
    bank: QuestionBank,
    scoreboard: Arc<ScoreboardService>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: QuestionBank, scoreboard: Arc<ScoreboardService>) -> Self {
        Self { bank, scoreboard }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn scoreboard(&self) -> &ScoreboardService {
        &self.scoreboard
    }

    /// Start a fresh session over the configured bank.
    #[must_use]
    pub fn start_session(&self) -> AdaptiveSession {
        AdaptiveSession::new(&self.bank)
    }

    /// Start a reproducible session.
    #[must_use]
    pub fn start_session_seeded(&self, seed: u64) -> AdaptiveSession {
        AdaptiveSession::with_seed(&self.bank, seed)
    }

    /// Grade a yes/no swipe against the pending question, record it, and draw the next one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NothingPending` if no question was drawn, or
    /// `SessionError::Scoreboard` if persisting the final score fails.
    pub async fn answer<R: Rng>(
        &self,
        session: &mut AdaptiveSession<R>,
        swipe: bool,
    ) -> Result<QuizAnswerResult, SessionError> {
        let correct = session
            .pending()
            .map(|question| question.is_correct(swipe))
            .ok_or(SessionError::NothingPending)?;
        self.record(session, correct).await
    }

    /// Countdown expiry: counts as an incorrect answer.
    ///
    /// # Errors
    ///
    /// Same as [`QuizLoopService::answer`].
    pub async fn timeout<R: Rng>(
        &self,
        session: &mut AdaptiveSession<R>,
    ) -> Result<QuizAnswerResult, SessionError> {
        self.record(session, false).await
    }

    async fn record<R: Rng>(
        &self,
        session: &mut AdaptiveSession<R>,
        correct: bool,
    ) -> Result<QuizAnswerResult, SessionError> {
        let entry = session
            .answer_current(correct)
            .cloned()
            .ok_or(SessionError::NothingPending)?;

        let next = session.next_question();
        let finished = if next.is_none() {
            Some(self.finish(session).await?)
        } else {
            None
        };

        Ok(QuizAnswerResult {
            entry,
            next,
            finished,
        })
    }

    /// Persist the score of a completed session.
    ///
    /// The final answer already does this. Call it again only when that
    /// answer returned a scoreboard error; each successful call adds one
    /// leaderboard entry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` if the session still has questions
    /// to serve, or `SessionError::Scoreboard` if persisting fails.
    pub async fn finish<R: Rng>(
        &self,
        session: &AdaptiveSession<R>,
    ) -> Result<ScoreboardUpdate, SessionError> {
        if !session.is_complete() {
            return Err(SessionError::NotFinished {
                answered: session.history().len(),
            });
        }

        let score = session.score();
        let update = self.scoreboard.record(&score).await?;
        info!(
            percentage = score.percentage,
            passed = score.passed(),
            max_streak = score.max_streak,
            best = update.best_score,
            rank = ?update.rank,
            "quiz session finished"
        );
        Ok(update)
    }
}
