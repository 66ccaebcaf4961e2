use std::collections::{HashSet, VecDeque};

use quiz_core::model::{Difficulty, HistoryEntry, Question, QuestionBank, QuestionId, SessionScore};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::difficulty::next_difficulty;
use super::progress::SessionProgress;

/// Number of questions served in one adaptive session.
pub const SESSION_LENGTH: usize = 10;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at the adaptive quiz.
///
/// The bank is split into one shuffled queue per difficulty tier. Each call to
/// [`AdaptiveSession::next_question`] re-evaluates the tier from the latest
/// answers and pops from that tier's queue, so questions never repeat unless
/// the whole bank has been used up.
///
/// The session alternates between waiting for an answer (a question is
/// pending) and waiting for the next draw. It is finished once
/// [`SESSION_LENGTH`] answers are recorded.
pub struct AdaptiveSession<R = StdRng> {
    bank: QuestionBank,
    pools: [VecDeque<Question>; 3],
    history: Vec<HistoryEntry>,
    difficulty: Difficulty,
    pending: Option<Question>,
    rng: R,
}

impl AdaptiveSession<StdRng> {
    /// Start a session shuffled from OS entropy.
    #[must_use]
    pub fn new(bank: &QuestionBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    /// Start a session whose shuffles and fallback picks are reproducible.
    #[must_use]
    pub fn with_seed(bank: &QuestionBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AdaptiveSession<R> {
    /// Start a session driven by the given random source.
    pub fn with_rng(bank: &QuestionBank, mut rng: R) -> Self {
        let mut pools: [VecDeque<Question>; 3] = Default::default();
        for difficulty in Difficulty::ALL {
            let mut pool: Vec<Question> = bank.by_difficulty(difficulty).cloned().collect();
            pool.shuffle(&mut rng);
            pools[difficulty.index()] = pool.into();
        }

        Self {
            bank: bank.clone(),
            pools,
            history: Vec::with_capacity(SESSION_LENGTH),
            difficulty: Difficulty::Medium,
            pending: None,
            rng,
        }
    }

    /// Draw the next question, or `None` once the session is finished.
    ///
    /// Every call draws. An unanswered pending question is replaced and does
    /// not go back into its pool.
    pub fn next_question(&mut self) -> Option<Question> {
        if self.is_complete() {
            return None;
        }
        if let Some(skipped) = &self.pending {
            debug!(id = %skipped.id(), "pending question replaced without an answer");
        }

        self.difficulty = next_difficulty(self.difficulty, &self.history);
        let question = self.draw(self.difficulty)?;
        self.pending = Some(question.clone());
        Some(question)
    }

    /// Record an answer for the pending question.
    ///
    /// Returns the recorded entry, or `None` (and records nothing) when no
    /// question is pending.
    pub fn answer_current(&mut self, correct: bool) -> Option<&HistoryEntry> {
        let Some(question) = self.pending.take() else {
            debug!(correct, "answer ignored, no question pending");
            return None;
        };

        debug!(
            id = %question.id(),
            difficulty = %question.difficulty(),
            correct,
            "answer recorded"
        );
        self.history.push(HistoryEntry::new(question, correct));
        self.history.last()
    }

    /// Answered questions in answer order.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Weighted score of everything answered so far.
    #[must_use]
    pub fn score(&self) -> SessionScore {
        SessionScore::from_history(&self.history)
    }

    /// Tier used for the most recent draw (`Medium` before the first).
    #[must_use]
    pub fn current_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.history.len() >= SESSION_LENGTH
    }

    /// Run of correct answers at the end of the history.
    #[must_use]
    pub fn current_streak(&self) -> usize {
        self.history
            .iter()
            .rev()
            .take_while(|entry| entry.correct)
            .count()
    }

    /// Questions still queued for a tier.
    #[must_use]
    pub fn pool_len(&self, difficulty: Difficulty) -> usize {
        self.pools[difficulty.index()].len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.history.len();
        SessionProgress {
            total: SESSION_LENGTH,
            answered,
            remaining: SESSION_LENGTH.saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    fn draw(&mut self, difficulty: Difficulty) -> Option<Question> {
        if let Some(question) = self.pools[difficulty.index()].pop_front() {
            debug!(id = %question.id(), %difficulty, "drew from tier pool");
            return Some(question);
        }

        let used: HashSet<&QuestionId> = self
            .history
            .iter()
            .map(|entry| entry.question.id())
            .collect();
        let unused: Vec<&Question> = self
            .bank
            .iter()
            .filter(|question| !used.contains(question.id()))
            .collect();

        if let Some(question) = unused.choose(&mut self.rng).map(|q| (*q).clone()) {
            debug!(
                id = %question.id(),
                %difficulty,
                served = %question.difficulty(),
                "tier pool empty, drew unused question"
            );
            self.pools[question.difficulty().index()].retain(|queued| queued.id() != question.id());
            return Some(question);
        }

        let question = self.bank.as_slice().choose(&mut self.rng).cloned()?;
        warn!(
            id = %question.id(),
            bank_size = self.bank.len(),
            "question bank exhausted, repeating a question"
        );
        Some(question)
    }
}
