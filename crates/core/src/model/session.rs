use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Difficulty, Question};

/// Percentage at or above which a finished quiz counts as passed.
pub const PASS_PERCENTAGE: u32 = 70;

//
// ─── HISTORY ───────────────────────────────────────────────────────────────────
//

/// One answered question within a session, in answer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: Question,
    pub correct: bool,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(question: Question, correct: bool) -> Self {
        Self { question, correct }
    }
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Count of answered questions per tier, regardless of correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyBreakdown {
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn bump(&mut self, difficulty: Difficulty) {
        let slot = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }
}

/// Coarse label for the average tier a player was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLabel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLabel {
    /// Bucket a mean tier weight (1.0..=3.0) into a label.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average < 1.7 {
            Self::Easy
        } else if average < 2.3 {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted result of a (possibly unfinished) session.
///
/// Correct answers earn their tier weight (easy 1, medium 2, hard 3);
/// `percentage` compares that against the weight of everything answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScore {
    pub weighted_score: u32,
    pub possible_score: u32,
    pub percentage: u32,
    pub difficulty_breakdown: DifficultyBreakdown,
    pub max_streak: u32,
    pub correct: u32,
    pub answered: u32,
}

impl SessionScore {
    /// Score a history in answer order.
    #[must_use]
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        let mut score = Self::default();
        let mut streak = 0_u32;

        for entry in history {
            let difficulty = entry.question.difficulty();
            let weight = difficulty.weight();

            score.possible_score += weight;
            score.answered += 1;
            score.difficulty_breakdown.bump(difficulty);

            if entry.correct {
                score.weighted_score += weight;
                score.correct += 1;
                streak += 1;
                score.max_streak = score.max_streak.max(streak);
            } else {
                streak = 0;
            }
        }

        score.percentage = rounded_percentage(score.weighted_score, score.possible_score);
        score
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.percentage >= PASS_PERCENTAGE
    }

    /// Mean tier weight of answered questions, `None` before any answer.
    #[must_use]
    pub fn difficulty_average(&self) -> Option<DifficultyLabel> {
        if self.answered == 0 {
            return None;
        }
        let average = f64::from(self.possible_score) / f64::from(self.answered);
        Some(DifficultyLabel::from_average(average))
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
fn rounded_percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    let pct = (200 * part + whole) / (2 * whole);
    u32::try_from(pct).unwrap_or(u32::MAX)
}
