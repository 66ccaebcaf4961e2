use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Difficulty, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question text cannot be empty (id {id})")]
    EmptyText { id: QuestionId },
}

/// A single true/false statement the player swipes on.
///
/// Questions are immutable once built; sessions clone them into their pools
/// and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    text: String,
    correct_answer: bool,
    difficulty: Difficulty,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyId` or `QuestionError::EmptyText` for blank input.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        correct_answer: bool,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        if id.is_blank() {
            return Err(QuestionError::EmptyId);
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText { id });
        }

        Ok(Self {
            id,
            text,
            correct_answer,
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns true when a yes/no swipe matches the expected answer.
    #[must_use]
    pub fn is_correct(&self, answer: bool) -> bool {
        self.correct_answer == answer
    }
}

/// Wire shape of a question as supplied by bank files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    id: QuestionId,
    question: String,
    correct_answer: bool,
    difficulty: Difficulty,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.id,
            record.question,
            record.correct_answer,
            record.difficulty,
        )
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.text,
            correct_answer: question.correct_answer,
            difficulty: question.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_id_and_text() {
        let err = Question::new(QuestionId::new(""), "Text", true, Difficulty::Easy).unwrap_err();
        assert_eq!(err, QuestionError::EmptyId);

        let err = Question::new(QuestionId::new("q1"), "  ", true, Difficulty::Easy).unwrap_err();
        assert!(matches!(err, QuestionError::EmptyText { .. }));
    }

    #[test]
    fn grades_swipes_against_expected_answer() {
        let q = Question::new(
            QuestionId::new("q1"),
            "Crypto markets operate 24/7.",
            true,
            Difficulty::Medium,
        )
        .unwrap();
        assert!(q.is_correct(true));
        assert!(!q.is_correct(false));
    }

    #[test]
    fn deserializes_bank_shape() {
        let json = r#"{"id":"q9","question":"A pip is a unit.","correctAnswer":true,"difficulty":"easy"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id().as_str(), "q9");
        assert_eq!(q.text(), "A pip is a unit.");
        assert!(q.correct_answer());
        assert_eq!(q.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"id":"q9","question":"","correctAnswer":true,"difficulty":"easy"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
