use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{Difficulty, Question, QuestionError, QuestionId};

mod market;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("duplicate question id in bank: {id}")]
    DuplicateId { id: QuestionId },

    #[error("invalid question bank json: {0}")]
    Parse(String),
}

/// The full universe of questions a session draws from.
///
/// Built once at startup and shared by reference; cloning is cheap and the
/// contents never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and `BankError::DuplicateId`
    /// if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Parse a bank from a JSON array of `{id, question, correctAnswer, difficulty}`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON or invalid questions, plus
    /// anything [`QuestionBank::new`] rejects.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|err| BankError::Parse(err.to_string()))?;
        Self::new(questions)
    }

    /// The built-in market instinct bank (100 statements, ids `q1..q100`).
    ///
    /// Tiers rotate hard/medium/easy by position so every tier is populated.
    #[must_use]
    pub fn market_instinct() -> Self {
        let questions: Vec<Question> = market_questions().filter_map(Result::ok).collect();
        debug_assert_eq!(questions.len(), market::MARKET_INSTINCT.len());

        Self {
            questions: questions.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.difficulty() == difficulty)
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}

fn market_questions() -> impl Iterator<Item = Result<Question, QuestionError>> {
    market::MARKET_INSTINCT
        .iter()
        .enumerate()
        .map(|(idx, (text, answer))| {
            let difficulty = match idx % 3 {
                0 => Difficulty::Hard,
                1 => Difficulty::Medium,
                _ => Difficulty::Easy,
            };
            Question::new(QuestionId::new(format!("q{}", idx + 1)), *text, *answer, difficulty)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, difficulty: Difficulty) -> Question {
        Question::new(QuestionId::new(id), format!("Statement {id}"), true, difficulty).unwrap()
    }

    #[test]
    fn rejects_empty_and_duplicate_banks() {
        assert_eq!(QuestionBank::new(Vec::new()), Err(BankError::Empty));

        let err = QuestionBank::new(vec![
            question("q1", Difficulty::Easy),
            question("q1", Difficulty::Hard),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BankError::DuplicateId {
                id: QuestionId::new("q1")
            }
        );
    }

    #[test]
    fn market_entries_all_validate() {
        let questions = market_questions()
            .collect::<Result<Vec<_>, _>>()
            .expect("every built-in entry is valid");
        let validated = QuestionBank::new(questions).expect("built-in ids are unique");
        assert_eq!(validated, QuestionBank::market_instinct());
    }

    #[test]
    fn market_bank_has_all_tiers() {
        let bank = QuestionBank::market_instinct();
        assert_eq!(bank.len(), 100);
        assert_eq!(bank.by_difficulty(Difficulty::Hard).count(), 34);
        assert_eq!(bank.by_difficulty(Difficulty::Medium).count(), 33);
        assert_eq!(bank.by_difficulty(Difficulty::Easy).count(), 33);

        let first = bank.get(&QuestionId::new("q1")).unwrap();
        assert_eq!(first.difficulty(), Difficulty::Hard);
        assert!(first.correct_answer());
        let second = bank.get(&QuestionId::new("q2")).unwrap();
        assert_eq!(second.difficulty(), Difficulty::Medium);
        let third = bank.get(&QuestionId::new("q3")).unwrap();
        assert_eq!(third.difficulty(), Difficulty::Easy);
        assert!(!third.correct_answer());
    }

    #[test]
    fn market_bank_ids_are_unique() {
        let bank = QuestionBank::market_instinct();
        assert!(QuestionBank::new(bank.as_slice().to_vec()).is_ok());
    }

    #[test]
    fn parses_json_banks() {
        let json = r#"[
            {"id":"a","question":"Stop losses limit losses.","correctAnswer":true,"difficulty":"easy"},
            {"id":"b","question":"Demo accounts use real money.","correctAnswer":false,"difficulty":"hard"}
        ]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.by_difficulty(Difficulty::Medium).count(), 0);

        assert!(matches!(
            QuestionBank::from_json("[{\"id\":\"a\"}]"),
            Err(BankError::Parse(_))
        ));
        assert_eq!(QuestionBank::from_json("[]"), Err(BankError::Empty));
    }
}
