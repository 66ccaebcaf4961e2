//! Reactive difficulty controller for adaptive sessions.

use quiz_core::model::{Difficulty, HistoryEntry};

/// Number of most recent answers that steer the next draw.
pub const DIFFICULTY_WINDOW: usize = 3;

/// Answers within the window needed to move a tier up (correct) or down (wrong).
const STEP_THRESHOLD: usize = 2;

/// Difficulty for the next question given the current tier and the answers so far.
///
/// Until the window is full the session stays at `Medium`. After that, a
/// mostly-correct window steps one tier harder and a mostly-wrong window steps
/// one tier easier, never past `Hard` or `Easy`.
#[must_use]
pub fn next_difficulty(current: Difficulty, history: &[HistoryEntry]) -> Difficulty {
    if history.len() < DIFFICULTY_WINDOW {
        return Difficulty::Medium;
    }

    let recent = &history[history.len() - DIFFICULTY_WINDOW..];
    let correct = recent.iter().filter(|entry| entry.correct).count();
    let wrong = recent.len() - correct;

    if correct >= STEP_THRESHOLD {
        current.harder()
    } else if wrong >= STEP_THRESHOLD {
        current.easier()
    } else {
        current
    }
}
