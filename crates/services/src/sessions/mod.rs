mod difficulty;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use difficulty::{DIFFICULTY_WINDOW, next_difficulty};
pub use progress::SessionProgress;
pub use service::{AdaptiveSession, SESSION_LENGTH};
pub use workflow::{QuizAnswerResult, QuizLoopService};
