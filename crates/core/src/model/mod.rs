mod bank;
mod difficulty;
mod ids;
mod leaderboard;
mod question;
mod session;

pub use bank::{BankError, QuestionBank};
pub use difficulty::{Difficulty, DifficultyError};
pub use ids::QuestionId;
pub use leaderboard::{LEADERBOARD_SIZE, Leaderboard, LeaderboardEntry};
pub use question::{Question, QuestionError};
pub use session::{
    DifficultyBreakdown, DifficultyLabel, HistoryEntry, PASS_PERCENTAGE, SessionScore,
};
