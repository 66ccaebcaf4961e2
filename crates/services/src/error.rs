//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ScoreboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the quiz loop.
///
/// The adaptive session itself never fails; these cover calls made out of
/// sequence and persistence of the final score.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question is waiting for an answer")]
    NothingPending,
    #[error("session is not finished ({answered} answered)")]
    NotFinished { answered: usize },
    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
