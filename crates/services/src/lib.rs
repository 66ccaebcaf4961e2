#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod scoreboard_service;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use error::{AppServicesError, ScoreboardError, SessionError};
pub use scoreboard_service::{ScoreboardService, ScoreboardUpdate};

pub use sessions::{
    AdaptiveSession, QuizAnswerResult, QuizLoopService, SESSION_LENGTH, SessionProgress,
};
