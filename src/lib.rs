//! workdesk - AI productivity task server
//!
//! Accepts productivity tasks (text-to-speech, meeting minutes, email drafts,
//! presentation outlines, code review) and forwards them to hosted AI
//! providers, reshaping the returned text into each task's response structure.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod llm;
pub mod server;
pub mod stats;
pub mod tts;

use thiserror::Error;

/// Main error type for workdesk
#[derive(Error, Debug)]
pub enum WorkdeskError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream provider unavailable: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkdeskError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "workdesk";
