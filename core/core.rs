pub mod editor;
pub mod file_finder;
pub mod job;
pub mod processor;
pub mod review;
pub mod stripper;

pub use editor::{EditOutcome, apply_decisions};
pub use file_finder::{CliArgs, Command, CompletionArgs, SourceFile, VclrArgs, find_files};
pub use job::{FileError, FileResult, FileStatus, JobOutput, ReviewMode, SkipReason, process};
pub use processor::{BatchOptions, BatchReport, BatchStats, CancelFlag, process_files};
pub use review::{
    Decision, ReviewEvent, ReviewInput, ReviewPrompt, ReviewSession, ReviewState, ScriptedInput,
    run_review,
};
pub use stripper::{CommentKind, CommentSpan, LanguageProfile, ProfileRegistry, find_comments};

/// Files larger than this are never scanned.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid language profile '{profile}': {reason}")]
    ProfileConfiguration { profile: String, reason: String },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("interrupted by user")]
    Interrupted,

    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),
}
