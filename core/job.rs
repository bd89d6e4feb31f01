use crate::MAX_FILE_SIZE;
use crate::editor::apply_decisions;
use crate::review::{Decision, ReviewInput, run_review};
use crate::stripper::{EditError, LanguageProfile, find_comments};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Bytes inspected for NUL when deciding whether a file is text.
const BINARY_SNIFF_LEN: usize = 8192;

#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("not a text file")]
    NotText,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("edit failed: {0}")]
    Edit(#[from] EditError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedLanguage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedLanguage => f.write_str("unsupported language"),
        }
    }
}

#[derive(Debug)]
pub enum FileStatus {
    Cleaned,
    Unchanged,
    Skipped(SkipReason),
    Failed(FileError),
}

#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub original_len: u64,
    pub removed: usize,
    pub skipped: usize,
    pub elapsed: Duration,
    pub status: FileStatus,
}

impl FileResult {
    pub(crate) fn failed(
        path: &Path,
        original_len: u64,
        started: Instant,
        error: FileError,
    ) -> Self {
        FileResult {
            path: path.to_path_buf(),
            original_len,
            removed: 0,
            skipped: 0,
            elapsed: started.elapsed(),
            status: FileStatus::Failed(error),
        }
    }
}

#[derive(Debug)]
pub struct JobOutput {
    pub result: FileResult,
    /// The cleaned text, present only when it differs from the input.
    pub edited: Option<String>,
}

pub enum ReviewMode<'a> {
    Automatic,
    Manual(&'a mut dyn ReviewInput),
}

impl fmt::Debug for ReviewMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewMode::Automatic => f.write_str("Automatic"),
            ReviewMode::Manual(_) => f.write_str("Manual"),
        }
    }
}

pub fn is_text(content: &[u8]) -> bool {
    !content[..content.len().min(BINARY_SNIFF_LEN)].contains(&0)
}

/// Scans and cleans one file's content. Never writes anything.
pub fn process(
    path: &Path,
    content: &[u8],
    profile: Option<&LanguageProfile>,
    mode: ReviewMode<'_>,
) -> JobOutput {
    let started = Instant::now();
    let original_len = content.len() as u64;
    let failed = |error| JobOutput {
        result: FileResult::failed(path, original_len, started, error),
        edited: None,
    };

    if original_len > MAX_FILE_SIZE {
        return failed(FileError::TooLarge {
            size: original_len,
            limit: MAX_FILE_SIZE,
        });
    }
    let Some(profile) = profile else {
        return JobOutput {
            result: FileResult {
                path: path.to_path_buf(),
                original_len,
                removed: 0,
                skipped: 0,
                elapsed: started.elapsed(),
                status: FileStatus::Skipped(SkipReason::UnsupportedLanguage),
            },
            edited: None,
        };
    };
    if !is_text(content) {
        return failed(FileError::NotText);
    }
    let Ok(text) = std::str::from_utf8(content) else {
        return failed(FileError::NotText);
    };

    let spans = find_comments(text, profile);
    tracing::debug!(
        path = %path.display(),
        language = profile.name,
        spans = spans.len(),
        "scanned"
    );

    let decisions = match mode {
        ReviewMode::Automatic => vec![Decision::Remove; spans.len()],
        ReviewMode::Manual(input) => match run_review(path, text, &spans, input) {
            Ok(decisions) => decisions,
            Err(e) => return failed(FileError::Io(e)),
        },
    };

    let outcome = match apply_decisions(text, &spans, &decisions) {
        Ok(outcome) => outcome,
        Err(e) => return failed(FileError::Edit(e)),
    };

    let changed = outcome.content != text;
    JobOutput {
        result: FileResult {
            path: path.to_path_buf(),
            original_len,
            removed: outcome.removed,
            skipped: outcome.kept,
            elapsed: started.elapsed(),
            status: if changed {
                FileStatus::Cleaned
            } else {
                FileStatus::Unchanged
            },
        },
        edited: changed.then_some(outcome.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{ReviewEvent, ScriptedInput};
    use crate::stripper::ProfileRegistry;

    fn python() -> LanguageProfile {
        *ProfileRegistry::builtin().unwrap().get("python").unwrap()
    }

    #[test]
    fn automatic_mode_removes_everything() {
        let profile = python();
        let out = process(
            Path::new("a.py"),
            b"# c\nx = 1  # d\n",
            Some(&profile),
            ReviewMode::Automatic,
        );
        assert!(matches!(out.result.status, FileStatus::Cleaned));
        assert_eq!(out.result.removed, 2);
        assert_eq!(out.result.original_len, 15);
        assert_eq!(out.edited.as_deref(), Some("x = 1\n"));
    }

    #[test]
    fn second_run_is_unchanged() {
        let profile = python();
        let first = process(
            Path::new("a.py"),
            b"x = '#'  # d\n",
            Some(&profile),
            ReviewMode::Automatic,
        );
        let cleaned = first.edited.unwrap();
        let second = process(
            Path::new("a.py"),
            cleaned.as_bytes(),
            Some(&profile),
            ReviewMode::Automatic,
        );
        assert!(matches!(second.result.status, FileStatus::Unchanged));
        assert_eq!(second.result.removed, 0);
        assert!(second.edited.is_none());
    }

    #[test]
    fn manual_mode_uses_review_decisions() {
        let profile = python();
        let mut input = ScriptedInput::new([ReviewEvent::Skip, ReviewEvent::Confirm]);
        let out = process(
            Path::new("a.py"),
            b"# keep\n# drop\n# unseen\n",
            Some(&profile),
            ReviewMode::Manual(&mut input),
        );
        assert_eq!(out.edited.as_deref(), Some("# keep\n# unseen\n"));
        assert_eq!((out.result.removed, out.result.skipped), (1, 2));
    }

    #[test]
    fn missing_profile_is_skipped() {
        let out = process(Path::new("a.xyz"), b"hello", None, ReviewMode::Automatic);
        assert!(matches!(
            out.result.status,
            FileStatus::Skipped(SkipReason::UnsupportedLanguage)
        ));
    }

    #[test]
    fn binary_content_is_not_text() {
        let profile = python();
        let out = process(Path::new("a.py"), b"x\0y", Some(&profile), ReviewMode::Automatic);
        assert!(matches!(out.result.status, FileStatus::Failed(FileError::NotText)));

        let latin1 = process(Path::new("a.py"), b"caf\xe9", Some(&profile), ReviewMode::Automatic);
        assert!(matches!(latin1.result.status, FileStatus::Failed(FileError::NotText)));
    }

    #[test]
    fn oversized_content_fails_before_scanning() {
        let profile = python();
        let big = vec![b'#'; MAX_FILE_SIZE as usize + 1];
        let out = process(Path::new("big.py"), &big, Some(&profile), ReviewMode::Automatic);
        assert!(matches!(
            out.result.status,
            FileStatus::Failed(FileError::TooLarge { .. })
        ));
    }
}
