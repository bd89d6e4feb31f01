use crate::{CoreError, MAX_FILE_SIZE};
use crate::file_finder::SourceFile;
use crate::job::{self, FileError, FileResult, FileStatus, ReviewMode};
use crate::review::ReviewInput;
use crate::stripper::ProfileRegistry;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub parallel: bool,
    pub backup: bool,
}

/// Shared stop signal. Once raised no new file is started; files already in
/// progress run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Totals updated by every worker as results come in.
#[derive(Debug, Default)]
pub struct BatchStats {
    files_changed: AtomicUsize,
    comments_removed: AtomicUsize,
    files_failed: AtomicUsize,
}

impl BatchStats {
    fn record(&self, result: &FileResult) {
        match result.status {
            FileStatus::Cleaned => {
                self.files_changed.fetch_add(1, Ordering::Relaxed);
                self.comments_removed
                    .fetch_add(result.removed, Ordering::Relaxed);
            }
            FileStatus::Failed(_) => {
                self.files_failed.fetch_add(1, Ordering::Relaxed);
            }
            FileStatus::Unchanged | FileStatus::Skipped(_) => {}
        }
    }

    pub fn files_changed(&self) -> usize {
        self.files_changed.load(Ordering::Relaxed)
    }

    pub fn comments_removed(&self) -> usize {
        self.comments_removed.load(Ordering::Relaxed)
    }

    pub fn files_failed(&self) -> usize {
        self.files_failed.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<FileResult>,
    pub stats: BatchStats,
    pub interrupted: bool,
}

impl BatchReport {
    /// `Err(Interrupted)` when the run was cut short.
    pub fn completed(&self) -> Result<(), CoreError> {
        if self.interrupted {
            Err(CoreError::Interrupted)
        } else {
            Ok(())
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Replaces `path` with `content` through a temp file in the same directory,
/// so the original is either fully replaced or untouched.
fn write_back(path: &Path, original: &[u8], content: &str, backup: bool) -> Result<(), FileError> {
    if backup {
        fs::write(backup_path(path), original)?;
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut temp_file = tempfile::Builder::new()
        .prefix(".vclr_")
        .tempfile_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().set_permissions(permissions)?;
    temp_file.persist(path).map_err(|e| FileError::Io(e.error))?;
    Ok(())
}

fn process_single_file(
    file: &SourceFile,
    registry: &ProfileRegistry,
    options: BatchOptions,
    mode: ReviewMode<'_>,
) -> FileResult {
    let started = Instant::now();
    if let Ok(meta) = fs::metadata(&file.path) {
        if meta.len() > MAX_FILE_SIZE {
            let error = FileError::TooLarge {
                size: meta.len(),
                limit: MAX_FILE_SIZE,
            };
            return FileResult::failed(&file.path, meta.len(), started, error);
        }
    }
    let content = match fs::read(&file.path) {
        Ok(content) => content,
        Err(e) => return FileResult::failed(&file.path, 0, started, FileError::Io(e)),
    };
    let profile = file
        .language
        .as_deref()
        .and_then(|lang| registry.get(lang).ok());

    let output = job::process(&file.path, &content, profile, mode);
    let Some(edited) = output.edited else {
        return output.result;
    };

    match write_back(&file.path, &content, &edited, options.backup) {
        Ok(()) => output.result,
        Err(e) => {
            tracing::warn!(path = %file.path.display(), error = %e, "write-back failed");
            FileResult {
                status: FileStatus::Failed(e),
                ..output.result
            }
        }
    }
}

/// Cleans every file in `files`.
///
/// Automatic mode with `options.parallel` fans out over a worker pool sized to
/// the machine. Manual mode always goes one file at a time, since the review
/// input is a single shared source.
pub fn process_files(
    files: &[SourceFile],
    registry: &ProfileRegistry,
    options: BatchOptions,
    review: Option<&mut dyn ReviewInput>,
    cancel: &CancelFlag,
    on_result: &(dyn Fn(&FileResult) + Sync),
) -> Result<BatchReport, CoreError> {
    let stats = BatchStats::default();
    tracing::info!(
        files = files.len(),
        parallel = options.parallel,
        manual = review.is_some(),
        "processing batch"
    );

    let results = match review {
        Some(input) => {
            if options.parallel {
                tracing::debug!("manual review forces sequential processing");
            }
            let mut results = Vec::with_capacity(files.len());
            for file in files {
                if cancel.is_cancelled() {
                    break;
                }
                let result =
                    process_single_file(file, registry, options, ReviewMode::Manual(&mut *input));
                stats.record(&result);
                on_result(&result);
                results.push(result);
            }
            results
        }
        None if options.parallel && files.len() > 1 => {
            let workers = std::thread::available_parallelism()
                .map_or(1, |n| n.get())
                .min(files.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("vclr-worker-{}", i))
                .build()
                .map_err(|e| CoreError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                files
                    .par_iter()
                    .filter_map(|file| {
                        if cancel.is_cancelled() {
                            return None;
                        }
                        let result =
                            process_single_file(file, registry, options, ReviewMode::Automatic);
                        stats.record(&result);
                        on_result(&result);
                        Some(result)
                    })
                    .collect::<Vec<_>>()
            })
        }
        None => {
            let mut results = Vec::with_capacity(files.len());
            for file in files {
                if cancel.is_cancelled() {
                    break;
                }
                let result = process_single_file(file, registry, options, ReviewMode::Automatic);
                stats.record(&result);
                on_result(&result);
                results.push(result);
            }
            results
        }
    };

    let interrupted = cancel.is_cancelled();
    tracing::info!(
        processed = results.len(),
        changed = stats.files_changed(),
        removed = stats.comments_removed(),
        interrupted,
        "batch finished"
    );
    Ok(BatchReport {
        results,
        stats,
        interrupted,
    })
}
