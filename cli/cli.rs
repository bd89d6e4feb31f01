use vclr_core::{
    BatchOptions, BatchStats, CancelFlag, CliArgs, Command as CoreCommand, FileResult, FileStatus,
    ProfileRegistry, ReviewInput, find_files, process_files,
};
mod interaction;
mod review_tui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::{Term, style};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_INTERRUPTED: u8 = 130;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// `1.23s`, `2m 3.4s` or `1h 2m`.
fn fmt_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else if secs < 3600.0 {
        let minutes = (secs / 60.0).floor();
        format!("{}m {:.1}s", minutes, secs - minutes * 60.0)
    } else {
        let whole = elapsed.as_secs();
        format!("{}h {}m", whole / 3600, (whole % 3600) / 60)
    }
}

fn report_result(result: &FileResult, quiet: bool) {
    let name = result
        .path
        .file_name()
        .map_or_else(|| result.path.display().to_string(), |n| n.to_string_lossy().into_owned());
    match &result.status {
        FileStatus::Cleaned if !quiet => {
            println!("{} {} ({})", style("Done:").green(), name, result.removed);
        }
        FileStatus::Unchanged if !quiet => {
            println!("{} {} (0)", style("Done:").dim(), name);
        }
        FileStatus::Skipped(reason) if !quiet => {
            println!(
                "  {} Skipped: {} - {}",
                style("⚠️").yellow(),
                style(result.path.display()).dim(),
                style(reason).yellow()
            );
        }
        FileStatus::Failed(err) => {
            eprintln!(
                "  {} Failed: {} - {}",
                style("⚠️").yellow(),
                style(result.path.display()).dim(),
                style(err).red()
            );
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;
    init_logging(main_app_args.verbose, main_app_args.quiet);

    if main_app_args.manual {
        let interactive = Term::stdout().is_term() && io::stdin().is_terminal();
        if let Err(e) = review_tui::ensure_interactive(interactive) {
            eprintln!("{}", style(format!("Cannot use --manual: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    }

    let registry = match ProfileRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{}", style(format!("Configuration error: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    let files_to_process = match find_files(&main_app_args, &registry) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", style(format!("Error finding files: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::debug!(files = files_to_process.len(), "discovery finished");
    if files_to_process.is_empty() {
        println!("No files found matching the criteria.");
        return Ok(ExitCode::SUCCESS);
    }

    if !main_app_args.quiet {
        interaction::list_files(&files_to_process);
    }

    match interaction::confirm_processing(
        files_to_process.len(),
        main_app_args.manual,
        main_app_args.no_confirm,
    ) {
        Ok(true) => {}
        Ok(false) => return Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error during confirmation: {}", e)).red()
            );
            return Ok(ExitCode::FAILURE);
        }
    }

    let cancel = CancelFlag::new();
    let listener = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            listener.cancel();
            eprintln!(
                "{}",
                style("Interrupted, finishing files in progress...").yellow()
            );
        }
    });

    let options = BatchOptions {
        parallel: main_app_args.parallel,
        backup: main_app_args.backup,
    };
    let manual = main_app_args.manual;
    let quiet = main_app_args.quiet;
    let total = files_to_process.len();
    let started = Instant::now();

    let batch = tokio::task::spawn_blocking(move || {
        let mut review = manual.then(|| review_tui::TerminalReview::new(cancel.clone()));
        let on_result = |result: &FileResult| report_result(result, quiet);
        process_files(
            &files_to_process,
            &registry,
            options,
            review.as_mut().map(|r| r as &mut dyn ReviewInput),
            &cancel,
            &on_result,
        )
    })
    .await?;

    let report = match batch {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "batch setup failed");
            eprintln!(
                "{}",
                style(format!("Critical error during processing setup: {}", e)).red()
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(text) = summary(&report.stats, total, started.elapsed(), quiet) {
        println!("{}", text);
    }

    if let Err(e) = report.completed() {
        eprintln!("{}", style(format!("Stopped: {}", e)).yellow());
        return Ok(ExitCode::from(EXIT_INTERRUPTED));
    }
    Ok(ExitCode::SUCCESS)
}

/// End-of-run summary, or nothing under `--quiet`.
fn summary(stats: &BatchStats, total: usize, elapsed: Duration, quiet: bool) -> Option<String> {
    if quiet {
        return None;
    }
    let removed = stats.comments_removed();
    let mut text = format!(
        "\nChanged {}/{} {}, removed {} {} in {}.",
        style(stats.files_changed()).green(),
        total,
        if total == 1 { "file" } else { "files" },
        style(removed).green(),
        if removed == 1 { "comment" } else { "comments" },
        fmt_time(elapsed)
    );
    let failed = stats.files_failed();
    if failed > 0 {
        text.push_str(&format!(
            "\n{} {} could not be processed.",
            style(failed).red(),
            if failed == 1 { "file" } else { "files" }
        ));
    }
    Some(text)
}
