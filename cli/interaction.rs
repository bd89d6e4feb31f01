use anyhow::Result;
use console::{Term, style};
use dialoguer::Confirm;
use vclr_core::SourceFile;

const LISTED_FILES: usize = 10;

pub fn list_files(files: &[SourceFile]) {
    println!("Found {} files:", files.len());
    for file in files.iter().take(LISTED_FILES) {
        let language = file.language.as_deref().unwrap_or("unknown");
        println!(
            "  {} {}",
            style(file.path.display()).dim(),
            style(format!("({})", language)).dim()
        );
    }
    if files.len() > LISTED_FILES {
        println!("  ... and {} more.", files.len() - LISTED_FILES);
    }
}

/// Asks before touching anything. Skipped with `--no-confirm` or when stdout
/// is not a terminal.
pub fn confirm_processing(file_count: usize, manual: bool, no_confirm: bool) -> Result<bool> {
    if no_confirm || !Term::stdout().is_term() {
        return Ok(true);
    }
    if file_count == 0 {
        println!("No files to process.");
        return Ok(false);
    }

    let verb = if manual { "Review" } else { "Strip comments from" };
    let prompt = format!("{} {} files?", verb, style(file_count).cyan());

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Aborted by user.");
    }

    Ok(confirmed)
}
