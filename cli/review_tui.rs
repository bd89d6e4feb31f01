use console::{Key, Term, style};
use std::io;
use vclr_core::{CancelFlag, CommentSpan, Decision, ReviewEvent, ReviewInput, ReviewPrompt};

const CONTEXT_LINES: usize = 2;
const LEGEND: &str = "Enter remove, A remove all, arrows navigate, S skip, Q quit";

/// Review prompt drawn on the terminal, one keypress per event.
pub struct TerminalReview {
    term: Term,
    cancel: CancelFlag,
}

impl TerminalReview {
    pub fn new(cancel: CancelFlag) -> Self {
        TerminalReview {
            term: Term::stdout(),
            cancel,
        }
    }

    fn render(&self, prompt: &ReviewPrompt<'_>) -> io::Result<()> {
        let span = prompt.span();
        self.term.clear_screen()?;
        self.term
            .write_line(&format!("{} {}", style("File:").bold(), prompt.path.display()))?;
        let marker = match prompt.current {
            Some(Decision::Remove) => style(" [remove]").red().to_string(),
            Some(Decision::Keep) => style(" [keep]").green().to_string(),
            None => String::new(),
        };
        self.term.write_line(&format!(
            "Comment {}/{} at line {}{}",
            style(prompt.index + 1).cyan(),
            prompt.spans.len(),
            span.line,
            marker
        ))?;
        self.term.write_line("")?;
        for line in context_lines(prompt.content, span) {
            self.term.write_line(&line)?;
        }
        self.term.write_line("")?;
        self.term.write_line(&style(LEGEND).dim().to_string())
    }
}

/// Key reads off a terminal come back at once as `Key::Unknown`, which would
/// leave the review spinning.
pub fn ensure_interactive(is_term: bool) -> io::Result<()> {
    if is_term {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "manual review needs an interactive terminal",
        ))
    }
}

impl ReviewInput for TerminalReview {
    fn next_event(&mut self, prompt: &ReviewPrompt<'_>) -> io::Result<Option<ReviewEvent>> {
        ensure_interactive(self.term.is_term())?;
        self.render(prompt)?;
        match self.term.read_key() {
            Ok(Key::Char('\u{3}')) => {
                self.cancel.cancel();
                Ok(Some(ReviewEvent::QuitAndSave))
            }
            Ok(key) => Ok(event_for_key(&key)),
            // Ctrl-C in raw mode
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                self.cancel.cancel();
                Ok(Some(ReviewEvent::QuitAndSave))
            }
            Err(e) => Err(e),
        }
    }
}

fn event_for_key(key: &Key) -> Option<ReviewEvent> {
    match key {
        Key::Enter => Some(ReviewEvent::Confirm),
        Key::ArrowLeft | Key::ArrowUp => Some(ReviewEvent::Previous),
        Key::ArrowRight | Key::ArrowDown => Some(ReviewEvent::Next),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(ReviewEvent::AcceptAllRemaining),
            's' => Some(ReviewEvent::Skip),
            'q' => Some(ReviewEvent::QuitAndSave),
            _ => None,
        },
        _ => None,
    }
}

/// The comment's lines with the comment itself highlighted, plus a little
/// surrounding code, each prefixed by its line number.
fn context_lines(content: &str, span: &CommentSpan) -> Vec<String> {
    let line_start = content[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[span.end..]
        .find('\n')
        .map_or(content.len(), |i| span.end + i);

    let mut before: Vec<&str> = content[..line_start]
        .lines()
        .rev()
        .take(CONTEXT_LINES)
        .collect();
    before.reverse();
    let after = content[line_end..].lines().skip(1).take(CONTEXT_LINES);

    let comment: Vec<String> = content[span.start..span.end]
        .split('\n')
        .map(|part| style(part.trim_end_matches('\r')).black().on_yellow().to_string())
        .collect();
    let region = format!(
        "{}{}{}",
        &content[line_start..span.start],
        comment.join("\n"),
        &content[span.end..line_end]
    );

    let first = span.line - before.len();
    let dim_line =
        |n: usize, text: &str| format!("{} {}", style(format!("{:>5} |", n)).dim(), text);
    let mut out = Vec::new();
    for (i, text) in before.into_iter().enumerate() {
        out.push(dim_line(first + i, style(text).dim().to_string().as_str()));
    }
    for (i, text) in region.split('\n').enumerate() {
        out.push(dim_line(span.line + i, text.trim_end_matches('\r')));
    }
    for (i, text) in after.enumerate() {
        out.push(dim_line(
            span.end_line + 1 + i,
            style(text).dim().to_string().as_str(),
        ));
    }
    out
}
