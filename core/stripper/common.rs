use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentKind::Line => f.write_str("line"),
            CommentKind::Block => f.write_str("block"),
        }
    }
}

/// A run of input classified as a comment.
///
/// `start..end` are byte offsets into the scanned content; lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub end_line: usize,
    pub kind: CommentKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub from: usize,
    pub to: usize,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{spans} spans but {decisions} decisions")]
    DecisionCount { spans: usize, decisions: usize },

    #[error("range {from}..{to} is invalid for content of length {len}")]
    OutOfBounds { from: usize, to: usize, len: usize },

    #[error("range {from}..{to} does not fall on character boundaries")]
    NotCharBoundary { from: usize, to: usize },

    #[error("spans overlap or are out of order at offset {at}")]
    Overlap { at: usize },
}

/// Deletes `ranges` from `input`, highest offset first.
///
/// Ranges must be in bounds; overlapping or touching ranges are merged first.
pub fn remove_ranges(mut input: String, mut ranges: Vec<ByteRange>) -> Result<String, EditError> {
    if ranges.is_empty() {
        return Ok(input);
    }
    check_ranges_bounds(&input, &ranges)?;

    ranges.sort_by_key(|r| r.from);
    let merged = merge_sorted_ranges(ranges);

    for r in merged.into_iter().rev() {
        input.drain(r.from..r.to);
    }
    Ok(input)
}

/// Spans handed to the editor must come straight from the scanner: in order,
/// disjoint and within the content.
pub fn check_spans(input: &str, spans: &[CommentSpan]) -> Result<(), EditError> {
    let ranges: Vec<ByteRange> = spans
        .iter()
        .map(|s| ByteRange {
            from: s.start,
            to: s.end,
        })
        .collect();
    check_ranges_bounds(input, &ranges)?;
    check_sorted_ranges_overlap(&ranges)
}

fn check_ranges_bounds(input: &str, ranges: &[ByteRange]) -> Result<(), EditError> {
    let len = input.len();
    for r in ranges {
        if r.from > len || r.to > len || r.from > r.to {
            tracing::warn!(from = r.from, to = r.to, len, "invalid edit bounds");
            return Err(EditError::OutOfBounds {
                from: r.from,
                to: r.to,
                len,
            });
        }
        if !input.is_char_boundary(r.from) || !input.is_char_boundary(r.to) {
            return Err(EditError::NotCharBoundary {
                from: r.from,
                to: r.to,
            });
        }
    }
    Ok(())
}

fn check_sorted_ranges_overlap(ranges: &[ByteRange]) -> Result<(), EditError> {
    let mut last_to = 0;
    for r in ranges {
        if r.from < last_to {
            tracing::warn!(from = r.from, last_to, "overlapping spans");
            return Err(EditError::Overlap { at: r.from });
        }
        last_to = r.to;
    }
    Ok(())
}

fn merge_sorted_ranges(ranges: Vec<ByteRange>) -> Vec<ByteRange> {
    let mut merged: Vec<ByteRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.from <= last.to => last.to = last.to.max(r.to),
            _ => merged.push(r),
        }
    }
    merged
}
