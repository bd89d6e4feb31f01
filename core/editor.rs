//! Turns reviewed comment spans into edited text.
//!
//! A removed comment that was the only thing on its line(s) takes the whole
//! line with it, terminator included. A comment that trails code takes the
//! whitespace in front of it. Anything else is cut out and the surrounding
//! text spliced together.

use crate::review::Decision;
use crate::stripper::common::{ByteRange, CommentSpan, EditError, check_spans, remove_ranges};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub content: String,
    pub removed: usize,
    pub kept: usize,
}

pub fn apply_decisions(
    content: &str,
    spans: &[CommentSpan],
    decisions: &[Decision],
) -> Result<EditOutcome, EditError> {
    if spans.len() != decisions.len() {
        return Err(EditError::DecisionCount {
            spans: spans.len(),
            decisions: decisions.len(),
        });
    }
    check_spans(content, spans)?;

    let removing: Vec<&CommentSpan> = spans
        .iter()
        .zip(decisions)
        .filter(|(_, d)| **d == Decision::Remove)
        .map(|(s, _)| s)
        .collect();
    let removed = removing.len();
    let kept = spans.len() - removed;

    let ranges = removing
        .iter()
        .map(|span| deletion_range(content, span, &removing))
        .collect();
    let content = remove_ranges(content.to_string(), ranges)?;

    Ok(EditOutcome {
        content,
        removed,
        kept,
    })
}

fn deletion_range(content: &str, span: &CommentSpan, removing: &[&CommentSpan]) -> ByteRange {
    let bytes = content.as_bytes();
    let line_start = content[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[span.end..]
        .find('\n')
        .map_or(content.len(), |i| span.end + i);

    let blank_before = is_blank(bytes, line_start, span.start, removing);
    let blank_after = is_blank(bytes, span.end, line_end, removing);

    if blank_before && blank_after {
        let to = if line_end < content.len() {
            line_end + 1
        } else {
            line_end
        };
        ByteRange {
            from: line_start,
            to,
        }
    } else if blank_after {
        let mut from = span.start;
        while from > line_start && matches!(bytes[from - 1], b' ' | b'\t') {
            from -= 1;
        }
        ByteRange { from, to: span.end }
    } else {
        ByteRange {
            from: span.start,
            to: span.end,
        }
    }
}

/// Whether `from..to` holds only whitespace once the other removed spans are gone.
fn is_blank(bytes: &[u8], from: usize, to: usize, removing: &[&CommentSpan]) -> bool {
    let mut i = from;
    while i < to {
        let covering = removing.partition_point(|s| s.start <= i);
        if covering > 0 && removing[covering - 1].end > i {
            i = removing[covering - 1].end;
            continue;
        }
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stripper::{ProfileRegistry, find_comments};

    fn strip_all(lang: &str, input: &str) -> String {
        let registry = ProfileRegistry::builtin().unwrap();
        let spans = find_comments(input, registry.get(lang).unwrap());
        let decisions = vec![Decision::Remove; spans.len()];
        apply_decisions(input, &spans, &decisions).unwrap().content
    }

    #[test]
    fn whole_line_comment_leaves_no_blank_line() {
        let input = "a = 1\n# gone\nb = 2\n";
        assert_eq!(strip_all("python", input), "a = 1\nb = 2\n");
    }

    #[test]
    fn indented_comment_line_is_removed() {
        let input = "fn main() {\n    // note\n    run();\n}\n";
        assert_eq!(strip_all("rust", input), "fn main() {\n    run();\n}\n");
    }

    #[test]
    fn trailing_comment_keeps_code_and_terminator() {
        let input = "x = 1   # set x\ny = 2\n";
        assert_eq!(strip_all("python", input), "x = 1\ny = 2\n");
    }

    #[test]
    fn existing_blank_lines_are_untouched() {
        let input = "a\n\n// c\n\nb\n";
        assert_eq!(strip_all("c", input), "a\n\n\nb\n");
    }

    #[test]
    fn last_line_without_terminator() {
        assert_eq!(strip_all("python", "a = 1\n# end"), "a = 1\n");
        assert_eq!(strip_all("python", "# only"), "");
    }

    #[test]
    fn crlf_lines() {
        let input = "a = 1 # c\r\n# whole\r\nb = 2\r\n";
        assert_eq!(strip_all("python", input), "a = 1\r\nb = 2\r\n");
    }

    #[test]
    fn block_on_its_own_lines_is_removed_entirely() {
        let input = "int a;\n/*\n * doc\n */\nint b;\n";
        assert_eq!(strip_all("c", input), "int a;\nint b;\n");
    }

    #[test]
    fn inline_block_is_spliced() {
        let input = "int /* type */ a = 1;\n";
        assert_eq!(strip_all("c", input), "int  a = 1;\n");
    }

    #[test]
    fn multiline_block_between_code_is_spliced() {
        let input = "a(); /* one\ntwo */ b();\n";
        assert_eq!(strip_all("c", input), "a();  b();\n");
    }

    #[test]
    fn trailing_multiline_block_drops_preceding_whitespace() {
        let input = "a(); /* one\ntwo */\nb();\n";
        assert_eq!(strip_all("c", input), "a();\nb();\n");
    }

    #[test]
    fn two_comments_on_one_line_remove_the_line() {
        let input = "x\n/* a */ // b\ny\n";
        assert_eq!(strip_all("c", input), "x\ny\n");
    }

    #[test]
    fn kept_spans_are_untouched() {
        let registry = ProfileRegistry::builtin().unwrap();
        let input = "# one\nx = 1  # two\n# three\n";
        let spans = find_comments(input, registry.get("python").unwrap());
        let decisions = [Decision::Keep, Decision::Remove, Decision::Keep];
        let outcome = apply_decisions(input, &spans, &decisions).unwrap();
        assert_eq!(outcome.content, "# one\nx = 1\n# three\n");
        assert_eq!((outcome.removed, outcome.kept), (1, 2));
    }

    #[test]
    fn kept_comment_keeps_its_neighbour_line() {
        let registry = ProfileRegistry::builtin().unwrap();
        let input = "/* keep */ /* drop */\n";
        let spans = find_comments(input, registry.get("c").unwrap());
        let outcome = apply_decisions(input, &spans, &[Decision::Keep, Decision::Remove]).unwrap();
        assert_eq!(outcome.content, "/* keep */\n");
    }

    #[test]
    fn decision_count_must_match() {
        let registry = ProfileRegistry::builtin().unwrap();
        let spans = find_comments("# a\n", registry.get("python").unwrap());
        assert_eq!(
            apply_decisions("# a\n", &spans, &[]),
            Err(EditError::DecisionCount {
                spans: 1,
                decisions: 0
            })
        );
    }

    #[test]
    fn docstring_example() {
        let input = concat!(
            "# This is a comment\n",
            "def hello():\n",
            "    \"\"\"This is a docstring\"\"\"  # Keep docstrings\n",
            "    message = \"# Not a comment\"  # This is removed\n",
            "    print(message)  # This too\n",
        );
        let expected = concat!(
            "def hello():\n",
            "    \"\"\"This is a docstring\"\"\"\n",
            "    message = \"# Not a comment\"\n",
            "    print(message)\n",
        );
        assert_eq!(strip_all("python", input), expected);
    }
}
