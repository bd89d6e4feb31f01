use crate::CoreError;
use std::collections::HashSet;

/// A quoting form whose content is never comment source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDelimiter {
    pub open: &'static str,
    pub close: &'static str,
    pub escape: Option<char>,
    /// Content stays a string across line terminators and, if never closed,
    /// up to end of input.
    pub multiline_preserved: bool,
}

impl StringDelimiter {
    /// Symmetric delimiter with backslash escapes, ending at the line terminator.
    pub const fn quoted(quote: &'static str) -> Self {
        StringDelimiter {
            open: quote,
            close: quote,
            escape: Some('\\'),
            multiline_preserved: false,
        }
    }

    /// Delimiter without any escape character.
    pub const fn raw(open: &'static str, close: &'static str) -> Self {
        StringDelimiter {
            open,
            close,
            escape: None,
            multiline_preserved: false,
        }
    }

    pub const fn multiline(self) -> Self {
        StringDelimiter {
            multiline_preserved: true,
            ..self
        }
    }
}

/// Here-document opener such as `<<EOF`. The body starts on the next line and
/// runs up to a line holding only the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heredoc {
    pub prefix: &'static str,
    /// Blanks are allowed between the prefix and the tag (`<< EOF`).
    pub spaced: bool,
}

impl Heredoc {
    pub const fn new(prefix: &'static str) -> Self {
        Heredoc {
            prefix,
            spaced: false,
        }
    }

    pub const fn spaced(self) -> Self {
        Heredoc {
            spaced: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockComment {
    pub open: &'static str,
    pub close: &'static str,
}

impl BlockComment {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        BlockComment { open, close }
    }
}

/// Comment and string syntax of one language.
///
/// Marker lists are ordered: where one marker is a prefix of another, the
/// longer one must be declared first. The scanner always prefers the longest
/// match, so the ordering only decides between equal-length comment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub block_comments: &'static [BlockComment],
    pub nestable: bool,
    pub strings: &'static [StringDelimiter],
    /// `#!` on the very first line is an interpreter directive.
    pub shebang: bool,
    /// Comment markers only count at the start of a word.
    pub word_start_comments: bool,
    /// A marker ending in a letter or digit must be followed by whitespace or
    /// end of input, so `REM` never matches inside `remark`.
    pub word_end_comments: bool,
    pub heredoc: Option<Heredoc>,
}

impl LanguageProfile {
    pub const EMPTY: LanguageProfile = LanguageProfile {
        name: "",
        extensions: &[],
        filenames: &[],
        line_comments: &[],
        block_comments: &[],
        nestable: false,
        strings: &[],
        shebang: false,
        word_start_comments: false,
        word_end_comments: false,
        heredoc: None,
    };

    pub fn has_comments(&self) -> bool {
        !self.line_comments.is_empty() || !self.block_comments.is_empty()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let fail = |reason: String| CoreError::ProfileConfiguration {
            profile: self.name.to_string(),
            reason,
        };

        if self.name.is_empty() {
            return Err(fail("profile has no name".to_string()));
        }

        let string_opens: Vec<&str> = self.strings.iter().map(|s| s.open).collect();
        let block_opens: Vec<&str> = self.block_comments.iter().map(|b| b.open).collect();

        check_marker_list("line comment", self.line_comments).map_err(fail)?;
        check_marker_list("block comment open", &block_opens).map_err(fail)?;
        check_marker_list("string open", &string_opens).map_err(fail)?;

        for block in self.block_comments {
            check_token("block comment close", block.close).map_err(fail)?;
            if self.nestable && block.open == block.close {
                return Err(fail(format!(
                    "nestable block comment '{}' has identical open and close tokens",
                    block.open
                )));
            }
        }
        for string in self.strings {
            check_token("string close", string.close).map_err(fail)?;
            if let Some(escape) = string.escape {
                if !escape.is_ascii() {
                    return Err(fail(format!("escape {:?} is not ASCII", escape)));
                }
            }
        }

        if let Some(heredoc) = self.heredoc {
            check_token("heredoc prefix", heredoc.prefix).map_err(fail)?;
        }

        for open in &string_opens {
            if self.line_comments.contains(open) || block_opens.contains(open) {
                return Err(fail(format!(
                    "'{}' is both a string opener and a comment marker",
                    open
                )));
            }
        }
        Ok(())
    }
}

fn check_token(what: &str, token: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err(format!("empty {} token", what));
    }
    if !token.is_ascii() {
        return Err(format!("{} '{}' is not ASCII", what, token));
    }
    if token.contains(['\n', '\r']) {
        return Err(format!("{} {:?} contains a line terminator", what, token));
    }
    Ok(())
}

fn check_marker_list(what: &str, markers: &[&str]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for (i, marker) in markers.iter().enumerate() {
        check_token(what, marker)?;
        if !seen.insert(*marker) {
            return Err(format!("duplicate {} '{}'", what, marker));
        }
        if let Some(longer) = markers[i + 1..]
            .iter()
            .find(|later| later.len() > marker.len() && later.starts_with(marker))
        {
            return Err(format!(
                "{} '{}' is a prefix of later '{}'; declare the longer one first",
                what, marker, longer
            ));
        }
    }
    Ok(())
}
