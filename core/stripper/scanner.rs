use super::common::{CommentKind, CommentSpan};
use super::profile::{BlockComment, Heredoc, LanguageProfile, StringDelimiter};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'p> {
    StringOpen(&'p StringDelimiter),
    LineComment(&'p str),
    BlockOpen(&'p BlockComment),
}

impl Token<'_> {
    fn text(&self) -> &str {
        match self {
            Token::StringOpen(d) => d.open,
            Token::LineComment(m) => m,
            Token::BlockOpen(b) => b.open,
        }
    }

    fn is_comment(&self) -> bool {
        !matches!(self, Token::StringOpen(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState<'p> {
    Normal,
    InString(&'p StringDelimiter),
    InLineComment {
        start: usize,
        line: usize,
    },
    InBlockComment {
        pair: &'p BlockComment,
        depth: usize,
        start: usize,
        line: usize,
    },
}

/// Every opening token of a profile, in match priority order: longest first,
/// string openers before comment markers of the same length, then
/// declaration order (line markers before block openers).
fn token_table(profile: &LanguageProfile) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = profile
        .strings
        .iter()
        .map(Token::StringOpen)
        .chain(profile.line_comments.iter().copied().map(Token::LineComment))
        .chain(profile.block_comments.iter().map(Token::BlockOpen))
        .collect();
    tokens.sort_by_key(|t| (std::cmp::Reverse(t.text().len()), t.is_comment()));
    tokens
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
}

impl Cursor<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn starts_with(&self, token: &str) -> bool {
        self.bytes[self.pos..].starts_with(token.as_bytes())
    }

    fn advance(&mut self, n: usize) {
        let to = (self.pos + n).min(self.bytes.len());
        self.line += self.bytes[self.pos..to]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.pos = to;
    }

    fn at_word_end(&self, len: usize) -> bool {
        self.bytes
            .get(self.pos + len)
            .is_none_or(|b| b.is_ascii_whitespace())
    }

    fn at_word_start(&self) -> bool {
        match self.pos.checked_sub(1).map(|i| self.bytes[i]) {
            None => true,
            Some(b) => b.is_ascii_whitespace() || matches!(b, b';' | b'|' | b'&' | b'(' | b')'),
        }
    }

    /// End of the current line's content, excluding a `\r\n` or `\n` terminator.
    fn line_content_end(&self) -> usize {
        match self.bytes[self.pos..].iter().position(|&b| b == b'\n') {
            Some(offset) => {
                let nl = self.pos + offset;
                if nl > self.pos && self.bytes[nl - 1] == b'\r' {
                    nl - 1
                } else {
                    nl
                }
            }
            None => self.bytes.len(),
        }
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `token` may start here under the profile's word-boundary rules.
fn token_fits(cursor: &Cursor<'_>, token: &Token<'_>, profile: &LanguageProfile) -> bool {
    if !token.is_comment() {
        return true;
    }
    if profile.word_start_comments && !cursor.at_word_start() {
        return false;
    }
    let text = token.text();
    let ends_in_word = text.bytes().last().is_some_and(is_word_byte);
    !(profile.word_end_comments && ends_in_word && !cursor.at_word_end(text.len()))
}

/// Parses a heredoc opener at the cursor: `<<TAG`, `<<-TAG`, `<<~TAG`,
/// `<<'TAG'`, `<<"TAG"` or `<<\TAG`. Returns the tag and the opener length.
fn heredoc_opener<'a>(cursor: &Cursor<'a>, heredoc: &Heredoc) -> Option<(&'a [u8], usize)> {
    let bytes: &'a [u8] = cursor.bytes;
    let rest = bytes[cursor.pos..].strip_prefix(heredoc.prefix.as_bytes())?;
    let mut i = 0;
    if matches!(rest.first(), Some(b'-' | b'~')) {
        i += 1;
    }
    if heredoc.spaced {
        while matches!(rest.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
    }
    let quote = match rest.get(i) {
        Some(&q @ (b'\'' | b'"')) => {
            i += 1;
            Some(q)
        }
        Some(b'\\') => {
            i += 1;
            None
        }
        _ => None,
    };
    let start = i;
    if !rest
        .get(i)
        .is_some_and(|&b| b.is_ascii_alphabetic() || b == b'_')
    {
        return None;
    }
    while rest.get(i).is_some_and(|&b| is_word_byte(b)) {
        i += 1;
    }
    let tag = &rest[start..i];
    if let Some(q) = quote {
        if rest.get(i) != Some(&q) {
            return None;
        }
        i += 1;
    }
    Some((tag, heredoc.prefix.len() + i))
}

fn is_heredoc_end(line: &[u8], tag: &[u8]) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.trim_ascii_start()
        .strip_prefix(tag)
        .is_some_and(|rest| rest.first().is_none_or(|&b| !is_word_byte(b)))
}

/// Consumes the bodies of every pending heredoc, in the order they were
/// opened, starting at the beginning of a line.
fn skip_heredoc_bodies(cursor: &mut Cursor<'_>, pending: &mut VecDeque<&[u8]>) {
    while let Some(tag) = pending.pop_front() {
        while !cursor.at_end() {
            let line_end = cursor.bytes[cursor.pos..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(cursor.bytes.len(), |i| cursor.pos + i);
            let done = is_heredoc_end(&cursor.bytes[cursor.pos..line_end], tag);
            cursor.advance(line_end - cursor.pos + 1);
            if done {
                break;
            }
        }
    }
}

/// Finds every comment in `content` according to `profile`.
///
/// Spans come back in increasing offset order and never overlap. Unterminated
/// block comments run to end of input.
pub fn find_comments(content: &str, profile: &LanguageProfile) -> Vec<CommentSpan> {
    if !profile.has_comments() {
        return Vec::new();
    }
    let tokens = token_table(profile);
    let mut spans = Vec::new();
    let mut heredocs = VecDeque::new();
    let mut cursor = Cursor {
        bytes: content.as_bytes(),
        pos: 0,
        line: 1,
    };
    let mut state = ParseState::Normal;

    if profile.shebang && cursor.starts_with("#!") {
        let end = cursor.line_content_end();
        cursor.advance(end - cursor.pos);
    }

    while !cursor.at_end() {
        state = match state {
            ParseState::Normal if cursor.peek() == b'\n' && !heredocs.is_empty() => {
                cursor.advance(1);
                skip_heredoc_bodies(&mut cursor, &mut heredocs);
                ParseState::Normal
            }
            ParseState::Normal => {
                if let Some((tag, len)) = profile
                    .heredoc
                    .and_then(|h| heredoc_opener(&cursor, &h))
                {
                    heredocs.push_back(tag);
                    cursor.advance(len);
                    continue;
                }
                let matched = tokens
                    .iter()
                    .copied()
                    .find(|t| cursor.starts_with(t.text()) && token_fits(&cursor, t, profile));
                match matched {
                    Some(Token::StringOpen(d)) => {
                        cursor.advance(d.open.len());
                        ParseState::InString(d)
                    }
                    Some(Token::LineComment(m)) => {
                        let next = ParseState::InLineComment {
                            start: cursor.pos,
                            line: cursor.line,
                        };
                        cursor.advance(m.len());
                        next
                    }
                    Some(Token::BlockOpen(pair)) => {
                        let next = ParseState::InBlockComment {
                            pair,
                            depth: 1,
                            start: cursor.pos,
                            line: cursor.line,
                        };
                        cursor.advance(pair.open.len());
                        next
                    }
                    None => {
                        cursor.advance(1);
                        ParseState::Normal
                    }
                }
            }
            ParseState::InString(d) => {
                if d.escape.is_some_and(|e| cursor.peek() == e as u8) {
                    cursor.advance(2);
                    ParseState::InString(d)
                } else if cursor.starts_with(d.close) {
                    cursor.advance(d.close.len());
                    ParseState::Normal
                } else if cursor.peek() == b'\n' && !d.multiline_preserved {
                    ParseState::Normal
                } else {
                    cursor.advance(1);
                    ParseState::InString(d)
                }
            }
            ParseState::InLineComment { start, line } => {
                let end = cursor.line_content_end();
                spans.push(make_span(content, start, end, line, line, CommentKind::Line));
                cursor.advance(end - cursor.pos);
                ParseState::Normal
            }
            ParseState::InBlockComment {
                pair,
                depth,
                start,
                line,
            } => {
                if cursor.starts_with(pair.close) {
                    cursor.advance(pair.close.len());
                    if depth == 1 || !profile.nestable {
                        let end_line = closing_line(&cursor);
                        spans.push(make_span(
                            content,
                            start,
                            cursor.pos,
                            line,
                            end_line,
                            CommentKind::Block,
                        ));
                        ParseState::Normal
                    } else {
                        ParseState::InBlockComment {
                            pair,
                            depth: depth - 1,
                            start,
                            line,
                        }
                    }
                } else if profile.nestable && cursor.starts_with(pair.open) {
                    cursor.advance(pair.open.len());
                    ParseState::InBlockComment {
                        pair,
                        depth: depth + 1,
                        start,
                        line,
                    }
                } else {
                    cursor.advance(1);
                    ParseState::InBlockComment {
                        pair,
                        depth,
                        start,
                        line,
                    }
                }
            }
        };
    }

    match state {
        ParseState::InLineComment { start, line } => {
            spans.push(make_span(content, start, cursor.pos, line, line, CommentKind::Line));
        }
        ParseState::InBlockComment { start, line, .. } => {
            let end_line = closing_line(&cursor);
            spans.push(make_span(
                content,
                start,
                cursor.pos,
                line,
                end_line,
                CommentKind::Block,
            ));
        }
        ParseState::Normal | ParseState::InString(_) => {}
    }

    spans
}

/// Line of the last byte consumed, so a span ending right after a newline
/// still reports the line it ended on.
fn closing_line(cursor: &Cursor<'_>) -> usize {
    if cursor.pos > 0 && cursor.bytes[cursor.pos - 1] == b'\n' {
        cursor.line - 1
    } else {
        cursor.line
    }
}

fn make_span(
    content: &str,
    start: usize,
    end: usize,
    line: usize,
    end_line: usize,
    kind: CommentKind,
) -> CommentSpan {
    CommentSpan {
        start,
        end,
        line,
        end_line,
        kind,
        text: String::from_utf8_lossy(&content.as_bytes()[start..end]).into_owned(),
    }
}
