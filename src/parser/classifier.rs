//! Line classification and block comment tracking
//!
//! Every input line is tested against an ordered rule table; the first rule
//! that matches decides the line's class and the next comment-span state.
//! Lines classified as anything other than [`LineClass::Content`] are
//! discarded whole.

use tracing::trace;

/// Whether the scan is currently inside an unterminated `{ ... }` block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentSpan {
    #[default]
    Normal,
    InBlockComment,
}

/// Structural category of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Starts with `#`
    FullLineComment,
    /// Empty or whitespace only
    Blank,
    /// `{ ... }` opened and closed on the same line
    InlineBlockComment,
    /// `{` without a closing `}` on the same line
    BlockCommentStart,
    /// Any line while inside a block comment
    InsideBlockComment,
    /// The line closing a block comment
    BlockCommentEnd,
    /// Header directive or data line, handed to the next stage
    Content,
}

impl LineClass {
    pub fn is_discarded(&self) -> bool {
        !matches!(self, LineClass::Content)
    }
}

type Rule = fn(&str, CommentSpan) -> Option<(LineClass, CommentSpan)>;

/// Classification rules in precedence order; first match wins
const RULES: [(&str, Rule); 6] = [
    ("full-line comment", full_line_comment),
    ("blank", blank),
    // Must run before the block-open rule
    ("single-line block comment", inline_block_comment),
    ("block comment start", block_comment_start),
    ("inside block comment", inside_block_comment),
    ("content", content),
];

fn full_line_comment(line: &str, span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    line.starts_with('#').then_some((LineClass::FullLineComment, span))
}

fn blank(line: &str, span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    line.trim().is_empty().then_some((LineClass::Blank, span))
}

// `{}` counts as a closed comment; it never opens a block
fn inline_block_comment(line: &str, span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    (line.len() >= 2 && line.starts_with('{') && line.ends_with('}'))
        .then_some((LineClass::InlineBlockComment, span))
}

fn block_comment_start(line: &str, _span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    line.starts_with('{').then_some((LineClass::BlockCommentStart, CommentSpan::InBlockComment))
}

fn inside_block_comment(line: &str, span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    if span != CommentSpan::InBlockComment {
        return None;
    }
    if line.ends_with('}') {
        Some((LineClass::BlockCommentEnd, CommentSpan::Normal))
    } else {
        Some((LineClass::InsideBlockComment, span))
    }
}

fn content(_line: &str, span: CommentSpan) -> Option<(LineClass, CommentSpan)> {
    Some((LineClass::Content, span))
}

/// Classify a line given the current comment-span state
///
/// Returns the class and the comment-span state to use for the next line.
pub fn classify(line: &str, span: CommentSpan) -> (LineClass, CommentSpan) {
    RULES
        .iter()
        .find_map(|(name, rule)| {
            let hit = rule(line, span)?;
            trace!(rule = *name, "line classified");
            Some(hit)
        })
        .unwrap_or((LineClass::Content, span))
}

/// Stateful classifier owning the comment-span state for one load
#[derive(Debug, Default)]
pub struct LineClassifier {
    span: CommentSpan,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next line and advance the comment-span state
    pub fn classify(&mut self, line: &str) -> LineClass {
        let (class, next_span) = classify(line, self.span);
        self.span = next_span;
        class
    }

    pub fn span(&self) -> CommentSpan {
        self.span
    }
}
