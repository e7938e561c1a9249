//! Header directive recognition and application
//!
//! Directives (`mycall`, `operator`, `mywwff`, `mysota`, `qslmsg`,
//! `nickname`, `date`) set sticky values that apply to every following
//! data line until overridden.

use crate::constants::DIRECTIVE_KEYWORDS;
use crate::models::HeaderState;
use crate::validators::{Checked, validate_call, validate_date, validate_sota, validate_wwff};
use regex::Regex;
use std::sync::LazyLock;

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({})\s+", DIRECTIVE_KEYWORDS.join("|")))
        .expect("valid directive regex")
});

/// Header directive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    MyCall,
    Operator,
    MyWwff,
    MySota,
    QslMsg,
    Nickname,
    Date,
}

impl Directive {
    /// All directives, in the order of [`DIRECTIVE_KEYWORDS`]
    pub const ALL: [Directive; 7] = [
        Self::MyCall,
        Self::Operator,
        Self::MyWwff,
        Self::MySota,
        Self::QslMsg,
        Self::Nickname,
        Self::Date,
    ];

    fn from_keyword(keyword: &str) -> Option<Self> {
        DIRECTIVE_KEYWORDS
            .iter()
            .position(|k| k.eq_ignore_ascii_case(keyword))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Label used in the cleaned input echo
    pub fn echo_label(&self) -> &'static str {
        match self {
            Self::MyCall => "My call",
            Self::Operator => "Operator",
            Self::MyWwff => "My WWFF",
            Self::MySota => "My SOTA",
            Self::QslMsg => "QSL Message",
            Self::Nickname => "eQSL Nickname",
            Self::Date => "Date",
        }
    }

    /// Label used in validation error messages
    pub fn error_label(&self) -> &'static str {
        match self {
            Self::MyCall => "myCall",
            Self::Operator => "Operator",
            Self::MyWwff => "\"My WWFF\"",
            Self::MySota => "\"My SOTA\"",
            Self::QslMsg => "QSL message",
            Self::Nickname => "Nickname",
            Self::Date => "Date",
        }
    }

    /// Run the directive's field validator; free-text directives pass verbatim
    fn validate(&self, raw: &str) -> Checked {
        match self {
            Self::MyCall | Self::Operator => validate_call(raw),
            Self::MyWwff => validate_wwff(raw),
            Self::MySota => validate_sota(raw),
            Self::Date => validate_date(raw),
            Self::QslMsg | Self::Nickname => Checked {
                value: raw.to_string(),
                error: None,
            },
        }
    }

    fn slot<'a>(&self, state: &'a mut HeaderState) -> &'a mut String {
        match self {
            Self::MyCall => &mut state.my_call,
            Self::Operator => &mut state.operator,
            Self::MyWwff => &mut state.my_wwff,
            Self::MySota => &mut state.my_sota,
            Self::QslMsg => &mut state.qsl_msg,
            Self::Nickname => &mut state.nickname,
            Self::Date => &mut state.date,
        }
    }
}

/// A line recognised as a header directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine<'a> {
    pub directive: Directive,

    /// Text after the keyword and its whitespace, trailing blanks removed
    pub value: &'a str,
}

/// Recognise a header directive at the start of a line
pub fn recognize(line: &str) -> Option<DirectiveLine<'_>> {
    let caps = DIRECTIVE_REGEX.captures(line)?;
    let directive = Directive::from_keyword(caps.get(1)?.as_str())?;
    let rest = &line[caps.get(0)?.end()..];
    Some(DirectiveLine {
        directive,
        value: rest.trim_end(),
    })
}

/// What applying a directive did to the header state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOutcome {
    /// Formatted echo line when a value was stored
    pub echo: Option<String>,

    /// Validator message when the value was malformed
    pub error: Option<String>,
}

/// Apply a recognised directive to the header state
///
/// An empty value leaves the state untouched. Otherwise the validator's
/// output is stored even when the validator reports an error.
pub fn apply_directive(state: &mut HeaderState, line: &DirectiveLine<'_>) -> DirectiveOutcome {
    if line.value.is_empty() {
        return DirectiveOutcome::default();
    }

    let checked = line.directive.validate(line.value);
    *line.directive.slot(state) = checked.value.clone();

    DirectiveOutcome {
        echo: Some(format!("{}: {}", line.directive.echo_label(), checked.value)),
        error: checked.error,
    }
}
