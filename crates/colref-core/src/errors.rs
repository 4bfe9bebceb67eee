//! Structured error types shared across colref crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ColrefError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (line numbers, vertex ids, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the colref engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ColrefError {
    /// Graph file syntax errors.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Graph construction errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem and stream errors.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ColrefError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ColrefError::Parse(info)
            | ColrefError::Graph(info)
            | ColrefError::Config(info)
            | ColrefError::Serde(info)
            | ColrefError::Io(info) => info,
        }
    }

    /// Adds a context entry to the payload regardless of the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            ColrefError::Parse(info) => ColrefError::Parse(info.with_context(key, value)),
            ColrefError::Graph(info) => ColrefError::Graph(info.with_context(key, value)),
            ColrefError::Config(info) => ColrefError::Config(info.with_context(key, value)),
            ColrefError::Serde(info) => ColrefError::Serde(info.with_context(key, value)),
            ColrefError::Io(info) => ColrefError::Io(info.with_context(key, value)),
        }
    }

    /// Returns the parse failure kind when the error came from the edge-list parser.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            ColrefError::Parse(info) => ParseErrorKind::from_code(&info.code),
            ColrefError::Graph(info) if info.code == ParseErrorKind::UndeclaredVertex.code() => {
                Some(ParseErrorKind::UndeclaredVertex)
            }
            _ => None,
        }
    }
}

/// Failure modes of the line-oriented edge-list format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// The input ended without declaring a problem line.
    MissingProblemLine,
    /// The problem line has fewer than three tokens.
    MalformedProblemLine,
    /// An edge line appeared before the problem line.
    EdgeBeforeProblemLine,
    /// A second problem line appeared.
    DuplicateProblemLine,
    /// An edge line does not hold two endpoints.
    MalformedEdgeLine,
    /// A token expected to be an integer could not be parsed.
    InvalidInteger,
    /// An edge references a vertex outside the declared range.
    UndeclaredVertex,
    /// The problem line declares more vertices than the reader accepts.
    VertexLimitExceeded,
}

impl ParseErrorKind {
    const ALL: [ParseErrorKind; 8] = [
        ParseErrorKind::MissingProblemLine,
        ParseErrorKind::MalformedProblemLine,
        ParseErrorKind::EdgeBeforeProblemLine,
        ParseErrorKind::DuplicateProblemLine,
        ParseErrorKind::MalformedEdgeLine,
        ParseErrorKind::InvalidInteger,
        ParseErrorKind::UndeclaredVertex,
        ParseErrorKind::VertexLimitExceeded,
    ];

    /// Returns the stable error code carried in [`ErrorInfo::code`].
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingProblemLine => "missing-problem-line",
            ParseErrorKind::MalformedProblemLine => "malformed-problem-line",
            ParseErrorKind::EdgeBeforeProblemLine => "edge-before-problem-line",
            ParseErrorKind::DuplicateProblemLine => "duplicate-problem-line",
            ParseErrorKind::MalformedEdgeLine => "malformed-edge-line",
            ParseErrorKind::InvalidInteger => "invalid-integer",
            ParseErrorKind::UndeclaredVertex => "undeclared-vertex",
            ParseErrorKind::VertexLimitExceeded => "vertex-limit-exceeded",
        }
    }

    /// Looks up a kind from its stable code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}
