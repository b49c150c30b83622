use std::fmt;

/// Structural failure. Aborts the whole parse call; no partial HTML is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Mismatched tags: {{% {opened} %}} closed by {{% end{closed} %}}")]
    MismatchedTag { opened: String, closed: String },

    /// Only raised in strict mode; lenient parses record a [`Diagnostic`].
    #[error("Unterminated tag: {{% {tag} %}} has no {{% end{tag} %}}")]
    UnterminatedTag { tag: String },
}

/// Non-fatal condition noticed during a lenient parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The document ended while this tag was still open; its body ran to the end.
    UnterminatedTag { tag: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnterminatedTag { tag } => {
                write!(f, "tag `{tag}` is never closed; its body runs to the end of input")
            }
        }
    }
}

/// How a successful parse finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    /// At least one tag body was cut off by the end of input.
    Unterminated(Vec<String>),
}
