use thiserror::Error;

/// Errors raised while turning source text into lexicon structures.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("{source_name}:{line}: expected a tab between the key and its value")]
    MissingTab { source_name: &'static str, line: usize },

    #[error("{source_name}:{line}: empty key before the tab")]
    EmptyKey { source_name: &'static str, line: usize },

    #[error("Wordlist index error: {0}")]
    Wordlist(#[from] fst::Error),
}

/// Errors raised while resolving a query word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("The entered word is not valid: {0:?}")]
    UnknownWord(String),
}

/// Result type alias for lexicon construction.
pub type Result<T> = std::result::Result<T, LexiconError>;

impl LexiconError {
    /// 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LexiconError::MissingTab { line, .. } | LexiconError::EmptyKey { line, .. } => {
                Some(*line)
            }
            LexiconError::Wordlist(_) => None,
        }
    }
}
