//! Inline source — text already in memory (tests, embedded fixtures).

use crate::TextSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for InlineSource {
    fn origin(&self) -> String {
        "<inline>".to_string()
    }

    async fn read(&self) -> std::io::Result<String> {
        Ok(self.text.clone())
    }
}
