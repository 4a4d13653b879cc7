//! Presentation-ready text with bold spans.

use std::fmt;

use serde::Serialize;

/// A run of text with a single weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// Text assembled from plain and bold spans. Renderers decide how bold
/// looks; `Display` drops the styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.push(text.into(), true);
        self
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.push(text.into(), false);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Concatenated text of the non-bold spans only.
    pub fn value_text(&self) -> String {
        self.spans
            .iter()
            .filter(|s| !s.bold)
            .map(|s| s.text.as_str())
            .collect()
    }

    fn push(&mut self, text: String, bold: bool) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.bold == bold => last.text.push_str(&text),
            _ => self.spans.push(Span { text, bold }),
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
