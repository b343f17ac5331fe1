//! Token spans and recognizer candidates.

use crate::error_handling::ExtractError;

/// A half-open `[start, end)` range over a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    start: usize,
    end: usize,
}

impl TokenSpan {
    /// Creates a span.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvertedSpan` if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, ExtractError> {
        if start > end {
            return Err(ExtractError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// First index in the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `[start, end)`, or an empty span at `start` when `end` lies before it.
    pub(crate) fn between(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A one-token window starting at `start`. May lie past the token array.
    pub(crate) fn single(start: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(1),
        }
    }

    /// The same window moved one token to the right.
    pub(crate) fn shifted(self) -> Self {
        Self {
            start: self.start.saturating_add(1),
            end: self.end.saturating_add(1),
        }
    }

    /// Tokens inside the span joined by single spaces.
    ///
    /// Indexes past the end of `tokens` are treated as absent, so a window
    /// that lies entirely outside yields an empty string.
    pub(crate) fn join(&self, tokens: &[String]) -> String {
        let end = self.end.min(tokens.len());
        let start = self.start.min(end);
        tokens[start..end].join(" ")
    }
}

/// A recognizer's proposal: a span over a token array plus its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddressCandidate<'a> {
    tokens: &'a [String],
    span: TokenSpan,
    probability: f64,
}

impl<'a> AddressCandidate<'a> {
    /// Creates a candidate after checking the span against `tokens`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::SpanOutOfBounds` if the span ends past the token
    /// array and `ExtractError::InvalidProbability` if `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn new(
        tokens: &'a [String],
        span: TokenSpan,
        probability: f64,
    ) -> Result<Self, ExtractError> {
        if span.end > tokens.len() {
            return Err(ExtractError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                len: tokens.len(),
            });
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(ExtractError::InvalidProbability(probability));
        }
        Ok(Self {
            tokens,
            span,
            probability,
        })
    }

    /// The full token array.
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    /// The proposed address span.
    pub fn span(&self) -> TokenSpan {
        self.span
    }

    /// The recognizer's confidence.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The tokens covered by the span.
    pub fn covered(&self) -> &'a [String] {
        &self.tokens[self.span.start..self.span.end]
    }
}
