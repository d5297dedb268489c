use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Maximum number of tokens a single question is reduced to.
const MAX_TOKENS: usize = 5;

/// Normalized search tokens extracted from a free-form question.
///
/// Double-quoted phrases are kept whole, e.g. `hello "bye bye"` yields
/// `["hello", "bye bye"]`. Tokens shorter than two characters are dropped,
/// duplicates are removed and at most five tokens are retained. Tokens are
/// lowercased so matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTokens {
    tokens: Vec<String>,
}

impl SearchTokens {
    /// Extracts tokens from a question string.
    #[must_use]
    pub fn parse(question: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        let mut rest = question.trim();

        while !rest.is_empty() {
            rest = rest.trim_start();
            let raw = if let Some(after_quote) = rest.strip_prefix('"') {
                match after_quote.find('"') {
                    Some(end) => {
                        let phrase = &after_quote[..end];
                        rest = &after_quote[end + 1..];
                        phrase
                    }
                    None => {
                        rest = "";
                        after_quote
                    }
                }
            } else {
                let end = rest.find(char::is_whitespace).unwrap_or_else(|| rest.len());
                let word = &rest[..end];
                rest = &rest[end..];
                word
            };

            let token = raw.trim().trim_matches('"').to_lowercase();
            if token.chars().count() > 1 && !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        tokens.truncate(MAX_TOKENS);
        Self { tokens }
    }

    /// Returns the extracted tokens in question order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether no usable token was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns whether any token occurs in the given text.
    #[must_use]
    pub fn any_match(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.tokens.iter().any(|token| haystack.contains(token))
    }

    /// Returns the indices of tokens occurring in the given text.
    ///
    /// Callers accumulate indices across several content pieces to decide
    /// whether every token matched somewhere.
    #[must_use]
    pub fn matching_indices(&self, text: &str) -> BTreeSet<usize> {
        let haystack = text.to_lowercase();
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(index, token)| haystack.contains(token).then_some(index))
            .collect()
    }
}
