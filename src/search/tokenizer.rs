//! Query tokenization.
//!
//! A query is lower-cased and split on whitespace into a `TokenBuffer`.
//! Rules claim tokens out of the buffer; a claimed token is gone for every
//! later rule, and unclaimed tokens keep their relative order.

/// Owned, mutable list of query tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<String>,
    /// Tokens claimed since the last `take_claimed`.
    claimed: Vec<String>,
}

impl TokenBuffer {
    /// Lower-case and split a raw query.
    ///
    /// ```
    /// use wx_deck::search::TokenBuffer;
    ///
    /// let tokens = TokenBuffer::tokenize("  White  LV3 ");
    /// assert_eq!(tokens.as_slice(), ["white", "lv3"]);
    /// assert!(TokenBuffer::tokenize("   ").is_empty());
    /// ```
    #[must_use]
    pub fn tokenize(query: &str) -> Self {
        Self::from_tokens(query.to_lowercase().split_whitespace())
    }

    /// Build a buffer from already-split tokens.
    pub fn from_tokens<T: Into<String>>(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            claimed: Vec::new(),
        }
    }

    /// Remove every token `parse` recognizes.
    ///
    /// Returns the parsed values in token order. Tokens `parse` rejects stay
    /// in the buffer in their original order.
    pub fn claim<T>(&mut self, mut parse: impl FnMut(&str) -> Option<T>) -> Vec<T> {
        let mut values = Vec::new();
        let mut kept = Vec::with_capacity(self.tokens.len());
        for token in self.tokens.drain(..) {
            match parse(&token) {
                Some(value) => {
                    log::trace!("claimed token {token:?}");
                    values.push(value);
                    self.claimed.push(token);
                }
                None => kept.push(token),
            }
        }
        self.tokens = kept;
        values
    }

    /// Remove and return every remaining token.
    pub fn claim_rest(&mut self) -> Vec<String> {
        let rest = std::mem::take(&mut self.tokens);
        self.claimed.extend(rest.iter().cloned());
        rest
    }

    /// Tokens claimed since the previous call.
    pub fn take_claimed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.claimed)
    }

    /// Remaining (unclaimed) tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
