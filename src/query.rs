/// Hashtags typed into the search box, split on commas.
///
/// Tokens are trimmed but otherwise passed through untouched: empty tokens from
/// consecutive commas survive, duplicates are kept and order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Returns `None` when the raw text is empty or whitespace only.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let tokens = raw.split(',').map(|token| token.trim().to_string()).collect();

        Some(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
