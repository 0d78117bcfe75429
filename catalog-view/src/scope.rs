//! Listing scopes and the tokens that tag in-flight requests

use std::fmt;
use std::num::NonZeroU32;

/// What a product listing is filtered and paged by.
///
/// Pages are only ever merged within one scope: pages of another category
/// or of a different size describe different listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryScope {
    pub category: Option<String>,
    pub limit: NonZeroU32,
}

impl QueryScope {
    pub fn new(category: Option<String>, limit: NonZeroU32) -> Self {
        Self { category, limit }
    }
}

impl fmt::Display for QueryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{category}/{}", self.limit),
            None => write!(f, "*/{}", self.limit),
        }
    }
}

/// Captured when a request is issued, checked when its reply arrives.
///
/// The generation increases on every reset of the listing (scope change or
/// refresh), so two tokens for the same scope still differ across a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeToken {
    pub scope: QueryScope,
    pub generation: u64,
}

impl ScopeToken {
    pub fn is_current(&self, scope: &QueryScope, generation: u64) -> bool {
        self.generation == generation && &self.scope == scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_token_matching() {
        let scope = QueryScope::new(Some("beauty".into()), limit(30));
        let token = ScopeToken { scope: scope.clone(), generation: 3 };

        assert!(token.is_current(&scope, 3));
        assert!(!token.is_current(&scope, 4));
        assert!(!token.is_current(&QueryScope::new(None, limit(30)), 3));
        assert!(!token.is_current(&QueryScope::new(Some("beauty".into()), limit(10)), 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryScope::new(None, limit(30)).to_string(), "*/30");
        assert_eq!(QueryScope::new(Some("laptops".into()), limit(5)).to_string(), "laptops/5");
    }
}
