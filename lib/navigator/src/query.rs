//! The normalized search query.

use std::fmt;



// =============
// === Query ===
// =============

/// Lowercase, trimmed form of the search input value.
#[derive(Clone,Debug,Default,Eq,PartialEq)]
pub struct Query {
    text:String,
}

impl Query {
    /// Normalize the raw input value.
    pub fn new(input:&str) -> Self {
        let text = input.trim().to_lowercase();
        Self {text}
    }

    /// Empty query matches every item.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the already lowercased `label` contains this query.
    pub fn matches(&self, label:&str) -> bool {
        self.is_empty() || label.contains(self.text.as_str())
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
        write!(f,"{:?}",self.text)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(Query::new("  BaN \n").as_str(), "ban");
        assert!(Query::new("   ").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = Query::new("");
        assert!(query.matches("apple"));
        assert!(query.matches(""));
    }

    #[test]
    fn substring_match() {
        let query = Query::new("ocA");
        assert!(query.matches("avocado"));
        assert!(!query.matches("banana"));
    }
}
