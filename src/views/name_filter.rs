use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

/// Longest filter query accepted from the keyboard
pub const MAX_QUERY_LEN: usize = 64;

/// Fuzzy filter over company names (smart case, so `acme` matches `ACME B.V.`).
///
/// Narrows what the results screen shows; the stored list is never touched.
pub struct NameFilter {
    query: String,
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFilter {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            pattern: Pattern::parse("", CaseMatching::Smart, Normalization::Smart),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.chars().take(MAX_QUERY_LEN).collect();
        self.pattern.reparse(&self.query, CaseMatching::Smart, Normalization::Smart);
    }

    pub fn push(&mut self, c: char) {
        if self.query.chars().count() < MAX_QUERY_LEN {
            let mut query = self.query.clone();
            query.push(c);
            self.set_query(&query);
        }
    }

    pub fn pop(&mut self) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.set_query(&query);
        }
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }

    pub fn matches(&mut self, name: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        let haystack = Utf32Str::new(name, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher).is_some()
    }

    /// Indices of the names that pass, in their original order
    pub fn visible<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
        names
            .into_iter()
            .enumerate()
            .filter_map(|(idx, name)| self.matches(name).then_some(idx))
            .collect()
    }
}
