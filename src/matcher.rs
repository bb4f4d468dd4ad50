use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Boolean fuzzy matcher: a pattern matches when its characters appear in the
/// haystack in order, case-insensitively. No ranking is applied.
pub struct FuzzyMatcher {
    matcher: Matcher,
    haystack_buf: Vec<char>,
    needle_buf: Vec<char>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        let mut config = Config::DEFAULT;
        config.ignore_case = true;
        config.normalize = false;
        Self {
            matcher: Matcher::new(config),
            haystack_buf: Vec::new(),
            needle_buf: Vec::new(),
        }
    }

    pub fn matches(&mut self, haystack: &str, pattern: &str) -> bool {
        if pattern.is_empty() {
            return true;
        }
        if haystack.is_empty() {
            return false;
        }

        // nucleo folds the haystack itself but expects an already folded needle.
        let pattern = pattern.to_lowercase();
        let haystack = Utf32Str::new(haystack, &mut self.haystack_buf);
        let needle = Utf32Str::new(&pattern, &mut self.needle_buf);
        self.matcher.fuzzy_match(haystack, needle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(haystack: &str, pattern: &str) -> bool {
        FuzzyMatcher::new().matches(haystack, pattern)
    }

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(matches("", ""));
        assert!(matches("Not Found", ""));
    }

    #[test]
    fn empty_haystack_rejects_non_empty_pattern() {
        assert!(!matches("", "a"));
    }

    #[test]
    fn ordered_subsequence_is_required() {
        assert!(matches("Not Found", "notf"));
        assert!(matches("Not Found", "nf"));
        assert!(matches("404 Not Found Client Error", "404nf"));
        assert!(!matches("Not Found", "dnf"));
        assert!(!matches("Not Found", "fn0"));
    }

    #[test]
    fn positions_are_not_reused() {
        assert!(matches("Gone", "g"));
        assert!(!matches("Gone", "gg"));
        assert!(matches("Multiple Choices", "ll"));
        assert!(!matches("Multiple Choices", "lll"));
    }

    #[test]
    fn case_is_folded_on_both_sides() {
        assert!(matches("not found", "NOTF"));
        assert!(matches("NOT FOUND", "notf"));
        assert!(matches("I'm a teapot", "TEApot"));
    }

    #[test]
    fn pattern_longer_than_haystack_never_matches() {
        assert!(!matches("OK", "oka"));
    }

    #[test]
    fn repeated_calls_are_stable() {
        let mut matcher = FuzzyMatcher::new();
        for _ in 0..3 {
            assert!(matcher.matches("Bad Gateway", "bgw"));
            assert!(!matcher.matches("Bad Gateway", "wgb"));
        }
    }
}
