/// A compiled robots.txt path pattern
///
/// Patterns are implicitly anchored to the start of the candidate path.
/// Within the pattern, `*` matches any sequence of characters (including
/// the empty one) and a trailing `$` anchors the match to the end of the
/// candidate. Everything else, `/` included, matches literally and
/// case-sensitively.
///
/// Compilation splits the pattern into literal segments on `*`; matching is
/// a single greedy left-to-right scan confirming each segment appears in
/// order, so a compiled pattern is cheap to evaluate repeatedly and safe to
/// share between threads.
///
/// # Examples
///
/// ```
/// use torii_robots::matcher::PathPattern;
///
/// let pattern = PathPattern::compile("/folder/*.gif$");
/// assert!(pattern.matches("/folder/cat.gif"));
/// assert!(!pattern.matches("/folder/cat.gif2"));
///
/// // Prefix semantics without an end anchor
/// let pattern = PathPattern::compile("/private");
/// assert!(pattern.matches("/private"));
/// assert!(pattern.matches("/private/more"));
/// assert!(!pattern.matches("/priv"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: String,
    segments: Vec<String>,
    anchored: bool,
}

impl PathPattern {
    /// Compiles a pattern string into a reusable matcher
    ///
    /// An empty pattern compiles to a matcher that matches nothing: an
    /// empty allow/disallow value is a rule that is present but inert.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The raw pattern string from an allow/disallow value
    pub fn compile(pattern: &str) -> Self {
        let (body, anchored) = match pattern.strip_suffix('$') {
            Some(body) => (body, true),
            None => (pattern, false),
        };

        Self {
            pattern: pattern.to_string(),
            segments: body.split('*').map(str::to_string).collect(),
            anchored,
        }
    }

    /// Returns the raw pattern string this matcher was compiled from
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Checks whether a candidate path matches this pattern
    ///
    /// # Arguments
    ///
    /// * `candidate` - The URL path to test (not case-normalized)
    ///
    /// # Returns
    ///
    /// * `true` - If the candidate matches
    /// * `false` - Otherwise (always, for an empty pattern)
    pub fn matches(&self, candidate: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }

        // The first segment is anchored to the start of the candidate
        let first = &self.segments[0];
        if !candidate.starts_with(first.as_str()) {
            return false;
        }

        if self.segments.len() == 1 {
            // No wildcards: prefix match, or exact match when end-anchored
            return !self.anchored || candidate.len() == first.len();
        }

        // Middle segments must appear in order; taking the leftmost
        // occurrence each time leaves the most input for later segments
        let mut pos = first.len();
        for segment in &self.segments[1..self.segments.len() - 1] {
            match candidate[pos..].find(segment.as_str()) {
                Some(offset) => pos += offset + segment.len(),
                None => return false,
            }
        }

        let last = &self.segments[self.segments.len() - 1];
        if self.anchored {
            // The final segment must sit at the very end, after `pos`
            candidate.ends_with(last.as_str()) && candidate.len() - last.len() >= pos
        } else {
            candidate[pos..].contains(last.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let pattern = PathPattern::compile("");
        assert!(!pattern.matches(""));
        assert!(!pattern.matches("/"));
        assert!(!pattern.matches("/anything"));
    }

    #[test]
    fn test_literal_prefix_semantics() {
        let pattern = PathPattern::compile("/private");
        assert!(pattern.matches("/private"));
        assert!(pattern.matches("/private/more"));
        assert!(pattern.matches("/privateer"));
        assert!(!pattern.matches("/priv"));
        assert!(!pattern.matches("/public/private"));
    }

    #[test]
    fn test_root_matches_everything() {
        let pattern = PathPattern::compile("/");
        assert!(pattern.matches("/"));
        assert!(pattern.matches("/any/path/at/all"));
    }

    #[test]
    fn test_case_sensitive() {
        let pattern = PathPattern::compile("/Private");
        assert!(pattern.matches("/Private/x"));
        assert!(!pattern.matches("/private/x"));
    }

    #[test]
    fn test_wildcard_in_middle() {
        let pattern = PathPattern::compile("/folder/*/page");
        assert!(pattern.matches("/folder/a/page"));
        assert!(pattern.matches("/folder//page"));
        assert!(pattern.matches("/folder/a/b/page"));
        assert!(!pattern.matches("/folder/a/pag"));
    }

    #[test]
    fn test_leading_wildcard() {
        let pattern = PathPattern::compile("*/comments/");
        assert!(pattern.matches("/posts/comments/"));
        assert!(pattern.matches("/a/b/comments/x"));
        assert!(!pattern.matches("/posts/comment"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let pattern = PathPattern::compile("/files/*");
        assert!(pattern.matches("/files/"));
        assert!(pattern.matches("/files/a.txt"));
        assert!(!pattern.matches("/file"));
    }

    #[test]
    fn test_end_anchor() {
        let pattern = PathPattern::compile("/exact$");
        assert!(pattern.matches("/exact"));
        assert!(!pattern.matches("/exact/"));
        assert!(!pattern.matches("/exactly"));
    }

    #[test]
    fn test_wildcard_with_end_anchor() {
        let pattern = PathPattern::compile("/folder/*.gif$");
        assert!(pattern.matches("/folder/cat.gif"));
        assert!(pattern.matches("/folder/deep/dog.gif"));
        assert!(!pattern.matches("/folder/cat.gif2"));
        assert!(!pattern.matches("/folder/cat.png"));
    }

    #[test]
    fn test_multiple_wildcards() {
        let pattern = PathPattern::compile("/*/comments/*/");
        assert!(pattern.matches("/posts/comments/42/"));
        assert!(pattern.matches("/a/comments/b/c/"));
        assert!(!pattern.matches("/posts/comments/42"));
    }

    #[test]
    fn test_consecutive_wildcards() {
        let pattern = PathPattern::compile("/a**b");
        assert!(pattern.matches("/ab"));
        assert!(pattern.matches("/a-anything-b"));
        assert!(!pattern.matches("/a"));
    }

    #[test]
    fn test_bare_wildcard() {
        let pattern = PathPattern::compile("*");
        assert!(pattern.matches("/"));
        assert!(pattern.matches("/anything"));
        assert!(pattern.matches(""));
    }

    #[test]
    fn test_anchor_segment_cannot_reuse_consumed_input() {
        // The end-anchored segment must start after the prefix ends
        let pattern = PathPattern::compile("/abc*bc$");
        assert!(!pattern.matches("/abc"));
        assert!(pattern.matches("/abcbc"));
        assert!(pattern.matches("/abc-x-bc"));
    }

    #[test]
    fn test_dollar_only_at_end_is_special() {
        // A `$` in the middle of a pattern is a literal character
        let pattern = PathPattern::compile("/a$b");
        assert!(pattern.matches("/a$b"));
        assert!(!pattern.matches("/ab"));
    }

    #[test]
    fn test_extension_without_anchor() {
        let pattern = PathPattern::compile("/*.embed");
        assert!(pattern.matches("/video.embed"));
        assert!(pattern.matches("/video.embed/extra"));
        assert!(!pattern.matches("/video.mp4"));
    }
}
