use crate::domain::{Group, Robots};
use crate::engine::selector::best_matching_group;

/// Resolves a candidate path against one group's directives
///
/// Path directives are scanned in document order and the first match wins;
/// source order, not pattern specificity, decides precedence. A group with
/// no matching path directive allows the path.
///
/// # Arguments
///
/// * `group` - The group selected for the crawler identity
/// * `path` - The candidate URL path (percent-decoding/normalization is
///   the caller's responsibility)
pub fn path_allowed(group: &Group, path: &str) -> bool {
    for (rule, value, pattern) in group.path_directives() {
        if pattern.matches(path) {
            tracing::debug!(
                "path directive {} matches; {}: {}",
                value,
                if rule.is_allowed() {
                    "allowing"
                } else {
                    "disallowing"
                },
                path
            );
            return rule.is_allowed();
        }
    }
    tracing::debug!("no matching path directive; allowing: {}", path);
    true
}

/// Evaluates the full allow/disallow policy for a parsed document
///
/// Fail-open at every step: a document with no groups, an identity no
/// group matches, and a path no directive matches all resolve to
/// "allowed". This is the safety-critical contract of the whole engine;
/// the protocol has no enforcement mechanism and ambiguity must never
/// turn into a false denial.
///
/// # Arguments
///
/// * `robots` - The parsed document
/// * `identity` - The crawler identity token
/// * `path` - The candidate URL path
pub fn evaluate(robots: &Robots, identity: &str, path: &str) -> bool {
    if robots.is_empty() {
        tracing::debug!("document contains no agent groups; allowing: {}", path);
        return true;
    }

    match best_matching_group(robots.groups(), identity) {
        Some(group) => path_allowed(group, path),
        None => {
            tracing::debug!("no matching group for {}; allowing: {}", identity, path);
            true
        }
    }
}
