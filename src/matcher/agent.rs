use std::cmp::Ordering;

/// How a declared user-agent token matched a concrete crawler identity
///
/// Ordering follows specificity: any exact match outranks the wildcard,
/// and longer exact tokens outrank shorter ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMatch {
    /// The `*` token, applicable to every identity
    Wildcard,
    /// Case-insensitive exact match, carrying the token length
    Exact(usize),
}

impl Ord for AgentMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AgentMatch::Wildcard, AgentMatch::Wildcard) => Ordering::Equal,
            (AgentMatch::Wildcard, AgentMatch::Exact(_)) => Ordering::Less,
            (AgentMatch::Exact(_), AgentMatch::Wildcard) => Ordering::Greater,
            (AgentMatch::Exact(a), AgentMatch::Exact(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for AgentMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scores a declared user-agent token against a crawler identity
///
/// # Arguments
///
/// * `token` - The token as declared on a `user-agent:` line
/// * `identity` - The concrete crawler identity (a single product token,
///   already extracted from the full client descriptor by the caller)
///
/// # Returns
///
/// * `Some(AgentMatch)` - The token applies to this identity
/// * `None` - The token does not apply
pub fn match_agent(token: &str, identity: &str) -> Option<AgentMatch> {
    if token == "*" {
        Some(AgentMatch::Wildcard)
    } else if token.eq_ignore_ascii_case(identity) {
        Some(AgentMatch::Exact(token.len()))
    } else {
        None
    }
}
