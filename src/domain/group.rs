use crate::domain::directive::{Directive, PathRule};
use crate::matcher::PathPattern;

/// One user-agent block of a robots.txt document
///
/// Holds the agent tokens declared on the block and its directives in
/// document order. Directive order matters: the decision engine returns
/// the verdict of the first matching path directive, not the most
/// specific one. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    user_agents: Vec<String>,
    directives: Vec<Directive>,
}

impl Group {
    pub(crate) fn new(user_agents: Vec<String>, directives: Vec<Directive>) -> Self {
        Self {
            user_agents,
            directives,
        }
    }

    /// The user-agent tokens this group applies to, in document order
    pub fn user_agents(&self) -> &[String] {
        &self.user_agents
    }

    /// All directives of this group, in document order
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The group's path directives, in document order
    pub fn path_directives(&self) -> impl Iterator<Item = (PathRule, &str, &PathPattern)> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Path {
                rule,
                value,
                pattern,
            } => Some((*rule, value.as_str(), pattern)),
            Directive::Other { .. } => None,
        })
    }

    /// Values of uninterpreted directives with the given field name,
    /// compared case-insensitively, in document order
    pub fn other_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.directives.iter().filter_map(move |d| match d {
            Directive::Other { field: f, value } if f.eq_ignore_ascii_case(field) => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    /// The group's crawl-delay in seconds, if one is declared and numeric
    pub fn crawl_delay(&self) -> Option<f64> {
        self.other_values("crawl-delay")
            .find_map(|v| v.parse::<f64>().ok())
    }
}
