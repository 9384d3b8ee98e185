use crate::domain::directive::{Directive, PathRule};
use crate::domain::group::Group;
use crate::parser::{ParseHandler, RobotsParser};
use crate::ParseResult;

/// A parsed robots.txt document: an ordered sequence of user-agent groups
///
/// Produced once per parse, owned by the caller, and immutable from then
/// on; safe for unrestricted concurrent reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Robots {
    groups: Vec<Group>,
}

impl Robots {
    /// Parses already-decoded text into a document
    ///
    /// # Returns
    ///
    /// * `Ok(Robots)` - The structured document (possibly with no groups)
    /// * `Err(ParseError)` - The input is not recognizable as robots.txt
    pub fn parse(text: &str) -> ParseResult<Robots> {
        let mut builder = RobotsBuilder::new();
        RobotsParser::new(text).parse(&mut builder)?;
        Ok(builder.build())
    }

    /// Parses raw bytes, rejecting UTF-16/UTF-32 input first
    pub fn from_bytes(bytes: &[u8]) -> ParseResult<Robots> {
        let mut builder = RobotsBuilder::new();
        RobotsParser::from_bytes(bytes)?.parse(&mut builder)?;
        Ok(builder.build())
    }

    /// The document's groups, in document order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// True when the document declares no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Accumulates parser events into a [`Robots`] document
///
/// The entry being built lives in explicit accumulator fields and is
/// finalized into an immutable [`Group`] only on `end_entry`.
///
/// # Examples
///
/// ```
/// use torii_robots::domain::RobotsBuilder;
/// use torii_robots::parser::RobotsParser;
///
/// let mut builder = RobotsBuilder::new();
/// RobotsParser::new("user-agent: *\ndisallow: /tmp\n")
///     .parse(&mut builder)
///     .unwrap();
/// let robots = builder.build();
/// assert_eq!(robots.groups()[0].user_agents(), ["*"]);
/// ```
#[derive(Debug, Default)]
pub struct RobotsBuilder {
    groups: Vec<Group>,
    agents: Vec<String>,
    directives: Vec<Directive>,
}

impl RobotsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalizes the accumulated groups into an immutable document
    pub fn build(mut self) -> Robots {
        // An unterminated entry can only come from a handler driven by
        // hand; the parser always closes what it opens
        if !self.agents.is_empty() || !self.directives.is_empty() {
            self.end_entry();
        }
        Robots {
            groups: self.groups,
        }
    }
}

impl ParseHandler for RobotsBuilder {
    fn start_entry(&mut self) {
        self.agents.clear();
        self.directives.clear();
    }

    fn user_agent(&mut self, token: &str) {
        self.agents.push(token.to_string());
    }

    fn allow(&mut self, path: &str) {
        self.directives.push(Directive::path(PathRule::Allow, path));
    }

    fn disallow(&mut self, path: &str) {
        self.directives
            .push(Directive::path(PathRule::Disallow, path));
    }

    fn other_directive(&mut self, field: &str, value: &str) {
        self.directives.push(Directive::other(field, value));
    }

    fn end_entry(&mut self) {
        self.groups.push(Group::new(
            std::mem::take(&mut self.agents),
            std::mem::take(&mut self.directives),
        ));
    }
}
