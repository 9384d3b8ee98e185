use crate::parser::encoding;
use crate::parser::handler::ParseHandler;
use crate::{ParseError, ParseResult};

/// Tracks where the parser is relative to user-agent blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    /// No block open; rules seen here belong to no group
    Outside,
    /// A block is open and has only seen `user-agent:` lines so far
    Agents,
    /// A block is open and has seen at least one rule line
    Rules,
}

/// Line-oriented robots.txt parser
///
/// Consumes already-resident input in a single synchronous pass and pushes
/// events to a [`ParseHandler`]. Per-line problems are never fatal: a line
/// with no `:` separator is skipped silently. The parse as a whole fails
/// only on a rejected encoding (byte entry point) or when non-empty input
/// contains no directive-shaped line at all, which is how markup served in
/// place of a robots.txt is caught.
///
/// # Examples
///
/// ```
/// use torii_robots::domain::RobotsBuilder;
/// use torii_robots::parser::RobotsParser;
///
/// let parser = RobotsParser::new("user-agent: *\ndisallow: /private\n");
/// let mut builder = RobotsBuilder::new();
/// parser.parse(&mut builder).unwrap();
/// assert_eq!(builder.build().groups().len(), 1);
/// ```
#[derive(Debug)]
pub struct RobotsParser {
    input: String,
}

impl RobotsParser {
    /// Creates a parser over already-decoded text
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Creates a parser over raw bytes, running the encoding gate first
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsParser)` - The bytes decoded as an accepted encoding
    /// * `Err(ParseError::RejectedEncoding)` - The bytes look like UTF-16
    ///   or UTF-32
    pub fn from_bytes(bytes: &[u8]) -> ParseResult<Self> {
        Ok(Self {
            input: encoding::decode(bytes)?,
        })
    }

    /// Runs the parse, pushing events to `handler`
    ///
    /// A line is terminated by `\n`; a missing terminator at end-of-input is
    /// treated as if present. Each line is stripped of its comment (first
    /// `#` to end of line), trimmed, and split on the first `:` into field
    /// and value; the field is lower-cased for dispatch only and the value
    /// is trimmed independently.
    pub fn parse(&self, handler: &mut dyn ParseHandler) -> ParseResult<()> {
        let mut state = EntryState::Outside;
        let mut saw_content = false;
        let mut saw_directive = false;

        for raw_line in self.input.split('\n') {
            let line = match raw_line.find('#') {
                Some(idx) => &raw_line[..idx],
                None => raw_line,
            };
            let line = line.trim();
            if line.is_empty() {
                // Blank lines neither end nor start a block
                continue;
            }
            saw_content = true;

            let Some((field, value)) = line.split_once(':') else {
                continue;
            };
            saw_directive = true;
            let field = field.trim();
            let value = value.trim();

            match field.to_ascii_lowercase().as_str() {
                "user-agent" => {
                    match state {
                        EntryState::Outside => handler.start_entry(),
                        EntryState::Agents => {}
                        EntryState::Rules => {
                            // An agent line after rules starts a new block
                            handler.end_entry();
                            handler.start_entry();
                        }
                    }
                    handler.user_agent(value);
                    state = EntryState::Agents;
                }
                "allow" => {
                    if state != EntryState::Outside {
                        handler.allow(value);
                        state = EntryState::Rules;
                    }
                }
                "disallow" => {
                    if state != EntryState::Outside {
                        handler.disallow(value);
                        state = EntryState::Rules;
                    }
                }
                _ => {
                    if state != EntryState::Outside {
                        handler.other_directive(field, value);
                        state = EntryState::Rules;
                    }
                }
            }
        }

        if state != EntryState::Outside {
            handler.end_entry();
        }

        if saw_content && !saw_directive {
            return Err(ParseError::NotRobots);
        }
        Ok(())
    }
}
