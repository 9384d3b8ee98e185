//! Tolerant line-oriented robots.txt parser
//!
//! The parser turns raw, possibly malformed text into a stream of events
//! delivered to a [`ParseHandler`]. It never accumulates anything itself;
//! storage is the handler's concern (see [`crate::domain::RobotsBuilder`]).
//! Byte input passes through an encoding gate that rejects UTF-16 and
//! UTF-32 before any event is emitted.

mod encoding;
mod handler;
mod machine;

pub use encoding::decode;
pub use handler::ParseHandler;
pub use machine::RobotsParser;
