//! Structured robots.txt document model
//!
//! Immutable value types produced by a parse: directives, user-agent
//! groups, and the document itself, plus the builder that accumulates
//! parser events into a finished document.

mod directive;
mod group;
mod robots;

pub use directive::{Directive, PathRule};
pub use group::Group;
pub use robots::{Robots, RobotsBuilder};
