//! Matching primitives for robots.txt evaluation
//!
//! This module provides the two matchers the decision engine is built on:
//! path patterns (with `*` wildcards and `$` end anchors) and user-agent
//! token matching with specificity ranking.

mod agent;
mod path;

pub use agent::{match_agent, AgentMatch};
pub use path::PathPattern;
