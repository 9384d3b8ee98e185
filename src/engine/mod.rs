//! Group selection and allow/disallow resolution
//!
//! Turns a parsed document plus (identity, path) into a verdict. Both
//! halves are pure functions over immutable inputs and short-circuit to
//! "allowed" whenever no rule applies.

mod decision;
mod selector;

pub use decision::{evaluate, path_allowed};
pub use selector::best_matching_group;
