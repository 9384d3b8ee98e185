/// Event sink driven by the parser
///
/// The parser calls these methods synchronously and in document order on
/// the thread running the parse. One entry corresponds to one user-agent
/// block: `start_entry`, one or more `user_agent` calls, any number of
/// rule calls, then `end_entry`. Input that never declares a user-agent
/// produces no calls at all.
pub trait ParseHandler {
    /// A new user-agent block begins
    fn start_entry(&mut self);

    /// A `user-agent:` line inside the current block
    fn user_agent(&mut self, token: &str);

    /// An `allow:` line; the value may be empty
    fn allow(&mut self, path: &str);

    /// A `disallow:` line; the value may be empty
    fn disallow(&mut self, path: &str);

    /// Any other `field: value` line, field in its original case
    fn other_directive(&mut self, field: &str, value: &str);

    /// The current user-agent block is complete
    fn end_entry(&mut self);
}
