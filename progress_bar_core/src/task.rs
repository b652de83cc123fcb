//! Host dispatch contract

/// A unit of work a host framework can dispatch without arguments
pub trait Task {
    /// Run the task
    fn execute(&mut self);
}
