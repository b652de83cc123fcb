//! Mock implementations for testing

mod clock;
mod sink;

pub use clock::ManualClock;
pub use sink::RecordingSink;
