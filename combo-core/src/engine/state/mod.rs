//! Per-engine mutable state

mod buffer;
mod session;

pub use buffer::InputBuffer;
pub use session::{PendingCandidate, SessionState};
