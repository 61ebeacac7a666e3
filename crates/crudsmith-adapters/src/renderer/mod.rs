//! Template renderer adapters.

mod stub;

pub use stub::StubRenderer;
