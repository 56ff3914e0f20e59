//! Domain models for the wellness assistant.

mod chat;
mod condition;
mod metric;
mod score;

pub use chat::*;
pub use condition::*;
pub use metric::*;
pub use score::*;
