//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod highlight;
mod measure;
mod place;
mod tokens;

pub use highlight::Highlight;
pub use measure::Measure;
pub use place::Place;
pub use tokens::Tokens;
