//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod prompt_type;
mod provider;

pub use prompt_type::*;
pub use provider::*;
