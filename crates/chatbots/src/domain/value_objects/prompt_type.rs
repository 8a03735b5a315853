//! PromptType - How instructions are templated into a model prompt
//!
//! The meaning of each value belongs to the prompt-type selector; this
//! crate only carries the number.

use serde::{Deserialize, Serialize};

/// Prompt type code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PromptType(i32);

impl PromptType {
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn code(self) -> i32 {
        self.0
    }
}

impl Default for PromptType {
    fn default() -> Self {
        Self(1)
    }
}

impl From<i32> for PromptType {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for PromptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
