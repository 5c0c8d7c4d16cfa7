//! Turn record for the taking-turns queue

use serde::{Deserialize, Serialize};

/// A named entrant with a remaining-turns budget.
///
/// A `turns` value of 0 or less means the person never runs out of turns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub turns: i32,
}

impl Person {
    /// Create a new person
    pub fn new(name: impl Into<String>, turns: i32) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }

    /// Check if this person stays in the rotation forever
    pub fn has_infinite_turns(&self) -> bool {
        self.turns <= 0
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_infinite_turns() {
            write!(f, "({}:Forever)", self.name)
        } else {
            write!(f, "({}:{})", self.name, self.turns)
        }
    }
}
