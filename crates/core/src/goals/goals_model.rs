//! Goals domain models.

use serde::{Deserialize, Serialize};

/// Store-assigned goal identifier.
pub type GoalId = i32;

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub goal_name: String,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_name: String,
}

impl NewGoal {
    pub fn new(goal_name: impl Into<String>) -> Self {
        Self {
            goal_name: goal_name.into(),
        }
    }
}
