use goals_core::goals as core_goals;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub goal_name: String,
}

impl From<core_goals::Goal> for Goal {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: g.id,
            goal_name: g.goal_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_name: String,
}

impl From<NewGoal> for core_goals::NewGoal {
    fn from(g: NewGoal) -> Self {
        Self {
            goal_name: g.goal_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}
