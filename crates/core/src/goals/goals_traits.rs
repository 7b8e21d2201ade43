use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalId, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Returns the number of rows removed.
    async fn delete_goal(&self, goal_id_to_delete: GoalId) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: GoalId) -> Result<()>;
}
