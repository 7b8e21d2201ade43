use crate::constants::MAX_GOAL_NAME_LENGTH;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalId, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

/// Trims the name and rejects empty or oversized values.
fn validate_new_goal(new_goal: NewGoal) -> Result<NewGoal> {
    let goal_name = new_goal.goal_name.trim();
    if goal_name.is_empty() {
        return Err(ValidationError::MissingField("goalName".to_string()).into());
    }
    if goal_name.chars().count() > MAX_GOAL_NAME_LENGTH {
        return Err(ValidationError::InvalidInput(format!(
            "goalName must be at most {} characters",
            MAX_GOAL_NAME_LENGTH
        ))
        .into());
    }
    Ok(NewGoal::new(goal_name))
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let new_goal = validate_new_goal(new_goal)?;
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        info!("Created goal {}", goal.id);
        Ok(goal)
    }

    async fn delete_goal(&self, goal_id_to_delete: GoalId) -> Result<()> {
        let deleted = self.goal_repo.delete_goal(goal_id_to_delete).await?;
        if deleted == 0 {
            debug!("Delete requested for unknown goal {}", goal_id_to_delete);
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Goal {} not found",
                goal_id_to_delete
            ))));
        }
        info!("Deleted goal {}", goal_id_to_delete);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    struct MockGoalRepository {
        goals: RwLock<Vec<Goal>>,
    }

    impl MockGoalRepository {
        fn new() -> Self {
            Self {
                goals: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.read().unwrap().clone())
        }

        async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            let next_id = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
            let goal = Goal {
                id: next_id,
                goal_name: new_goal.goal_name,
            };
            goals.push(goal.clone());
            Ok(goal)
        }

        async fn delete_goal(&self, goal_id_to_delete: GoalId) -> Result<usize> {
            let mut goals = self.goals.write().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id_to_delete);
            Ok(before - goals.len())
        }
    }

    fn service() -> GoalService<MockGoalRepository> {
        GoalService::new(Arc::new(MockGoalRepository::new()))
    }

    #[tokio::test]
    async fn test_create_goal_trims_name() {
        let service = service();
        let goal = service
            .create_goal(NewGoal::new("  Learn Rust  "))
            .await
            .unwrap();

        assert_eq!(goal.goal_name, "Learn Rust");
        assert_eq!(service.get_goals().unwrap(), vec![goal]);
    }

    #[tokio::test]
    async fn test_create_goal_rejects_blank_name() {
        let service = service();
        let err = service.create_goal(NewGoal::new("   ")).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
        assert!(service.get_goals().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_goal_rejects_oversized_name() {
        let service = service();
        let name = "x".repeat(MAX_GOAL_NAME_LENGTH + 1);
        let err = service.create_goal(NewGoal::new(name)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_create_goal_accepts_name_at_limit() {
        let service = service();
        let name = "é".repeat(MAX_GOAL_NAME_LENGTH);
        let goal = service.create_goal(NewGoal::new(name.clone())).await.unwrap();
        assert_eq!(goal.goal_name, name);
    }

    #[tokio::test]
    async fn test_delete_goal_removes_it() {
        let service = service();
        let first = service.create_goal(NewGoal::new("first")).await.unwrap();
        let second = service.create_goal(NewGoal::new("second")).await.unwrap();

        service.delete_goal(first.id).await.unwrap();

        assert_eq!(service.get_goals().unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_delete_unknown_goal_is_not_found() {
        let service = service();
        let err = service.delete_goal(42).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
