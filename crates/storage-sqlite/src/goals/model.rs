//! Database models for goals.

use diesel::prelude::*;

/// Database model for goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub goal_name: String,
}

/// Database model for creating a new goal; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub goal_name: String,
}

// Conversion to domain models
impl From<GoalDB> for goals_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            goal_name: db.goal_name,
        }
    }
}

impl From<goals_core::goals::NewGoal> for NewGoalDB {
    fn from(domain: goals_core::goals::NewGoal) -> Self {
        Self {
            goal_name: domain.goal_name,
        }
    }
}
