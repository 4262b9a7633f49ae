use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::goods_errors::{GoodError, Result};

/// Domain model for a catalog good, ordered within its project by priority
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Good {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub removed: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new good
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGood {
    pub project_id: i32,
    pub name: String,
}

impl NewGood {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GoodError::InvalidData(
                "Good name cannot be empty".to_string(),
            ));
        }
        if self.project_id <= 0 {
            return Err(GoodError::InvalidData(
                "Project id must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a good's name and description.
/// A `None` description keeps the stored value; priority is never touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodUpdate {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl GoodUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GoodError::InvalidData(
                "Good name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for moving a good to a new priority slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReprioritizeRequest {
    pub id: i32,
    pub project_id: i32,
    pub new_priority: i32,
}

impl ReprioritizeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.new_priority < 1 {
            return Err(GoodError::InvalidData(
                "Priority must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response shape for a soft delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemovedGood {
    pub id: i32,
    pub project_id: i32,
    pub removed: bool,
}

/// One row whose priority changed during a swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriorityAssignment {
    pub id: i32,
    pub priority: i32,
}

/// Response shape for a reprioritization: the rows that actually moved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReprioritizeResult {
    pub priorities: Vec<PriorityAssignment>,
}

/// Database model for goods
#[derive(
    Queryable,
    QueryableByName,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoodDB {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub removed: bool,
    pub created_at: NaiveDateTime,
}

impl From<GoodDB> for Good {
    fn from(db: GoodDB) -> Self {
        Self {
            id: db.id,
            project_id: db.project_id,
            name: db.name,
            description: db.description,
            priority: db.priority,
            removed: db.removed,
            created_at: db.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_good_rejects_blank_name() {
        let new_good = NewGood {
            project_id: 1,
            name: "   ".to_string(),
        };
        assert!(matches!(
            new_good.validate(),
            Err(GoodError::InvalidData(_))
        ));
    }

    #[test]
    fn new_good_rejects_non_positive_project() {
        let new_good = NewGood {
            project_id: 0,
            name: "lamp".to_string(),
        };
        assert!(matches!(
            new_good.validate(),
            Err(GoodError::InvalidData(_))
        ));
    }

    #[test]
    fn reprioritize_rejects_zero_priority() {
        let request = ReprioritizeRequest {
            id: 1,
            project_id: 1,
            new_priority: 0,
        };
        assert!(matches!(request.validate(), Err(GoodError::InvalidData(_))));
    }
}
