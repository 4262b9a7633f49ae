use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goods::Good;

/// Flattened snapshot of one good at the moment of mutation. Write-once;
/// duplicates are tolerated by the append-only sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub good_id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub removed: bool,
}

impl From<&Good> for ChangeEvent {
    fn from(good: &Good) -> Self {
        Self {
            good_id: good.id,
            project_id: good.project_id,
            name: good.name.clone(),
            description: good.description.clone(),
            priority: good.priority,
            removed: good.removed,
        }
    }
}

/// Database model for audit log rows; `seq` and `recorded_at` are
/// store-assigned.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::audit_log)]
pub struct ChangeEventDB {
    pub good_id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub removed: bool,
}

impl From<&ChangeEvent> for ChangeEventDB {
    fn from(event: &ChangeEvent) -> Self {
        Self {
            good_id: event.good_id,
            project_id: event.project_id,
            name: event.name.clone(),
            description: event.description.clone(),
            priority: event.priority,
            removed: event.removed,
        }
    }
}
