use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::schema::audit_log;

use super::audit_errors::{AuditError, Result};
use super::audit_model::{ChangeEvent, ChangeEventDB};
use super::audit_traits::AuditSinkTrait;

/// Repository writing change events into the append-only audit_log table
pub struct AuditLogRepository {
    pool: Arc<DbPool>,
}

impl AuditLogRepository {
    /// Creates a new AuditLogRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AuditSinkTrait for AuditLogRepository {
    fn append(&self, event: &ChangeEvent) -> Result<()> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AuditError::Sink(e.to_string()))?;

        diesel::insert_into(audit_log::table)
            .values(ChangeEventDB::from(event))
            .execute(&mut conn)?;

        debug!("audit event appended for good {}", event.good_id);
        Ok(())
    }
}
