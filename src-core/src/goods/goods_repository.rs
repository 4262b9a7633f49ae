use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::listings::{ListingMeta, ListingPage};
use crate::schema::goods::dsl;

use super::goods_errors::{GoodError, Result};
use super::goods_model::{Good, GoodDB, GoodUpdate, NewGood, ReprioritizeRequest};
use super::goods_traits::GoodsRepositoryTrait;

/// Repository owning all SQL access to the goods table
pub struct GoodsRepository {
    pool: Arc<DbPool>,
}

impl GoodsRepository {
    /// Creates a new GoodsRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl GoodsRepositoryTrait for GoodsRepository {
    /// Inserts a good with the next free priority for its project.
    ///
    /// The maximum is computed inside the insert statement itself, so two
    /// concurrent creates can never observe the same ceiling.
    fn create(&self, new_good: NewGood) -> Result<Good> {
        new_good.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| GoodError::DatabaseError(e.to_string()))?;

        let row: GoodDB = diesel::sql_query(
            "INSERT INTO goods (project_id, name, description, priority) \
             SELECT ?1, ?2, '', COALESCE(MAX(priority), 0) + 1 \
             FROM goods WHERE project_id = ?1 \
             RETURNING id, project_id, name, description, priority, removed, created_at",
        )
        .bind::<Integer, _>(new_good.project_id)
        .bind::<Text, _>(&new_good.name)
        .get_result(&mut conn)?;

        debug!("created good {} with priority {}", row.id, row.priority);
        Ok(row.into())
    }

    /// Updates name and description, leaving priority untouched.
    ///
    /// The immediate transaction takes the write lock before the existence
    /// read, serializing concurrent updates to the same good.
    fn update(&self, update: GoodUpdate) -> Result<Good> {
        update.validate()?;

        self.pool.execute_write(|conn| {
            let existing: GoodDB = dsl::goods
                .filter(dsl::id.eq(update.id))
                .filter(dsl::project_id.eq(update.project_id))
                .first::<GoodDB>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => GoodError::NotFound(format!(
                        "Good {} in project {} not found",
                        update.id, update.project_id
                    )),
                    other => GoodError::from(other),
                })?;

            let description = update
                .description
                .clone()
                .unwrap_or(existing.description);

            let row: GoodDB = diesel::update(
                dsl::goods
                    .filter(dsl::id.eq(update.id))
                    .filter(dsl::project_id.eq(update.project_id)),
            )
            .set((dsl::name.eq(&update.name), dsl::description.eq(&description)))
            .returning(GoodDB::as_returning())
            .get_result(conn)?;

            Ok(row.into())
        })
    }

    /// Soft delete: flips the removed flag, preserving the row and its id.
    fn remove(&self, id: i32, project_id: i32) -> Result<Good> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoodError::DatabaseError(e.to_string()))?;

        let row: GoodDB = diesel::update(
            dsl::goods
                .filter(dsl::id.eq(id))
                .filter(dsl::project_id.eq(project_id)),
        )
        .set(dsl::removed.eq(true))
        .returning(GoodDB::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => GoodError::NotFound(format!(
                "Good {} in project {} not found",
                id, project_id
            )),
            other => GoodError::from(other),
        })?;

        Ok(row.into())
    }

    /// Loads one page ordered by priority descending plus its aggregates.
    fn list(&self, offset: i64, limit: i64) -> Result<ListingPage> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoodError::DatabaseError(e.to_string()))?;

        let total: i64 = dsl::goods.count().get_result(&mut conn)?;

        let rows: Vec<GoodDB> = dsl::goods
            .order(dsl::priority.desc())
            .limit(limit)
            .offset(offset)
            .load(&mut conn)?;

        let removed = rows.iter().filter(|g| g.removed).count() as i64;

        Ok(ListingPage {
            meta: ListingMeta {
                total,
                removed,
                limit,
                offset,
            },
            goods: rows.into_iter().map(Good::from).collect(),
        })
    }

    /// Moves a good to `new_priority`, swapping with the current holder of
    /// that slot when one exists.
    ///
    /// The checks and the swap run inside one immediate transaction, and the
    /// swap itself is a single statement, so no committed or visible state
    /// ever has two goods sharing a priority.
    fn reprioritize(&self, request: ReprioritizeRequest) -> Result<Vec<Good>> {
        request.validate()?;

        self.pool.execute_write(|conn| {
            let max_priority: Option<i32> = dsl::goods
                .filter(dsl::project_id.eq(request.project_id))
                .select(diesel::dsl::max(dsl::priority))
                .first(conn)?;

            let max_priority = max_priority.ok_or_else(|| {
                GoodError::NotFound(format!("Project {} has no goods", request.project_id))
            })?;

            if request.new_priority > max_priority {
                return Err(GoodError::MaxPriorityExceeded {
                    requested: request.new_priority,
                    max: max_priority,
                });
            }

            let current_priority: i32 = dsl::goods
                .filter(dsl::id.eq(request.id))
                .filter(dsl::project_id.eq(request.project_id))
                .select(dsl::priority)
                .first(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => GoodError::NotFound(format!(
                        "Good {} in project {} not found",
                        request.id, request.project_id
                    )),
                    other => GoodError::from(other),
                })?;

            if current_priority == request.new_priority {
                return Err(GoodError::PriorityUnchanged(current_priority));
            }

            // The target takes the new slot; the previous holder of that
            // slot, when present, takes the target's old one.
            let rows: Vec<GoodDB> = diesel::sql_query(
                "UPDATE goods SET priority = CASE \
                     WHEN id = ?1 THEN ?3 \
                     ELSE ?4 \
                 END \
                 WHERE project_id = ?2 AND (id = ?1 OR priority = ?3) \
                 RETURNING id, project_id, name, description, priority, removed, created_at",
            )
            .bind::<Integer, _>(request.id)
            .bind::<Integer, _>(request.project_id)
            .bind::<Integer, _>(request.new_priority)
            .bind::<Integer, _>(current_priority)
            .load(conn)?;

            if rows.is_empty() {
                return Err(GoodError::NotFound(format!(
                    "Good {} in project {} not found",
                    request.id, request.project_id
                )));
            }

            Ok(rows.into_iter().map(Good::from).collect())
        })
    }
}
