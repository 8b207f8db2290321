//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::identity::domain::UserId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

/// Error carrier inside an update transaction, so diesel errors convert
/// with `?` while repository errors pass through unchanged.
#[derive(Debug)]
enum TxError {
    Diesel(DieselError),
    Repository(TaskRepositoryError),
}

impl From<DieselError> for TxError {
    fn from(err: DieselError) -> Self {
        Self::Diesel(err)
    }
}

impl From<TxError> for TaskRepositoryError {
    fn from(err: TxError) -> Self {
        match err {
            TxError::Diesel(diesel_err) => Self::persistence(diesel_err),
            TxError::Repository(repo_err) => repo_err,
        }
    }
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let owner_uuid = owner.into_inner();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner_uuid))
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update_for_owner(
        &self,
        owner: UserId,
        id: TaskId,
        patch: &TaskPatch,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let owner_uuid = owner.into_inner();
        let task_uuid = id.into_inner();
        let applied_patch = patch.clone();

        self.run_blocking(move |connection| {
            connection
                .transaction::<Option<Task>, TxError, _>(|conn| {
                    let row = tasks::table
                        .filter(tasks::id.eq(task_uuid).and(tasks::owner_id.eq(owner_uuid)))
                        .select(TaskRow::as_select())
                        .for_update()
                        .first::<TaskRow>(conn)
                        .optional()?;

                    let Some(existing_row) = row else {
                        return Ok(None);
                    };

                    let mut task = row_to_task(existing_row).map_err(TxError::Repository)?;
                    task.apply_patch(&applied_patch, now);

                    diesel::update(
                        tasks::table
                            .filter(tasks::id.eq(task_uuid).and(tasks::owner_id.eq(owner_uuid))),
                    )
                    .set((
                        tasks::title.eq(task.title().as_str().to_owned()),
                        tasks::description.eq(task.description().map(ToOwned::to_owned)),
                        tasks::status.eq(task.status().as_str().to_owned()),
                        tasks::deadline.eq(task.deadline()),
                        tasks::finished_at.eq(task.finished_at()),
                        tasks::is_finished.eq(task.is_finished()),
                    ))
                    .execute(conn)?;

                    Ok(Some(task))
                })
                .map_err(TaskRepositoryError::from)
        })
        .await
    }

    async fn delete_for_owner(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<bool> {
        let owner_uuid = owner.into_inner();
        let task_uuid = id.into_inner();
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table.filter(tasks::id.eq(task_uuid).and(tasks::owner_id.eq(owner_uuid))),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        finished_at: task.finished_at(),
        is_finished: task.is_finished(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title: persisted_title,
        description,
        status: persisted_status,
        deadline,
        finished_at,
        is_finished,
        created_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    debug_assert!(
        is_finished == status.is_done(),
        "persisted is_finished flag should mirror the done status"
    );

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: UserId::from_uuid(owner_id),
        title,
        description,
        status,
        deadline,
        finished_at,
        created_at,
    };
    Ok(Task::from_persisted(data))
}
