// SQLite implementation of the worker and shift repositories.
//
// Responsibilities
// - Create the schema on connect.
// - Enforce the worker -> shift foreign key with ON DELETE CASCADE.
// - Join shifts with their worker in SQL for listings.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::modules::shifts::core::ports::ShiftRepository;
use crate::modules::shifts::core::shift::{NewShift, Shift};
use crate::modules::workers::core::ports::WorkerRepository;
use crate::modules::workers::core::worker::{NewWorker, Worker};
use crate::shared::core::errors::StoreError;

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS workers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        department TEXT NOT NULL,
        email TEXT NULL,
        phone TEXT NULL
    )",
    "CREATE TABLE IF NOT EXISTS shifts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        worker_id INTEGER NOT NULL REFERENCES workers(id) ON DELETE CASCADE,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS shifts_worker_id ON shifts(worker_id)",
];

const JOINED_SHIFT_COLUMNS: &str = "s.id AS id, s.worker_id AS worker_id, \
     s.start_time AS start_time, s.end_time AS end_time, \
     w.name AS worker_name, w.department AS worker_department, \
     w.email AS worker_email, w.phone AS worker_phone";

#[derive(FromRow)]
struct WorkerRow {
    id: i64,
    name: String,
    department: String,
    email: Option<String>,
    phone: Option<String>,
}

impl From<WorkerRow> for Worker {
    fn from(row: WorkerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            department: row.department,
            email: row.email,
            phone: row.phone,
        }
    }
}

#[derive(FromRow)]
struct ShiftRow {
    id: i64,
    worker_id: i64,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

impl From<ShiftRow> for Shift {
    fn from(row: ShiftRow) -> Self {
        Self {
            id: row.id,
            worker_id: row.worker_id,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

#[derive(FromRow)]
struct JoinedShiftRow {
    id: i64,
    worker_id: i64,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    worker_name: String,
    worker_department: String,
    worker_email: Option<String>,
    worker_phone: Option<String>,
}

impl From<JoinedShiftRow> for (Shift, Worker) {
    fn from(row: JoinedShiftRow) -> Self {
        (
            Shift {
                id: row.id,
                worker_id: row.worker_id,
                start_time: row.start_time,
                end_time: row.end_time,
            },
            Worker {
                id: row.worker_id,
                name: row.worker_name,
                department: row.worker_department,
                email: row.worker_email,
                phone: row.worker_phone,
            },
        )
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn pool_options(url: &str) -> SqlitePoolOptions {
    if is_in_memory(url) {
        // The database lives and dies with its only connection, which must never be recycled.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `url` and applies the schema.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = pool_options(url).connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;
        info!(url, "sqlite store ready");
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl WorkerRepository for SqliteStore {
    async fn insert_worker(&self, worker: NewWorker) -> Result<Worker, StoreError> {
        let id = sqlx::query(
            "INSERT INTO workers (name, department, email, phone) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&worker.name)
        .bind(&worker.department)
        .bind(&worker.email)
        .bind(&worker.phone)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Worker {
            id,
            name: worker.name,
            department: worker.department,
            email: worker.email,
            phone: worker.phone,
        })
    }

    async fn find_worker(&self, id: i64) -> Result<Option<Worker>, StoreError> {
        let row = sqlx::query_as::<_, WorkerRow>(
            "SELECT id, name, department, email, phone FROM workers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Worker::from))
    }

    async fn save_worker(&self, worker: &Worker) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE workers SET name = ?1, department = ?2, email = ?3, phone = ?4 WHERE id = ?5",
        )
        .bind(&worker.name)
        .bind(&worker.department)
        .bind(&worker.email)
        .bind(&worker.phone)
        .bind(worker.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_worker(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM workers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError> {
        let rows = sqlx::query_as::<_, WorkerRow>(
            "SELECT id, name, department, email, phone FROM workers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Worker::from).collect())
    }

    async fn search_workers_by_name(&self, fragment: &str) -> Result<Vec<Worker>, StoreError> {
        let rows = sqlx::query_as::<_, WorkerRow>(
            "SELECT id, name, department, email, phone FROM workers \
             WHERE instr(lower(name), lower(?1)) > 0 ORDER BY id",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Worker::from).collect())
    }
}

#[async_trait]
impl ShiftRepository for SqliteStore {
    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let id = sqlx::query(
            "INSERT INTO shifts (worker_id, start_time, end_time) VALUES (?1, ?2, ?3)",
        )
        .bind(shift.worker_id)
        .bind(shift.start_time)
        .bind(shift.end_time)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Shift {
            id,
            worker_id: shift.worker_id,
            start_time: shift.start_time,
            end_time: shift.end_time,
        })
    }

    async fn find_shift(&self, id: i64) -> Result<Option<Shift>, StoreError> {
        let row = sqlx::query_as::<_, ShiftRow>(
            "SELECT id, worker_id, start_time, end_time FROM shifts WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Shift::from))
    }

    async fn save_shift(&self, shift: &Shift) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE shifts SET worker_id = ?1, start_time = ?2, end_time = ?3 WHERE id = ?4",
        )
        .bind(shift.worker_id)
        .bind(shift.start_time)
        .bind(shift.end_time)
        .bind(shift.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_shift(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_shifts(&self) -> Result<Vec<(Shift, Worker)>, StoreError> {
        let rows = sqlx::query_as::<_, JoinedShiftRow>(&format!(
            "SELECT {JOINED_SHIFT_COLUMNS} FROM shifts s JOIN workers w ON w.id = s.worker_id \
             ORDER BY s.id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_shifts_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<(Shift, Worker)>, StoreError> {
        let rows = sqlx::query_as::<_, JoinedShiftRow>(&format!(
            "SELECT {JOINED_SHIFT_COLUMNS} FROM shifts s JOIN workers w ON w.id = s.worker_id \
             WHERE s.worker_id = ?1 ORDER BY s.id"
        ))
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
