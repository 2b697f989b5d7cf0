use sqlx::{Executor, Sqlite, SqlitePool};

use crate::dto::athlete::CreateAthleteRequest;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "id, name, identifier_code, training_center, category";

const LIST_ATHLETES: &str = "SELECT id, name, identifier_code, training_center, category \
                             FROM athletes ORDER BY id ASC LIMIT ? OFFSET ?";

const COUNT_ATHLETES: &str = "SELECT COUNT(*) FROM athletes";

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a window of athletes in insertion order
    pub async fn list(&self, offset: u32, limit: u32) -> Result<Vec<Athlete>> {
        fetch_window(self.pool, offset, limit).await
    }

    /// Count all registered athletes
    pub async fn count(&self) -> Result<i64> {
        fetch_count(self.pool).await
    }

    /// A window of athletes plus the total count, read from one snapshot
    pub async fn page(&self, offset: u32, limit: u32) -> Result<(Vec<Athlete>, i64)> {
        let mut tx = self.pool.begin().await?;

        let total_items = fetch_count(&mut *tx).await?;
        let athletes = fetch_window(&mut *tx, offset, limit).await?;

        tx.commit().await?;

        Ok((athletes, total_items))
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Find athlete by national identifier code
    pub async fn find_by_identifier_code(&self, identifier_code: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE identifier_code = ?"
        ))
        .bind(identifier_code)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Create a new athlete.
    ///
    /// Returns [`StorageError::DuplicateKey`] when the identifier code is
    /// already registered. The insert is a single auto-committed statement,
    /// so the unique index either accepts the whole row or nothing.
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "INSERT INTO athletes (name, identifier_code, training_center, category) \
             VALUES (?, ?, ?, ?) \
             RETURNING {ATHLETE_COLUMNS}"
        ))
        .bind(&req.name)
        .bind(&req.identifier_code)
        .bind(&req.training_center)
        .bind(&req.category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::DuplicateKey(req.identifier_code.clone())
            } else {
                error
            }
        })?;

        Ok(athlete)
    }
}

async fn fetch_window<'e, E>(executor: E, offset: u32, limit: u32) -> Result<Vec<Athlete>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let athletes = sqlx::query_as::<_, Athlete>(LIST_ATHLETES)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(executor)
        .await?;

    Ok(athletes)
}

async fn fetch_count<'e, E>(executor: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>(COUNT_ATHLETES)
        .fetch_one(executor)
        .await?;

    Ok(count)
}
