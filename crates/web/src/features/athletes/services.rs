use sqlx::SqlitePool;
use storage::{
    dto::{athlete::CreateAthleteRequest, common::PaginationParams},
    error::{Result, StorageError},
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List one page of athletes along with the total number of athletes
pub async fn list_athletes(
    pool: &SqlitePool,
    params: PaginationParams,
) -> Result<(Vec<Athlete>, i64)> {
    let repo = AthleteRepository::new(pool);
    repo.page(params.skip, params.limit).await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &SqlitePool, id: i64) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await?.ok_or(StorageError::NotFound)
}

/// Register a new athlete
pub async fn create_athlete(pool: &SqlitePool, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);

    match repo.create(request).await {
        Ok(athlete) => {
            tracing::info!(id = athlete.id, "Athlete registered");
            Ok(athlete)
        }
        Err(StorageError::DuplicateKey(code)) => {
            tracing::warn!(cpf = %code, "Rejected duplicate athlete registration");
            Err(StorageError::DuplicateKey(code))
        }
        Err(e) => Err(e),
    }
}
