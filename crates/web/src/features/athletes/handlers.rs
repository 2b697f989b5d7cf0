use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        athlete::{AthleteResponse, CreateAthleteRequest},
        common::{PaginatedResponse, PaginationParams},
    },
};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/athletes/",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of athletes", body = PaginatedResponse<AthleteResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> WebResult<Response> {
    let Query(params) = query?;
    params.validate().map_err(WebError::BadRequest)?;

    let (athletes, total_items) = services::list_athletes(db.pool(), params).await?;

    let data: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(PaginatedResponse::new(data, params, total_items)).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let Path(id) = path?;
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/athletes/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete registered", body = AthleteResponse),
        (status = 400, description = "Malformed or invalid payload"),
        (status = 409, description = "An athlete with this cpf already exists")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    payload: Result<Json<CreateAthleteRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}
