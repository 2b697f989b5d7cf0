use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_athlete, get_athlete, list_athletes};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/athletes", get(list_athletes).post(create_athlete))
        .route("/athletes/", get(list_athletes).post(create_athlete))
        .route("/athletes/:id", get(get_athlete))
}
