use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub identifier_code: String,
    #[serde(rename = "centro_treinamento")]
    pub training_center: String,
    #[serde(rename = "categoria")]
    pub category: String,
}
