use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Athlete;

/// Response containing a registered athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
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

/// Request payload for registering a new athlete.
///
/// Every field is mandatory. The national identifier code (`cpf`) is only
/// checked for presence and length, never for format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(rename = "cpf")]
    #[validate(length(min = 1, max = 255, message = "CPF must be between 1 and 255 characters"))]
    pub identifier_code: String,

    #[serde(rename = "centro_treinamento")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Training center must be between 1 and 255 characters"
    ))]
    pub training_center: String,

    #[serde(rename = "categoria")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Category must be between 1 and 255 characters"
    ))]
    pub category: String,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            identifier_code: athlete.identifier_code,
            training_center: athlete.training_center,
            category: athlete.category,
        }
    }
}
