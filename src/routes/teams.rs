use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use crate::auth::RequireUser;
use crate::db::{StoreError, TeamStore};
use crate::error::ApiError;
use crate::models::{MessageResponse, Team, TeamPayload};

const NOT_FOUND: &str = "Could not find team with that ID.";
const ALREADY_EXISTS: &str = "Team ID already exists.";
const CANNOT_UPDATE: &str = "Team ID doesn't exist, cannot update.";
const CANNOT_DELETE: &str = "Team ID doesn't exist, cannot delete.";

fn parse_body(body: Result<Json<TeamPayload>, JsonRejection>) -> Result<TeamPayload, ApiError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// GET /team/{id} - Get team by ID
pub async fn get_team(
    State(store): State<TeamStore>,
    Path(team_id): Path<i64>,
) -> Result<Json<Team>, ApiError> {
    let team = store
        .get_team(team_id)
        .await
        .map_err(|e| ApiError::from_store(e, NOT_FOUND))?;

    Ok(Json(team))
}

// PUT /team/{id} - Create a team under a caller-chosen ID
pub async fn create_team(
    RequireUser(username): RequireUser,
    State(store): State<TeamStore>,
    Path(team_id): Path<i64>,
    body: Result<Json<TeamPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let team = parse_body(body)?
        .into_new_team()
        .map_err(|missing| ApiError::BadRequest(missing.message()))?
        .with_id(team_id);

    store
        .insert_team(&team)
        .await
        .map_err(|e| match e {
            StoreError::Conflict => ApiError::Conflict(ALREADY_EXISTS),
            e => ApiError::from_store(e, NOT_FOUND),
        })?;

    tracing::info!(team_id, %username, "team created");
    Ok((StatusCode::CREATED, Json(team)))
}

// PATCH /team/{id} - Overwrite the supplied fields of an existing team
pub async fn update_team(
    RequireUser(username): RequireUser,
    State(store): State<TeamStore>,
    Path(team_id): Path<i64>,
    body: Result<Json<TeamPayload>, JsonRejection>,
) -> Result<Json<Team>, ApiError> {
    let changes = parse_body(body)?.into_changes();

    let team = store
        .update_team(team_id, &changes)
        .await
        .map_err(|e| ApiError::from_store(e, CANNOT_UPDATE))?;

    tracing::info!(team_id, %username, "team updated");
    Ok(Json(team))
}

// DELETE /team/{id}
pub async fn delete_team(
    RequireUser(username): RequireUser,
    State(store): State<TeamStore>,
    Path(team_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    store
        .delete_team(team_id)
        .await
        .map_err(|e| ApiError::from_store(e, CANNOT_DELETE))?;

    tracing::info!(team_id, %username, "team deleted");
    Ok(Json(MessageResponse {
        message: "Team deleted".to_string(),
    }))
}
