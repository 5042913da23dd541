//! Accident book REST API handlers

use crate::{AccidentDto, AccidentRequest, ApiError, ApiResult, AppState, MaybeAuthenticated};

use ab_core::{Accident, AccidentInput};
use ab_db::AccidentRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/accidents
///
/// All records, most recent incident first
pub async fn list_accidents(
    State(state): State<AppState>,
    _auth: MaybeAuthenticated,
) -> ApiResult<Json<Vec<AccidentDto>>> {
    let repo = AccidentRepository::new(state.pool.clone());
    let accidents = repo.find_all().await?;

    Ok(Json(accidents.into_iter().map(AccidentDto::from).collect()))
}

/// GET /api/accidents/{id}
pub async fn get_accident(
    State(state): State<AppState>,
    _auth: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> ApiResult<Json<AccidentDto>> {
    let repo = AccidentRepository::new(state.pool.clone());
    let accident = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(accident.into()))
}

/// POST /api/accidents
///
/// 201 with a Location header pointing at the new record
pub async fn create_accident(
    State(state): State<AppState>,
    auth: MaybeAuthenticated,
    Json(req): Json<AccidentRequest>,
) -> ApiResult<Response> {
    let input = AccidentInput::from(req);
    input.validate()?;

    let repo = AccidentRepository::new(state.pool.clone());
    let mut accident = Accident::from_input(input);
    accident.id = repo.create(&accident).await?;

    info!("Accident {} recorded by {}", accident.id, auth.actor());

    let location = HeaderValue::from_str(&format!("/api/accidents/{}", accident.id))
        .map_err(|e| ApiError::Internal {
            message: format!("Invalid location header: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AccidentDto::from(accident)),
    )
        .into_response())
}

/// PUT /api/accidents/{id}
///
/// Replaces every writable field
pub async fn update_accident(
    State(state): State<AppState>,
    auth: MaybeAuthenticated,
    Path(id): Path<i64>,
    Json(req): Json<AccidentRequest>,
) -> ApiResult<Json<AccidentDto>> {
    let input = AccidentInput::from(req);
    input.validate()?;

    let repo = AccidentRepository::new(state.pool.clone());
    let mut accident = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    accident.apply(input, Utc::now());
    if !repo.update(&accident).await? {
        // Deleted between read and write
        return Err(not_found(id));
    }

    info!("Accident {} updated by {}", id, auth.actor());

    Ok(Json(accident.into()))
}

/// DELETE /api/accidents/{id}
pub async fn delete_accident(
    State(state): State<AppState>,
    auth: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let repo = AccidentRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(not_found(id));
    }

    info!("Accident {} deleted by {}", id, auth.actor());

    Ok(StatusCode::NO_CONTENT)
}

#[track_caller]
fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Accident {id} not found"))
}
